//! Crate-level tests, grouped by behaviour


mod extraction_tests;
