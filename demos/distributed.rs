use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use dcflake::{decompose, IdGenerator};

fn main() {
    // One generator per (data center, machine) pair, each shared by two threads
    let identities = [(0, 0), (0, 1), (1, 0), (1, 1)];
    let mut handles = vec![];

    for (data_center, machine) in identities {
        let generator = Arc::new(IdGenerator::new(data_center, machine).unwrap());

        for worker in 0..2 {
            let generator = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                let mut ids = Vec::new();
                let mut rng = rng();

                for _ in 0..5 {
                    let id = generator.next_id().unwrap();
                    let parts = decompose(id);
                    println!(
                        "dc={} machine={} worker={} -> {} (offset={}, seq={})",
                        data_center, machine, worker, id, parts.timestamp_offset, parts.sequence
                    );
                    ids.push(id);

                    // Random delay to simulate work
                    let delay = rng.random_range(0..=9);
                    thread::sleep(Duration::from_millis(delay));
                }
                ids
            }));
        }
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all_ids.insert(id), "Duplicate ID generated!");
        }
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
}
