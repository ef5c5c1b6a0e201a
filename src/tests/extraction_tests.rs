#[cfg(test)]
mod tests {
    use crate::layout::{EPOCH_MILLIS, MAX_DATA_CENTER_ID, MAX_MACHINE_ID};
    use crate::tests::test_utils::BASE_MILLIS;
    use crate::*;
    use rand::Rng;

    #[test]
    fn test_random_identity_round_trip() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let data_center = rng.random_range(0..=MAX_DATA_CENTER_ID);
            let machine = rng.random_range(0..=MAX_MACHINE_ID);
            let generator = IdGenerator::new(data_center, machine).unwrap();

            let id = generator.next_id().unwrap();
            assert_eq!(parse_data_center(id), data_center);
            assert_eq!(parse_machine_id(id), machine);
        }
    }

    #[test]
    fn test_timestamp_offset_matches_clock() {
        let mut rng = rand::rng();

        for _ in 0..100 {
            let millis = BASE_MILLIS + rng.random_range(0..1_000_000_000i64);
            let generator =
                IdGenerator::with_clock(GeneratorConfig::default(), move || millis).unwrap();
            let id = generator.next_id().unwrap();

            let parts = decompose(id);
            assert_eq!(parts.timestamp_offset, millis - EPOCH_MILLIS);
            assert_eq!(parts.timestamp_millis(), millis);
        }
    }

    #[test]
    fn test_system_clock_datetime_is_now() {
        let generator = IdGenerator::new(1, 2).unwrap();
        let before = chrono::Utc::now().timestamp_millis();
        let id = generator.next_id().unwrap();
        let after = chrono::Utc::now().timestamp_millis();

        let dt = decompose(id).datetime().unwrap();
        assert!(dt.timestamp_millis() >= before);
        assert!(dt.timestamp_millis() <= after);
    }

    #[test]
    fn test_decompose_matches_individual_parsers() {
        let generator = IdGenerator::new(17, 29).unwrap();
        for _ in 0..50 {
            let id = generator.next_id().unwrap();
            let parts = decompose(id);
            assert_eq!(parts.timestamp_offset, parse_timestamp_offset(id));
            assert_eq!(parts.data_center_id, parse_data_center(id));
            assert_eq!(parts.machine_id, parse_machine_id(id));
            assert_eq!(parts.sequence, parse_sequence(id));
        }
    }
}
