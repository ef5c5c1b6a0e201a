use dcflake::layout::{
    EPOCH_MILLIS, MAX_DATA_CENTER_ID, MAX_MACHINE_ID, MAX_SEQUENCE, MAX_TIMESTAMP_OFFSET,
};
use dcflake::{decompose, Error, IdGenerator};

fn main() -> Result<(), Error> {
    // Create a generator for data center 2, machine 3
    let generator = IdGenerator::new(2, 3)?;

    println!("Layout limits:");
    println!("  Max sequence per ms: {MAX_SEQUENCE}");
    println!("  Max machine ID: {MAX_MACHINE_ID}");
    println!("  Max data center ID: {MAX_DATA_CENTER_ID}");
    println!("  Max timestamp offset: {MAX_TIMESTAMP_OFFSET} ms after {EPOCH_MILLIS}");

    println!("\nGenerated IDs:");
    for i in 0..16 {
        let id = generator.next_id()?;
        print_id(i + 1, id);
    }

    Ok(())
}

fn print_id(index: usize, id: i64) {
    let parts = decompose(id);
    let datetime = parts
        .datetime()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "out of range".to_string());

    println!(
        "  [{index}] {id}: offset={}, date={datetime}, data_center={}, machine={}, sequence={}",
        parts.timestamp_offset, parts.data_center_id, parts.machine_id, parts.sequence
    );
}
