use log::info;
use strtable::{HashTable, TableError};

const PAIRS: [(&str, &str); 12] = [
    ("apple", "red"),
    ("banana", "yellow"),
    ("carrot", "orange"),
    ("dog", "brown"),
    ("elephant", "gray"),
    ("frog", "green"),
    ("grape", "purple"),
    ("hat", "black"),
    ("ice cream", "white"),
    ("jacket", "blue"),
    ("kite", "pink"),
    ("lion", "golden"),
];

fn main() -> Result<(), TableError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut table = HashTable::new();
    for (k, v) in PAIRS {
        table.set(k, v)?;
    }

    for key in ["apple", "banana", "lion"] {
        info!(target: "get", "{key}: {:?}", table.get(key)?);
    }

    info!(target: "has", "Has 'dog' key? {}", table.has("dog")?);
    info!(target: "has", "Has 'zebra' key? {}", table.has("zebra")?);

    table.remove("frog")?;
    info!(target: "remove", "Has 'frog' key after removal? {}", table.has("frog")?);

    info!(target: "enumerate", "Keys: {:?}", table.keys());
    info!(target: "enumerate", "Values: {:?}", table.values());
    info!(target: "enumerate", "Entries: {:?}", table.entries());

    info!(target: "resize", "Current capacity before resizing: {}", table.capacity());
    table.set("monkey", "brown")?;
    table.set("tree", "green")?;
    table.set("eyes", "gray-blue")?;
    info!(target: "resize", "Capacity after resizing: {}", table.capacity());
    info!(target: "length", "The number of stored keys is: {}", table.len());

    table.clear();
    info!(target: "clear", "Keys after clearing: {:?}", table.keys());
    info!(target: "clear", "Values after clearing: {:?}", table.values());

    Ok(())
}
