//! End-to-end driver: fills a map with randomized keys, prints it and its
//! bucket layout, then exercises membership checks, removal, lookup, and
//! clearing. Pass a seed argument to make a run repeatable.

use chained_hashmap::ChainedHashMap;
use std::time::{SystemTime, UNIX_EPOCH};

const NUM_ELEMENTS: usize = 20;
const KEY_LENGTH: usize = 5;
const MAX_VALUE: u32 = 100;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

/// Uppercase A..Z key of fixed length.
fn random_key(stream: &mut impl Iterator<Item = u64>) -> String {
    (0..KEY_LENGTH)
        .map(|_| {
            let x = stream.next().unwrap_or_default();
            char::from(b'A' + (x % 26) as u8)
        })
        .collect()
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or(0x9e37_79b9_7f4a_7c15)
        });
    let mut stream = lcg(seed);

    let keys: Vec<String> = (0..NUM_ELEMENTS)
        .map(|_| random_key(&mut stream))
        .collect();
    let values: Vec<u32> = (0..NUM_ELEMENTS)
        .map(|_| (stream.next().unwrap_or_default() % u64::from(MAX_VALUE + 1)) as u32)
        .collect();

    println!("Seed: {}", seed);
    println!();
    println!("The elements used to make the hash map");
    println!("{:?}", keys);
    println!("{:?}", values);
    println!();

    let mut map = ChainedHashMap::new();
    for (key, value) in keys.iter().zip(&values) {
        map.insert(key.clone(), *value);
    }

    println!("The hash map");
    println!("{}", map);
    println!();
    println!("How the data is structured across the buckets");
    print!("{}", map.bucket_layout());
    println!();
    println!("Size: {}", map.len());
    println!("Empty: {}", map.is_empty());
    println!();

    // Generated keys are longer than this probe and values stay at or
    // below MAX_VALUE, so both probes are known misses.
    println!("Test key we know does not exist");
    println!("{}", map.contains_key("AAA"));
    println!("Test random key we know does exist");
    let known_key = pick(&keys, &mut stream);
    println!("{}", map.contains_key(known_key.as_str()));
    println!();

    println!("Test value we know does not exist");
    println!("{}", map.contains_value(&(MAX_VALUE + 1)));
    println!("Test random value we know does exist");
    let known_value = values[next_index(&mut stream, NUM_ELEMENTS)];
    println!("{}", map.contains_value(&known_value));
    println!();

    // Random picks may repeat a key or hit one generated twice, so this
    // deletes between one and four entries.
    println!("Remove four random keys");
    for _ in 0..4 {
        let key = pick(&keys, &mut stream);
        map.remove(key.as_str());
    }
    println!();
    println!("The updated hash map");
    println!("{}", map);
    println!();
    println!("How the data is structured across the buckets");
    print!("{}", map.bucket_layout());
    println!();
    println!("Size: {}", map.len());
    println!("Empty: {}", map.is_empty());
    println!();

    // A pick may name a key that was just removed; keep drawing until one
    // that is still present comes up.
    let (found_key, found_value) = loop {
        let key = pick(&keys, &mut stream);
        if let Some(value) = map.get(key.as_str()) {
            break (key, *value);
        }
    };
    println!("Get the value of a key still present: {}", found_key);
    println!("Corresponding value: {}", found_value);
    println!();

    println!("Clear the hash map");
    map.clear();
    println!("{}", map);
    println!("Size: {}", map.len());
    println!("Empty: {}", map.is_empty());
}

fn next_index(stream: &mut impl Iterator<Item = u64>, bound: usize) -> usize {
    (stream.next().unwrap_or_default() % bound as u64) as usize
}

fn pick<'a>(keys: &'a [String], stream: &mut impl Iterator<Item = u64>) -> &'a String {
    &keys[next_index(stream, keys.len())]
}
