//! chained-hashmap: A single-threaded hash map built on an explicit
//! bucket array with separate chaining and load-factor-driven growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep bucket addressing, collision resolution, and the
//!   resize/rehash protocol small and visible instead of delegating the
//!   index to a table crate, so each can be reasoned about directly.
//! - Layers:
//!   - `Vec<Vec<DefaultKey>>`: the bucket array; each bucket holds its
//!     chain as an insertion-ordered sequence of slot keys.
//!   - `SlotMap<DefaultKey, Entry<K, V>>`: the arena that owns every
//!     entry; chains refer into it by slot key, so growth moves small
//!     copyable keys and never the entries themselves.
//!
//! Constraints
//! - Single-threaded: mutation requires `&mut self`; no locks, no
//!   atomics.
//! - Capacity starts at 10 buckets and only ever doubles; it never
//!   shrinks, not even on `clear`.
//! - The load factor (entries / buckets) stays at or below 0.75 after
//!   every completed insertion: `insert` checks the bound for the
//!   upcoming entry before touching any chain, including inserts that
//!   merely overwrite.
//! - Lookup, insert, and removal are O(1) average via hashing plus a
//!   short chain walk; `contains_value` is O(n) since values carry no
//!   index.
//!
//! Hasher and rehashing invariants
//! - Each entry stores the `u64` hash computed at insertion, and bucket
//!   placement is always `stored hash % capacity`; `K: Hash` runs exactly
//!   once per inserted key and is never invoked during growth.
//! - Growth builds the doubled bucket array completely and then swaps it
//!   in, so a caller can never observe a half-migrated table.
//!
//! Error model
//! - A missing key is a normal outcome, not an error: `get` and `remove`
//!   return `None` for it. There is no error type; `insert` overwrites an
//!   existing key instead of rejecting it, returning the old value.
//!
//! Notes and non-goals
//! - No concurrent access. A wrapper that wants it must hold one
//!   exclusive lock around every operation, because growth replaces the
//!   whole bucket array at once.
//! - Hashing is the standard `BuildHasher` parameter defaulting to
//!   `RandomState`; there is no pluggable strategy layer beyond it.
//! - No entry API, no stable references into entries across mutation,
//!   no serialization.
//! - Iteration order is bucket index, then arrival order within a
//!   bucket. It is not insertion order across the whole map and changes
//!   when the map grows.

mod chained_hash_map;
mod chained_hash_map_proptest;

// Public surface
pub use chained_hash_map::{
    BucketLayout, ChainedHashMap, Iter, INITIAL_CAPACITY, MAX_LOAD_FACTOR,
};
