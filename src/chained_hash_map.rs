//! ChainedHashMap: the bucket array, its chains, and the growth protocol.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;

use slotmap::{DefaultKey, SlotMap};
use std::collections::hash_map::RandomState;

/// Bucket count of a freshly constructed map.
pub const INITIAL_CAPACITY: usize = 10;

/// Entries-to-buckets ratio above which the bucket array doubles.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    /// Hash computed once at insertion; bucket placement is always
    /// `hash % capacity`, so growth never calls back into `K: Hash`.
    hash: u64,
}

/// A hash map that keeps its bucket array and collision chains explicit.
///
/// Entries live in a slot arena; each bucket holds its chain as a vector of
/// slot keys in insertion order. Growth doubles the bucket array whenever
/// the upcoming insertion would push the load factor over
/// [`MAX_LOAD_FACTOR`], then re-homes the slot keys by recomputing
/// `hash % capacity` from the stored hashes.
pub struct ChainedHashMap<K, V, S = RandomState> {
    hasher: S,
    /// One chain per bucket; chains are append-only between removals, so a
    /// chain's order is the order its keys arrived in.
    buckets: Vec<Vec<DefaultKey>>,
    slots: SlotMap<DefaultKey, Entry<K, V>>,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty map with [`INITIAL_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current bucket count. Starts at [`INITIAL_CAPACITY`] and only ever
    /// doubles; it never shrinks, not even on [`clear`](Self::clear).
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Entries-to-buckets ratio. At or below [`MAX_LOAD_FACTOR`] after
    /// every completed insertion.
    pub fn load_factor(&self) -> f64 {
        self.slots.len() as f64 / self.buckets.len() as f64
    }

    /// Removes every entry. Bucket count is left as is.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.slots.clear();
    }

    /// Whether any entry currently holds `value`. Values are not indexed,
    /// so this walks every chain.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Visits entries in bucket-index order, then chain order within each
    /// bucket. This is the order [`Display`](fmt::Display) renders.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut outer = self.buckets.iter();
        let inner = outer
            .next()
            .expect("the bucket array is never empty")
            .iter();
        Iter {
            slots: &self.slots,
            outer,
            inner,
        }
    }

    /// Returns an adapter whose `Display` output shows each bucket index
    /// and the chain hanging off it, one bucket per line.
    pub fn bucket_layout(&self) -> BucketLayout<'_, K, V, S> {
        BucketLayout { map: self }
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty map with [`INITIAL_CAPACITY`] buckets that hashes
    /// keys with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        let mut buckets = Vec::with_capacity(INITIAL_CAPACITY);
        buckets.resize_with(INITIAL_CAPACITY, Vec::new);
        Self {
            hasher,
            buckets,
            slots: SlotMap::with_key(),
        }
    }

    fn make_hash<Q>(&self, key: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(key)
    }

    /// Home bucket for a stored hash. Capacity is never zero and the hash
    /// is unsigned, so the index needs no further clamping.
    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Finds the slot key of the entry for `key` within one chain, matching
    /// on stored hash first and key equality second.
    fn chain_find<Q>(&self, index: usize, hash: u64, key: &Q) -> Option<DefaultKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.buckets[index].iter().copied().find(|&slot| {
            self.slots
                .get(slot)
                .map(|entry| entry.hash == hash && entry.key.borrow() == key)
                .unwrap_or(false)
        })
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).is_some()
    }

    /// Returns a reference to the value stored under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let slot = self.chain_find(self.bucket_of(hash), hash, key)?;
        self.slots.get(slot).map(|entry| &entry.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let slot = self.chain_find(self.bucket_of(hash), hash, key)?;
        self.slots.get_mut(slot).map(|entry| &mut entry.value)
    }

    /// Inserts `key -> value`. If the key is already present its value is
    /// replaced and the old value returned; the entry keeps its chain
    /// position.
    ///
    /// The growth check runs before the insertion is attempted, overwrite
    /// or not, so no completed insert can leave the load factor above
    /// [`MAX_LOAD_FACTOR`].
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.growth_due() {
            self.grow();
        }
        let hash = self.make_hash(&key);
        let index = self.bucket_of(hash);
        if let Some(slot) = self.chain_find(index, hash, &key) {
            let entry = self
                .slots
                .get_mut(slot)
                .expect("chain slot keys refer to live slots");
            return Some(mem::replace(&mut entry.value, value));
        }
        let slot = self.slots.insert(Entry { key, value, hash });
        self.buckets[index].push(slot);
        None
    }

    /// Removes the entry for `key` and returns its value, or `None` if the
    /// key is absent. Removing is not an error twice: the second call just
    /// reports the absence.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let index = self.bucket_of(hash);
        let position = self.buckets[index].iter().position(|&slot| {
            self.slots
                .get(slot)
                .map(|entry| entry.hash == hash && entry.key.borrow() == key)
                .unwrap_or(false)
        })?;
        // Positional removal keeps the rest of the chain in arrival order.
        let slot = self.buckets[index].remove(position);
        self.slots.remove(slot).map(|entry| entry.value)
    }

    /// True when admitting one more entry would push the load factor over
    /// [`MAX_LOAD_FACTOR`].
    fn growth_due(&self) -> bool {
        (self.slots.len() + 1) as f64 / self.buckets.len() as f64 > MAX_LOAD_FACTOR
    }

    /// Doubles the bucket array and re-homes every chain entry by its
    /// stored hash. The new array is built completely before it replaces
    /// the old one, so no caller can observe a half-migrated table.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(2);
        let mut rehomed: Vec<Vec<DefaultKey>> = Vec::with_capacity(new_capacity);
        rehomed.resize_with(new_capacity, Vec::new);
        for chain in self.buckets.drain(..) {
            for slot in chain {
                let hash = self
                    .slots
                    .get(slot)
                    .expect("chain slot keys refer to live slots")
                    .hash;
                rehomed[(hash % new_capacity as u64) as usize].push(slot);
            }
        }
        self.buckets = rehomed;
    }
}

impl<K, V, S> fmt::Display for ChainedHashMap<K, V, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    /// Renders `[<k1, v1>, <k2, v2>]` in iteration order, `[]` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "<{}, {}>", key, value)?;
        }
        f.write_str("]")
    }
}

impl<K, V, S> fmt::Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashMap")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("load_factor", &self.load_factor())
            .finish()
    }
}

/// Iterator over `(&K, &V)` pairs in bucket order, then chain order.
pub struct Iter<'a, K, V> {
    slots: &'a SlotMap<DefaultKey, Entry<K, V>>,
    outer: core::slice::Iter<'a, Vec<DefaultKey>>,
    inner: core::slice::Iter<'a, DefaultKey>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&slot) = self.inner.next() {
                let entry = self
                    .slots
                    .get(slot)
                    .expect("chain slot keys refer to live slots");
                return Some((&entry.key, &entry.value));
            }
            self.inner = self.outer.next()?.iter();
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collision diagnostic returned by
/// [`ChainedHashMap::bucket_layout`]. `Display` prints one line per bucket
/// index with each chain entry rendered `<key, value> -> ` in arrival
/// order, so congruent keys show up on the same line.
pub struct BucketLayout<'a, K, V, S = RandomState> {
    map: &'a ChainedHashMap<K, V, S>,
}

impl<K, V, S> fmt::Display for BucketLayout<'_, K, V, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.map.buckets.iter().enumerate() {
            write!(f, "{}  ", index)?;
            for &slot in chain {
                let entry = self
                    .map
                    .slots
                    .get(slot)
                    .expect("chain slot keys refer to live slots");
                write!(f, "<{}, {}> -> ", entry.key, entry.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq,
{
    /// Walks the whole structure and asserts every structural invariant:
    /// capacity on the doubling ladder, every entry in its home bucket,
    /// every slot key in exactly one chain, at most one entry per key, and
    /// the load factor within bound.
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        let mut expected = INITIAL_CAPACITY;
        while expected < self.buckets.len() {
            expected = expected.saturating_mul(2);
        }
        assert_eq!(
            expected,
            self.buckets.len(),
            "capacity must be a doubling of the initial capacity"
        );

        let mut walked = 0;
        let mut seen = HashSet::new();
        for (index, chain) in self.buckets.iter().enumerate() {
            for &slot in chain {
                let entry = self.slots.get(slot).expect("chain slot keys refer to live slots");
                assert_eq!(
                    (entry.hash % self.buckets.len() as u64) as usize,
                    index,
                    "entry must live in its home bucket"
                );
                assert!(seen.insert(slot), "slot key must appear in exactly one chain");
                walked += 1;
            }
        }
        assert_eq!(walked, self.slots.len(), "len must equal the chain-walk count");

        for chain in &self.buckets {
            for (i, &a) in chain.iter().enumerate() {
                for &b in &chain[i + 1..] {
                    assert!(
                        self.slots[a].key != self.slots[b].key,
                        "a chain must hold at most one entry per key"
                    );
                }
            }
        }

        assert!(
            self.load_factor() <= MAX_LOAD_FACTOR,
            "load factor bound exceeded: {}",
            self.load_factor()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::hash::Hasher;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Hasher that sends every key to bucket 0, for forcing collisions.
    #[derive(Clone, Default)]
    struct ConstBuildHasher;

    struct ConstHasher;

    impl BuildHasher for ConstBuildHasher {
        type Hasher = ConstHasher;
        fn build_hasher(&self) -> Self::Hasher {
            ConstHasher
        }
    }

    impl Hasher for ConstHasher {
        fn write(&mut self, _bytes: &[u8]) {}
        fn finish(&self) -> u64 {
            0
        }
    }

    /// Hasher that reports a `u64` key as its own hash, so home buckets
    /// are predictable: key % capacity.
    #[derive(Clone, Default)]
    struct IdentityBuildHasher;

    struct IdentityHasher(u64);

    impl BuildHasher for IdentityBuildHasher {
        type Hasher = IdentityHasher;
        fn build_hasher(&self) -> Self::Hasher {
            IdentityHasher(0)
        }
    }

    impl Hasher for IdentityHasher {
        fn write(&mut self, bytes: &[u8]) {
            for &byte in bytes {
                self.0 = (self.0 << 8) | u64::from(byte);
            }
        }
        fn write_u64(&mut self, n: u64) {
            self.0 = n;
        }
        fn finish(&self) -> u64 {
            self.0
        }
    }

    /// Invariant: a fresh map is empty, at the fixed initial capacity.
    #[test]
    fn fresh_map_is_empty_at_initial_capacity() {
        let map: ChainedHashMap<String, i32> = ChainedHashMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.capacity(), INITIAL_CAPACITY);
        assert_eq!(map.load_factor(), 0.0);
        assert_eq!(map.iter().count(), 0);
        assert_eq!(map.get("anything"), None);
        assert_eq!(map.to_string(), "[]");
    }

    /// Invariant: insert-then-get round-trips the stored value, and lookups
    /// accept borrowed forms of the key.
    #[test]
    fn insert_then_get_round_trips() {
        let mut map = ChainedHashMap::new();
        assert_eq!(map.insert("alpha".to_string(), 1), None);
        assert_eq!(map.insert("beta".to_string(), 2), None);
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert_eq!(map.get("alpha"), Some(&1));
        assert_eq!(map.get("beta"), Some(&2));
        assert!(map.contains_key("alpha"));
        map.check_invariants();
    }

    /// Invariant: inserting an existing key replaces its value in place,
    /// returns the old value, and leaves the entry count alone.
    #[test]
    fn overwrite_replaces_value_in_place() {
        let mut map = ChainedHashMap::new();
        map.insert("k".to_string(), 1);
        assert_eq!(map.insert("k".to_string(), 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some(&2));
        map.check_invariants();
    }

    /// Invariant: a missing key is a normal outcome, not an error; nothing
    /// about the map changes when one is asked for.
    #[test]
    fn absent_key_reports_none() {
        let mut map = ChainedHashMap::new();
        map.insert("present".to_string(), 1);
        assert_eq!(map.get("missing"), None);
        assert_eq!(map.get_mut("missing"), None);
        assert_eq!(map.remove("missing"), None);
        assert!(!map.contains_key("missing"));
        assert_eq!(map.len(), 1);
        map.check_invariants();
    }

    /// Invariant: remove returns the stored value exactly once; the second
    /// removal of the same key reports absence.
    #[test]
    fn remove_yields_value_once() {
        let mut map = ChainedHashMap::new();
        map.insert("k".to_string(), 7);
        assert_eq!(map.remove("k"), Some(7));
        assert_eq!(map.len(), 0);
        assert!(!map.contains_key("k"));
        assert_eq!(map.remove("k"), None);
        map.check_invariants();
    }

    /// Invariant: get_mut exposes the live value; writes through it are
    /// visible to later reads.
    #[test]
    fn get_mut_writes_through() {
        let mut map = ChainedHashMap::new();
        map.insert("k".to_string(), 1);
        if let Some(value) = map.get_mut("k") {
            *value += 10;
        }
        assert_eq!(map.get("k"), Some(&11));
    }

    /// Invariant: contains_value finds a value in any chain and never
    /// reports one that is not stored.
    #[test]
    fn contains_value_scans_every_chain() {
        let mut map = ChainedHashMap::new();
        for i in 0..12 {
            map.insert(format!("k{}", i), i * 10);
        }
        assert!(map.contains_value(&0));
        assert!(map.contains_value(&110));
        assert!(!map.contains_value(&5));
        map.remove("k3");
        assert!(!map.contains_value(&30));
    }

    /// Invariant: clear removes every entry but keeps the grown bucket
    /// array, and the map remains usable afterwards.
    #[test]
    fn clear_keeps_capacity() {
        let mut map = ChainedHashMap::new();
        for i in 0..20 {
            map.insert(format!("k{}", i), i);
        }
        let grown = map.capacity();
        assert!(grown > INITIAL_CAPACITY);

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.capacity(), grown);
        assert!(!map.contains_key("k0"));
        map.check_invariants();

        map.insert("again".to_string(), 1);
        assert_eq!(map.get("again"), Some(&1));
    }

    /// Invariant: the bucket array doubles before the insertion that would
    /// push the load factor over the bound; the eighth distinct insert into
    /// a fresh map lands in a 20-bucket table.
    #[test]
    fn eighth_insert_doubles_the_buckets() {
        let mut map = ChainedHashMap::new();
        for i in 0..7 {
            map.insert(format!("k{}", i), i);
            assert_eq!(map.capacity(), INITIAL_CAPACITY);
        }
        map.insert("k7".to_string(), 7);
        assert_eq!(map.capacity(), 20);
        assert_eq!(map.len(), 8);
        for i in 0..8 {
            assert_eq!(map.get(format!("k{}", i).as_str()), Some(&i));
        }
        map.check_invariants();
    }

    /// Invariant: the load factor bound holds after every insert across
    /// several doublings, and no entry is lost to a rehash.
    #[test]
    fn load_factor_bound_holds_across_doublings() {
        let mut map = ChainedHashMap::new();
        for i in 0..40 {
            map.insert(i.to_string(), i);
            assert!(map.load_factor() <= MAX_LOAD_FACTOR);
            map.check_invariants();
        }
        assert_eq!(map.capacity(), 80);
        for i in 0..40 {
            assert_eq!(map.get(i.to_string().as_str()), Some(&i));
        }
    }

    /// Invariant: the growth check runs before every insert, even one that
    /// only overwrites, so an overwrite at the boundary still doubles the
    /// table without changing the entry count.
    #[test]
    fn overwrite_at_the_boundary_still_grows() {
        let mut map = ChainedHashMap::new();
        for i in 0..15 {
            map.insert(format!("k{}", i), i);
        }
        assert_eq!(map.capacity(), 20);
        assert_eq!(map.len(), 15);

        assert_eq!(map.insert("k0".to_string(), 999), Some(0));
        assert_eq!(map.capacity(), 40);
        assert_eq!(map.len(), 15);
        assert_eq!(map.get("k0"), Some(&999));
        map.check_invariants();
    }

    /// Invariant: `K::hash` runs exactly once per inserted key; growth
    /// re-homes entries from stored hashes without calling back into key
    /// code.
    #[test]
    fn growth_does_not_rehash_keys() {
        #[derive(Clone)]
        struct CountingKey {
            id: u64,
            hashes: Rc<Cell<usize>>,
        }

        impl PartialEq for CountingKey {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for CountingKey {}

        impl Hash for CountingKey {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.hashes.set(self.hashes.get() + 1);
                state.write_u64(self.id);
            }
        }

        let calls = Rc::new(Cell::new(0));
        let mut map = ChainedHashMap::new();
        for id in 0..8 {
            map.insert(
                CountingKey {
                    id,
                    hashes: calls.clone(),
                },
                id,
            );
        }
        assert_eq!(map.capacity(), 20, "the eighth insert must double the table");
        assert_eq!(calls.get(), 8, "one hash per insert, none during growth");
    }

    /// Invariant: keys that share a bucket stay independently retrievable
    /// and removable, and removal keeps the rest of the chain in arrival
    /// order.
    #[test]
    fn colliding_keys_resolve_by_equality() {
        let mut map: ChainedHashMap<String, i32, ConstBuildHasher> =
            ChainedHashMap::with_hasher(ConstBuildHasher);
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("c".to_string(), 3);
        map.insert("d".to_string(), 4);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.get("d"), Some(&4));
        map.check_invariants();

        // An interior removal from a chain of four: a trailing entry
        // swapped into the gap would surface here as "d" before "c".
        assert_eq!(map.remove("b"), Some(2));
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), None);
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.len(), 3);
        assert_eq!(map.to_string(), "[<a, 1>, <c, 3>, <d, 4>]");
    }

    /// Invariant: keys congruent modulo the capacity share a home bucket;
    /// keys that are not congruent do not.
    #[test]
    fn congruent_keys_share_a_bucket() {
        let mut map: ChainedHashMap<u64, &str, IdentityBuildHasher> =
            ChainedHashMap::with_hasher(IdentityBuildHasher);
        map.insert(7, "seven");
        map.insert(17, "seventeen");
        map.insert(3, "three");

        let layout = map.bucket_layout().to_string();
        let lines: Vec<&str> = layout.lines().collect();
        assert_eq!(lines.len(), map.capacity());
        assert_eq!(lines[7], "7  <7, seven> -> <17, seventeen> -> ");
        assert_eq!(lines[3], "3  <3, three> -> ");
        assert_eq!(lines[0], "0  ");
        map.check_invariants();
    }

    /// Invariant: Display renders `[]` for an empty map and
    /// `[<k, v>, ...]` in bucket-then-chain order otherwise.
    #[test]
    fn display_renders_angle_bracket_pairs() {
        let mut map: ChainedHashMap<String, i32, ConstBuildHasher> =
            ChainedHashMap::with_hasher(ConstBuildHasher);
        assert_eq!(map.to_string(), "[]");

        map.insert("A".to_string(), 1);
        map.insert("B".to_string(), 2);
        assert_eq!(map.to_string(), "[<A, 1>, <B, 2>]");

        map.clear();
        assert_eq!(map.to_string(), "[]");
    }

    /// Invariant: Debug summarizes occupancy without dumping entries.
    #[test]
    fn debug_summarizes_occupancy() {
        let mut map = ChainedHashMap::new();
        map.insert("k".to_string(), 1);
        let debugged = format!("{:?}", map);
        assert!(debugged.contains("ChainedHashMap"));
        assert!(debugged.contains("len: 1"));
        assert!(debugged.contains("capacity: 10"));
    }

    /// Invariant: iteration order is bucket index first, then arrival order
    /// within the bucket.
    #[test]
    fn iteration_follows_bucket_then_chain_order() {
        let mut map: ChainedHashMap<u64, u64, IdentityBuildHasher> =
            ChainedHashMap::with_hasher(IdentityBuildHasher);
        map.insert(12, 120);
        map.insert(2, 20);
        map.insert(5, 50);

        let pairs: Vec<(u64, u64)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![(12, 120), (2, 20), (5, 50)]);

        let looped: Vec<u64> = (&map).into_iter().map(|(k, _)| *k).collect();
        assert_eq!(looped, vec![12, 2, 5]);
    }
}
