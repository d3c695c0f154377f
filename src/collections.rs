mod priority_queue;

use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

pub use priority_queue::PriorityQueue;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion ordered set, hashed with rustc_hash
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
