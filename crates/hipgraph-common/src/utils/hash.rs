//! Fast non-cryptographic hashing.
//!
//! Renumbering maps and neighbor sets hash small integers constantly, so we
//! use FxHash throughout instead of the DoS-resistant default.

pub use rustc_hash::FxHasher;

/// A `HashMap` using FxHash.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A `HashSet` using FxHash.
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
