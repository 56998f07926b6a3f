//! Sharded string interner for argument and formal names.
//!
//! Provides O(1) interning and lookup with thread-safe concurrent access
//! via per-shard locking. Interned strings are leaked and live for the
//! rest of the process, which is what lets [`Symbol`] hand out
//! `&'static str` text.

// Arc is needed here for SharedInterner - the interner is shared by every
// signature table and call site thread.
#![expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedInterner thread-safety"
)]

use crate::{Name, Symbol};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Names every R session touches immediately: the var-arg marker, the
/// positional `..N` forms and the formals of the most common builtins.
const PRE_INTERNED: &[&str] = &[
    "...", "..1", "..2", "..3", "..4", "..5", "..6", "..7", "..8", "..9", "x", "y", "i", "j",
    "value", "object", "na.rm", "drop", "exact", "FUN", "USE.NAMES", "simplify", "envir", "expr",
    "name", "names", "what", "which", "use.names", "recursive",
];

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded its 28-bit local index space.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {shard_idx} exceeded capacity: {count} strings, max is {}",
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        // Pre-intern empty string at index 0
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }
}

/// Sharded string interner for concurrent access.
///
/// # Thread Safety
/// Uses `RwLock` per shard. Lookups of already-interned names only take a
/// read lock; inserts take the shard's write lock and re-check.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    /// Total count of interned strings across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner with the common R names pre-interned.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        let interner = Self {
            shards,
            total_count: AtomicUsize::new(1),
        };
        for s in PRE_INTERNED {
            interner.intern(s);
        }
        interner
    }

    /// Compute shard for a string based on its first bytes.
    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Try to intern a string, returning its symbol or an error on overflow.
    pub fn try_intern_symbol(&self, s: &str) -> Result<Symbol, InternError> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        // Fast path: already interned
        {
            let guard = shard.read();
            if let Some((&text, &local)) = guard.map.get_key_value(s) {
                return Ok(Symbol::new(Name::new(shard_idx_u32, local), text));
            }
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some((&text, &local)) = guard.map.get_key_value(s) {
            return Ok(Symbol::new(Name::new(shard_idx_u32, local), text));
        }

        let count = guard.strings.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard_idx, count })?;

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        drop(guard);

        let total = self.total_count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(name = leaked, shard = shard_idx, total, "interned name");

        Ok(Symbol::new(Name::new(shard_idx_u32, local), leaked))
    }

    /// Intern a string, returning its symbol.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern_symbol` to handle
    /// that case.
    #[inline]
    pub fn intern_symbol(&self, s: &str) -> Symbol {
        self.try_intern_symbol(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.intern_symbol(s).name()
    }

    /// Look up the string for a Name.
    ///
    /// All interned strings are leaked, so the result is `'static`.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.local()]
    }

    /// Find the symbol for `s` without interning it.
    pub fn get(&self, s: &str) -> Option<Symbol> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let guard = self.shards[shard_idx].read();
        guard
            .map
            .get_key_value(s)
            .map(|(&text, &local)| Symbol::new(Name::new(shard_idx_u32, local), text))
    }

    /// Get the number of interned strings (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// Lets consumers accept any name source without depending on
/// `StringInterner` directly.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Shared interner for thread-safe interning across call sites.
///
/// This newtype is the only sanctioned way to share a `StringInterner`
/// through an `Arc`.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
