//! Process-wide signature interning.
//!
//! The table maps slot arrays to their canonical [`Signature`]. Lookups of
//! known shapes take a shard read lock; a new shape is fully built outside
//! any lock and then published with an atomic insert-if-absent. When two
//! threads race on the same new shape, the loser drops its candidate and
//! returns the winner's instance.
//!
//! Entries are never removed. The number of distinct call shapes in a
//! program is small and bounded, so the table is a permanent memo.

use std::sync::OnceLock;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use r_intern::{SharedInterner, Symbol};
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

use crate::arg_name::ArgName;
use crate::config::{log_perf_warning, PerfHook, PerfWarning, TableConfig};
use crate::error::SignatureError;
use crate::signature::Signature;
use crate::spread::SpreadShape;

/// Slot buffer used for lookups; typical arities never spill.
type SlotBuf = SmallVec<[ArgName; 8]>;

static GLOBAL: OnceLock<SignatureTable> = OnceLock::new();

/// Names are shared by every table in the process. `Symbol` equality only
/// compares handles, so signatures can move between tables safely only when
/// their handles come from the same interner.
static NAMES: OnceLock<SharedInterner> = OnceLock::new();

/// Deduplicating registry of argument signatures.
///
/// # Thread Safety
/// `SignatureTable` is `Send + Sync`. The map is a sharded `DashMap`;
/// published signatures are immutable and can be read from any thread.
pub struct SignatureTable {
    interner: SharedInterner,
    map: DashMap<Box<[ArgName]>, Signature, FxBuildHasher>,
    /// `empties[n]` is the canonical all-positional signature of arity `n`.
    empties: Box<[Signature]>,
    perf_hook: Option<PerfHook>,
}

impl SignatureTable {
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    pub fn with_config(config: TableConfig) -> Self {
        let TableConfig {
            empty_cache_len,
            perf_hook,
        } = config;

        let mut table = SignatureTable {
            interner: NAMES.get_or_init(SharedInterner::new).clone(),
            map: DashMap::with_hasher(FxBuildHasher),
            empties: Box::default(),
            perf_hook,
        };
        // The empties go through the map so `get` finds the same instances.
        let empties = (0..empty_cache_len)
            .map(|len| table.intern_slots(&vec![ArgName::Positional; len]))
            .collect();
        table.empties = empties;
        table
    }

    /// The process-wide table, created with the default config on first use.
    pub fn global() -> &'static SignatureTable {
        GLOBAL.get_or_init(SignatureTable::new)
    }

    /// Install the process-wide table with a custom config.
    ///
    /// Must run before anything calls [`global`](Self::global).
    pub fn init_global(config: TableConfig) -> Result<&'static SignatureTable, SignatureError> {
        GLOBAL
            .set(SignatureTable::with_config(config))
            .map_err(|_| SignatureError::GlobalAlreadyInitialized)?;
        Ok(Self::global())
    }

    /// The process-wide interner holding every name any table has seen.
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Intern `name` so it can be used in [`ArgName::Named`].
    pub fn symbol(&self, name: &str) -> Symbol {
        self.interner.intern_symbol(name)
    }

    /// Canonical signature for per-slot names. `None` means no name; empty
    /// strings are kept as names.
    pub fn get<S: AsRef<str>>(&self, names: &[Option<S>]) -> Signature {
        let slots: SlotBuf = names
            .iter()
            .map(|name| match name {
                Some(name) => ArgName::Named(self.symbol(name.as_ref())),
                None => ArgName::Positional,
            })
            .collect();
        self.get_slots(&slots)
    }

    /// Like [`get`](Self::get), but empty strings also mean "no name".
    pub fn get_converting_empty<S: AsRef<str>>(&self, names: &[Option<S>]) -> Signature {
        let slots: SlotBuf = names
            .iter()
            .map(|name| match name {
                Some(name) if !name.as_ref().is_empty() => {
                    ArgName::Named(self.symbol(name.as_ref()))
                }
                Some(_) | None => ArgName::Positional,
            })
            .collect();
        self.get_slots(&slots)
    }

    /// Canonical signature for raw slots, including [`ArgName::Unmatched`].
    pub fn get_slots(&self, slots: &[ArgName]) -> Signature {
        if slots.len() < self.empties.len() && slots.iter().all(|s| *s == ArgName::Positional) {
            return self.empties[slots.len()].clone();
        }
        self.intern_slots(slots)
    }

    /// Canonical all-positional signature of arity `len`.
    pub fn empty(&self, len: usize) -> Signature {
        if let Some(signature) = self.empties.get(len) {
            return signature.clone();
        }
        self.report(&PerfWarning::LargeEmptySignature {
            len,
            cache_len: self.empties.len(),
        });
        self.intern_slots(&vec![ArgName::Positional; len])
    }

    /// Signature from a vector's `names` attribute.
    ///
    /// A missing attribute gives no signature; empty names become
    /// positional slots.
    pub fn from_names_attribute<S: AsRef<str>>(&self, names: Option<&[S]>) -> Option<Signature> {
        let names = names?;
        let slots: SlotBuf = names
            .iter()
            .map(|name| match name.as_ref() {
                "" => ArgName::Positional,
                name => ArgName::Named(self.symbol(name)),
            })
            .collect();
        Some(self.get_slots(&slots))
    }

    /// Signature of a call after every spread slot has been replaced by the
    /// names of its expansion.
    ///
    /// # Panics
    /// Panics if `shape` does not cover exactly the slots of `supplied`.
    pub fn flatten_names(&self, supplied: &Signature, shape: &SpreadShape) -> Signature {
        self.try_flatten_names(supplied, shape)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_flatten_names(
        &self,
        supplied: &Signature,
        shape: &SpreadShape,
    ) -> Result<Signature, SignatureError> {
        if supplied.len() != shape.len() {
            return Err(SignatureError::SpreadLengthMismatch {
                signature: supplied.len(),
                shape: shape.len(),
            });
        }
        let mut slots = SlotBuf::with_capacity(shape.flattened_len());
        for (index, group) in shape.groups().iter().enumerate() {
            match group {
                Some(expansion) => slots.extend((0..expansion.len()).map(|j| expansion.slot(j))),
                None => slots.push(supplied.slot(index)),
            }
        }
        Ok(self.get_slots(&slots))
    }

    /// Number of distinct shapes interned so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn report(&self, warning: &PerfWarning) {
        match &self.perf_hook {
            Some(hook) => hook(warning),
            None => log_perf_warning(warning),
        }
    }

    fn intern_slots(&self, slots: &[ArgName]) -> Signature {
        // Fast path: known shape. The read guard is released before `entry`
        // takes the shard's write lock.
        let known = self.map.get(slots).map(|entry| entry.value().clone());
        if let Some(signature) = known {
            return signature;
        }

        let candidate = Signature::build(slots);
        match self.map.entry(Box::from(slots)) {
            // Lost the race; `candidate` is dropped unpublished.
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                tracing::trace!(signature = %candidate, "interned new signature");
                entry.insert(candidate).value().clone()
            }
        }
    }
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self::new()
    }
}
