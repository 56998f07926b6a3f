//! Canonical argument signatures.
//!
//! A [`Signature`] describes the argument-name shape of one call or function
//! definition: its arity, the optional name in every slot and where the
//! `...` slots are. Signatures are only ever created through a
//! [`SignatureTable`](crate::SignatureTable), which guarantees that two
//! signatures with equal slots are the same allocation. Equality and hashing
//! are therefore pointer based.

// Arc is the canonical-instance handle; the table hands out clones of it.
#![expect(
    clippy::disallowed_types,
    reason = "Arc is the shared handle for interned signatures"
)]

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use r_intern::Symbol;

use crate::arg_name::ArgName;
use crate::error::SignatureError;

struct SignatureData {
    /// `None` when every slot is positional, so unnamed shapes never
    /// allocate a names array.
    slots: Option<Box<[ArgName]>>,
    len: usize,
    non_null_count: usize,
    /// Ascending indices of the `...` slots.
    var_arg_slots: Box<[usize]>,
}

/// Interned, immutable argument-name shape.
///
/// Cloning is a reference-count bump. Two `Signature`s are equal iff they
/// are the same interned instance, which the owning table makes equivalent
/// to slot-wise value equality.
#[derive(Clone)]
pub struct Signature(Arc<SignatureData>);

impl Signature {
    /// Build a fresh, not yet published signature.
    ///
    /// All derived fields are computed here, before the table can make the
    /// value visible to other threads.
    pub(crate) fn build(slots: &[ArgName]) -> Self {
        let len = slots.len();
        let non_null_count = slots.iter().filter(|slot| slot.is_named()).count();
        let var_arg_slots = slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_var_arg())
            .map(|(index, _)| index)
            .collect();
        let slots = if slots.iter().all(|slot| *slot == ArgName::Positional) {
            None
        } else {
            Some(Box::from(slots))
        };

        Signature(Arc::new(SignatureData {
            slots,
            len,
            non_null_count,
            var_arg_slots,
        }))
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len
    }

    /// True for the canonical zero-arity signature.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.len == 0
    }

    /// Number of slots carrying a real name.
    #[inline]
    pub fn non_null_count(&self) -> usize {
        self.0.non_null_count
    }

    /// True if no slot carries a name.
    #[inline]
    pub fn is_all_positional(&self) -> bool {
        self.0.slots.is_none()
    }

    /// The raw slot at `index`.
    pub fn try_slot(&self, index: usize) -> Result<ArgName, SignatureError> {
        if index >= self.0.len {
            return Err(SignatureError::SlotOutOfRange {
                index,
                len: self.0.len,
            });
        }
        Ok(self
            .0
            .slots
            .as_ref()
            .map_or(ArgName::Positional, |slots| slots[index]))
    }

    /// The raw slot at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn slot(&self, index: usize) -> ArgName {
        self.try_slot(index).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Name at `index`, or `None` for positional and unmatched slots.
    #[inline]
    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.slot(index).as_str()
    }

    /// Interned name at `index`.
    #[inline]
    pub fn symbol(&self, index: usize) -> Option<Symbol> {
        self.slot(index).symbol()
    }

    /// True if `index` holds the unmatched marker rather than plain absence.
    #[inline]
    pub fn is_unmatched(&self, index: usize) -> bool {
        self.slot(index) == ArgName::Unmatched
    }

    #[inline]
    pub fn is_var_arg(&self, index: usize) -> bool {
        self.slot(index).is_var_arg()
    }

    #[inline]
    pub fn var_arg_count(&self) -> usize {
        self.0.var_arg_slots.len()
    }

    /// All `...` slot indices, ascending.
    #[inline]
    pub fn var_arg_indices(&self) -> &[usize] {
        &self.0.var_arg_slots
    }

    /// Index of the `k`-th `...` slot.
    #[inline]
    pub fn nth_var_arg_index(&self, k: usize) -> Option<usize> {
        self.0.var_arg_slots.get(k).copied()
    }

    /// The single `...` slot, if any.
    ///
    /// Only defined for signatures with at most one var-arg slot; check
    /// [`var_arg_count`](Self::var_arg_count) first otherwise.
    pub fn try_var_arg_index(&self) -> Result<Option<usize>, SignatureError> {
        match &*self.0.var_arg_slots {
            [] => Ok(None),
            [index] => Ok(Some(*index)),
            many => Err(SignatureError::AmbiguousVarArg { count: many.len() }),
        }
    }

    /// The single `...` slot, if any.
    ///
    /// # Panics
    /// Panics if the signature has more than one var-arg slot.
    #[inline]
    pub fn var_arg_index(&self) -> Option<usize> {
        self.try_var_arg_index().unwrap_or_else(|e| panic!("{e}"))
    }

    /// First slot whose name equals `name`.
    ///
    /// Arities are small, so this is a plain scan.
    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.0
            .slots
            .as_ref()?
            .iter()
            .position(|slot| slot.as_str() == Some(name))
    }

    /// First slot holding `symbol`. Compares interned handles only.
    pub fn index_of_symbol(&self, symbol: Symbol) -> Option<usize> {
        self.0
            .slots
            .as_ref()?
            .iter()
            .position(|slot| *slot == ArgName::Named(symbol))
    }

    /// Per-slot names, `None` where there is no name.
    ///
    /// The iterator is cheap to clone, and calling `names` again restarts it.
    pub fn names(&self) -> impl ExactSizeIterator<Item = Option<&'static str>> + Clone + '_ {
        (0..self.0.len).map(move |index| self.name(index))
    }

    /// Same interned instance.
    #[inline]
    pub fn ptr_eq(a: &Signature, b: &Signature) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Signature {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Signature::ptr_eq(self, other)
    }
}

impl Eq for Signature {}

impl Hash for Signature {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Signature[")?;
        for (index, name) in self.names().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name.unwrap_or("NULL"))?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for index in 0..self.len() {
            match self.slot(index) {
                ArgName::Named(sym) => list.entry(&sym.as_str()),
                ArgName::Positional => list.entry(&format_args!("_")),
                ArgName::Unmatched => list.entry(&format_args!("<unmatched>")),
            };
        }
        list.finish()
    }
}
