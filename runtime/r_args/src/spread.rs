//! Rest-argument spreading.
//!
//! A call like `f(a, ..., b = 2)` inside a function that received
//! `...` = `(1, y = 3)` is matched as if it were `f(a, 1, y = 3, b = 2)`.
//! A [`SpreadShape`] records, per supplied slot, what each forwarded `...`
//! expanded to on this call. Call sites keep the previous shape and only
//! rematch when [`SpreadShape::differs_from`] says the expansion changed.

use crate::signature::Signature;

/// Per supplied slot: `None` for an ordinary argument, or the signature of
/// the values a `...` argument expanded to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpreadShape {
    groups: Box<[Option<Signature>]>,
}

impl SpreadShape {
    pub fn new(groups: impl Into<Box<[Option<Signature>]>>) -> Self {
        SpreadShape {
            groups: groups.into(),
        }
    }

    /// Number of supplied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[inline]
    pub fn groups(&self) -> &[Option<Signature>] {
        &self.groups
    }

    /// Expansion at supplied slot `index`, if that slot is spread.
    pub fn group(&self, index: usize) -> Option<&Signature> {
        self.groups.get(index)?.as_ref()
    }

    pub fn has_spread(&self) -> bool {
        self.groups.iter().any(Option::is_some)
    }

    /// Number of slots once every spread slot is expanded.
    pub fn flattened_len(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.as_ref().map_or(1, Signature::len))
            .sum()
    }

    /// True if matching done against `previous` is stale for `self`.
    ///
    /// Expansions compare by interned identity, so this is a pointer
    /// comparison per slot.
    pub fn differs_from(&self, previous: &SpreadShape) -> bool {
        self != previous
    }
}

/// Where a flattened argument comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgSource {
    /// Ordinary supplied argument at this index.
    Direct(usize),
    /// Element `index` of the expansion at supplied slot `group`.
    Spread { group: usize, index: usize },
}

/// Source of every flattened argument, in flattened order.
pub fn flatten_indexes(shape: &SpreadShape) -> Vec<ArgSource> {
    let mut sources = Vec::with_capacity(shape.flattened_len());
    for (group, expansion) in shape.groups().iter().enumerate() {
        match expansion {
            Some(expansion) => {
                sources.extend((0..expansion.len()).map(|index| ArgSource::Spread { group, index }));
            }
            None => sources.push(ArgSource::Direct(group)),
        }
    }
    sources
}
