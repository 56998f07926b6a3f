//! Per-slot argument names.

use r_intern::Symbol;

/// The reserved name of the "rest arguments" slot.
pub const VARARG_NAME: &str = "...";

/// What a signature slot says about its argument.
///
/// `Positional` and `Unmatched` both read as "no name" through
/// [`Signature::name`](crate::Signature::name). `Unmatched` only appears in
/// signatures produced by argument matching, where it marks a formal
/// parameter that received no actual argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgName {
    Named(Symbol),
    Positional,
    Unmatched,
}

impl ArgName {
    #[inline]
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            ArgName::Named(sym) => Some(sym),
            ArgName::Positional | ArgName::Unmatched => None,
        }
    }

    #[inline]
    pub fn as_str(self) -> Option<&'static str> {
        self.symbol().map(Symbol::as_str)
    }

    #[inline]
    pub fn is_named(self) -> bool {
        matches!(self, ArgName::Named(_))
    }

    /// True for a slot named exactly `...`.
    #[inline]
    pub fn is_var_arg(self) -> bool {
        self.as_str() == Some(VARARG_NAME)
    }
}
