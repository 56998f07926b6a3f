//! Name interning for the R runtime.
//!
//! Argument names, formal parameter names and the `...` marker are interned
//! once per interner; the signature tables of a process all share one. Interned names compare as 32-bit handles, which is what
//! signature lookups and `index_of_name` scans rely on.

mod interner;
mod name;

pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::{Name, Symbol};
