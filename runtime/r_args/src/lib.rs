//! Argument signatures for the R runtime.
//!
//! Every call site and every function definition describes its arguments
//! with a [`Signature`]: the arity, the optional name in each slot and the
//! positions of `...`. Signatures are interned in a [`SignatureTable`], so
//! equal shapes are one shared instance and compare by pointer.
//! [`ArgumentList`] binds a signature to the per-slot payloads of one call.
//!
//! # Global table
//!
//! The runtime uses one process-wide table ([`SignatureTable::global`]).
//! The free functions in this crate ([`get`], [`empty`], ...) go through
//! it. Tests and embedders that want isolation create their own table.
//!
//! # Logging
//!
//! New shapes are logged at `trace`, slow-path diagnostics at `warn` on the
//! `r_args::perf` target. Call [`init_tracing`] and set `RUST_LOG` to see
//! them.

mod arg_name;
mod arguments;
mod config;
mod error;
mod signature;
mod spread;
mod table;

use std::sync::Once;

pub use arg_name::{ArgName, VARARG_NAME};
pub use arguments::ArgumentList;
pub use config::{PerfHook, PerfWarning, TableConfig, DEFAULT_EMPTY_CACHE_LEN};
pub use error::{ArgumentsError, SignatureError};
pub use r_intern::{Name, Symbol};
pub use signature::Signature;
pub use spread::{flatten_indexes, ArgSource, SpreadShape};
pub use table::SignatureTable;

/// Canonical signature for `names` in the global table.
pub fn get<S: AsRef<str>>(names: &[Option<S>]) -> Signature {
    SignatureTable::global().get(names)
}

/// Canonical signature for `names` in the global table, empty strings
/// counting as absent.
pub fn get_converting_empty<S: AsRef<str>>(names: &[Option<S>]) -> Signature {
    SignatureTable::global().get_converting_empty(names)
}

/// Canonical all-positional signature of arity `len` in the global table.
pub fn empty(len: usize) -> Signature {
    SignatureTable::global().empty(len)
}

/// Signature for a `names` attribute in the global table.
pub fn from_names_attribute<S: AsRef<str>>(names: Option<&[S]>) -> Option<Signature> {
    SignatureTable::global().from_names_attribute(names)
}

/// Flattened call signature in the global table.
pub fn flatten_names(supplied: &Signature, shape: &SpreadShape) -> Signature {
    SignatureTable::global().flatten_names(supplied, shape)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for runtime debugging.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=r_args=trace` or `RUST_LOG=r_args::perf=warn`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the embedder.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
