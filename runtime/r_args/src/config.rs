//! Signature table configuration.

use std::fmt;

/// Arities below this bound get a precomputed all-positional signature.
pub const DEFAULT_EMPTY_CACHE_LEN: usize = 32;

/// Performance diagnostics raised by the signature table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerfWarning {
    /// An all-positional signature was requested for an arity outside the
    /// precomputed range and had to go through the interning table.
    LargeEmptySignature { len: usize, cache_len: usize },
}

impl fmt::Display for PerfWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfWarning::LargeEmptySignature { len, cache_len } => write!(
                f,
                "unnamed signature of length {len} is outside the cached range 0..{cache_len}"
            ),
        }
    }
}

/// Sink for [`PerfWarning`]s.
pub type PerfHook = Box<dyn Fn(&PerfWarning) + Send + Sync>;

/// Construction options for a [`SignatureTable`](crate::SignatureTable).
///
/// ```text
/// let table = SignatureTable::with_config(
///     TableConfig::new()
///         .with_empty_cache_len(64)
///         .with_perf_hook(|warning| eprintln!("{warning}")),
/// );
/// ```
pub struct TableConfig {
    pub(crate) empty_cache_len: usize,
    pub(crate) perf_hook: Option<PerfHook>,
}

impl TableConfig {
    pub fn new() -> Self {
        TableConfig {
            empty_cache_len: DEFAULT_EMPTY_CACHE_LEN,
            perf_hook: None,
        }
    }

    /// Number of arities (`0..len`) served from the dense empty-signature
    /// array.
    #[must_use]
    pub fn with_empty_cache_len(mut self, len: usize) -> Self {
        self.empty_cache_len = len;
        self
    }

    /// Route performance warnings to `hook` instead of the log.
    #[must_use]
    pub fn with_perf_hook(mut self, hook: impl Fn(&PerfWarning) + Send + Sync + 'static) -> Self {
        self.perf_hook = Some(Box::new(hook));
        self
    }

    pub fn empty_cache_len(&self) -> usize {
        self.empty_cache_len
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("empty_cache_len", &self.empty_cache_len)
            .field("perf_hook", &self.perf_hook.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

/// Default sink: a warning on the `r_args::perf` target.
pub(crate) fn log_perf_warning(warning: &PerfWarning) {
    tracing::warn!(target: "r_args::perf", %warning, "slow signature path");
}
