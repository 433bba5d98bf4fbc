//! Tracing and logging (shared setup).

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Shape of emitted log lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Compact, human-readable lines.
    Pretty,
}

/// Initialize process-wide observability with JSON logs.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}

/// Like [`init`], with an explicit log line format.
pub fn init_with_format(format: LogFormat) {
    tracing::init(format);
}
