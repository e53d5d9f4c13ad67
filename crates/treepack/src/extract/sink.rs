//! Injectable diagnostics for lenient classification fallbacks.

use crate::msg::TypeDescriptor;

/// Receives notice of suspicious-but-recoverable classification outcomes.
///
/// The classifier never rejects a field over an unrecognized declared type;
/// it treats the field as a nested record and keeps walking. A sink lets
/// the host observe those fallbacks without coupling this crate to any
/// logging framework.
pub trait DiagnosticSink {
    /// A field fell back to nested-record interpretation even though its
    /// runtime value is not record-shaped. `field` is the marker-prefixed
    /// name as exposed by the message.
    fn classification_fallback(&self, field: &str, declared: &TypeDescriptor);
}

/// Discards all diagnostics. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn classification_fallback(&self, _field: &str, _declared: &TypeDescriptor) {}
}
