//! Tree extraction: classify fields, pack arrays, recurse into records.

mod classify;
mod constants;
mod error;
mod extractor;
mod sink;

pub use classify::{classify, classify_name, ArrayKind, CanonicalTag, FloatKind, IntKind, TimeKind};
pub use constants::{
    DEFAULT_MAX_DEPTH, TAG_ARR_F32_LE, TAG_ARR_F64_LE, TAG_ARR_I16_LE, TAG_ARR_I32_LE,
    TAG_ARR_I64_LE, TAG_ARR_I8, TAG_ARR_U16_LE, TAG_ARR_U32_LE, TAG_ARR_U64_LE,
};
pub use error::ExtractError;
pub use extractor::{extract_tree_values, TreeExtractor};
pub use sink::{DiagnosticSink, NullSink};
