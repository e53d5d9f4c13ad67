//! Typed-array tag registry constants.

// Typed array tags per the RFC 8746 registry.
// Always the little-endian variant, for now.
pub const TAG_ARR_U16_LE: u64 = 69;
pub const TAG_ARR_U32_LE: u64 = 70;
pub const TAG_ARR_U64_LE: u64 = 71;
pub const TAG_ARR_I8: u64 = 72;
pub const TAG_ARR_I16_LE: u64 = 77;
pub const TAG_ARR_I32_LE: u64 = 78;
pub const TAG_ARR_I64_LE: u64 = 79;
pub const TAG_ARR_F32_LE: u64 = 85;
pub const TAG_ARR_F64_LE: u64 = 86;

/// Default maximum record nesting depth for the extractor.
pub const DEFAULT_MAX_DEPTH: usize = 128;
