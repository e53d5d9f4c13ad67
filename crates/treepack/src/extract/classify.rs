//! Canonical type classification.
//!
//! Each field is reduced to one tag from a closed set before encoding. The
//! runtime value is consulted first; only when it is not self-describing
//! does the declared descriptor decide. Classification never fails: every
//! unrecognized type name resolves to [`CanonicalTag::Nested`] and the field
//! is walked as a record.

use super::constants::*;
use crate::msg::{FieldValue, TypeDescriptor};

/// Canonical classification of a field — the closed set driving the
/// encoding rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalTag {
    Str,
    Bool,
    Int(IntKind),
    Float(FloatKind),
    Time(TimeKind),
    /// `uint8[]` / `char[]`: raw byte string, passed through untagged.
    ByteStream,
    BoolArray,
    /// Fixed-width numeric array, packed into a tagged blob.
    NumericArray(ArrayKind),
    /// Nested record; also the lenient fallback for unrecognized types.
    Nested,
}

/// Integer field kinds. All of them encode to a 64-bit signed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntKind {
    Byte,
    Char,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    /// The generic host integer, treated as `int32`.
    Int,
}

/// Float field kinds. Both encode to a 64-bit float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatKind {
    F32,
    F64,
}

/// Time-like field kinds. Both encode to a seconds/nanoseconds pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKind {
    Time,
    Duration,
}

/// Element kind of a tagged numeric array.
///
/// There is no `U8` kind: unsigned-byte sequences travel as raw byte
/// streams, never as tagged blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    I8,
    I16,
    I32,
    I64,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl ArrayKind {
    /// The registry tag identifying this element encoding.
    pub fn tag_id(self) -> u64 {
        match self {
            ArrayKind::U16 => TAG_ARR_U16_LE,
            ArrayKind::U32 => TAG_ARR_U32_LE,
            ArrayKind::U64 => TAG_ARR_U64_LE,
            ArrayKind::I8 => TAG_ARR_I8,
            ArrayKind::I16 => TAG_ARR_I16_LE,
            ArrayKind::I32 => TAG_ARR_I32_LE,
            ArrayKind::I64 => TAG_ARR_I64_LE,
            ArrayKind::F32 => TAG_ARR_F32_LE,
            ArrayKind::F64 => TAG_ARR_F64_LE,
        }
    }

    /// Packed element width in bytes.
    pub fn elem_width(self) -> usize {
        match self {
            ArrayKind::I8 => 1,
            ArrayKind::I16 | ArrayKind::U16 => 2,
            ArrayKind::I32 | ArrayKind::U32 | ArrayKind::F32 => 4,
            ArrayKind::I64 | ArrayKind::U64 | ArrayKind::F64 => 8,
        }
    }

    /// Lookup by one-character format code.
    ///
    /// `B` has no tagged form (unsigned-byte sequences stay raw) and yields
    /// `None`, as does any code outside the alphabet.
    pub fn from_code(code: char) -> Option<ArrayKind> {
        Some(match code {
            'b' => ArrayKind::I8,
            'h' => ArrayKind::I16,
            'H' => ArrayKind::U16,
            'i' | 'l' => ArrayKind::I32,
            'I' | 'L' => ArrayKind::U32,
            'q' => ArrayKind::I64,
            'Q' => ArrayKind::U64,
            'f' => ArrayKind::F32,
            'd' => ArrayKind::F64,
            _ => return None,
        })
    }

    /// Lookup by declared array type name (`"int16[]"`, `"byte[]"`, ...).
    pub fn from_name(name: &str) -> Option<ArrayKind> {
        Some(match name {
            "uint16[]" => ArrayKind::U16,
            "uint32[]" => ArrayKind::U32,
            "uint64[]" => ArrayKind::U64,
            "byte[]" | "int8[]" => ArrayKind::I8,
            "int16[]" => ArrayKind::I16,
            "int32[]" => ArrayKind::I32,
            "int64[]" => ArrayKind::I64,
            "float32[]" => ArrayKind::F32,
            "float64[]" => ArrayKind::F64,
            _ => return None,
        })
    }
}

/// Classify a field from its runtime value and declared descriptor.
///
/// Resolution order, first match wins:
/// 1. a string value is `Str`;
/// 2. a sized primitive value is that primitive's tag (host doubles are
///    `float64`, single-precision `float32`);
/// 3. a numeric sequence resolves through its format code (`B` and raw byte
///    strings are byte streams), a bool sequence is `BoolArray`;
/// 4. otherwise, a declared variable-length sequence resolves through its
///    element type name;
/// 5. otherwise the declared type's own name decides; unknown names are
///    [`CanonicalTag::Nested`].
pub fn classify(value: &FieldValue, declared: &TypeDescriptor) -> CanonicalTag {
    match value {
        FieldValue::Str(_) => CanonicalTag::Str,
        FieldValue::Bool(_) => CanonicalTag::Bool,
        FieldValue::I8(_) => CanonicalTag::Int(IntKind::I8),
        FieldValue::U8(_) => CanonicalTag::Int(IntKind::U8),
        FieldValue::I16(_) => CanonicalTag::Int(IntKind::I16),
        FieldValue::U16(_) => CanonicalTag::Int(IntKind::U16),
        FieldValue::I32(_) => CanonicalTag::Int(IntKind::I32),
        FieldValue::U32(_) => CanonicalTag::Int(IntKind::U32),
        FieldValue::I64(_) => CanonicalTag::Int(IntKind::I64),
        FieldValue::U64(_) => CanonicalTag::Int(IntKind::U64),
        FieldValue::F32(_) => CanonicalTag::Float(FloatKind::F32),
        FieldValue::F64(_) => CanonicalTag::Float(FloatKind::F64),
        FieldValue::Bytes(_) => CanonicalTag::ByteStream,
        FieldValue::BoolSeq(_) => CanonicalTag::BoolArray,
        FieldValue::NumericSeq(seq) => match ArrayKind::from_code(seq.code()) {
            Some(kind) => CanonicalTag::NumericArray(kind),
            None => CanonicalTag::ByteStream,
        },
        FieldValue::Time(_) | FieldValue::Nested(_) | FieldValue::NestedSeq(_) => {
            classify_declared(declared)
        }
    }
}

/// Steps 4–5: resolve from the declared descriptor alone.
fn classify_declared(declared: &TypeDescriptor) -> CanonicalTag {
    match declared.element() {
        Some(element) => classify_name(element.name()),
        None => classify_name(declared.name()),
    }
}

/// Resolve a lower-case type name through the registry.
///
/// Unknown names are [`CanonicalTag::Nested`]: record type names are
/// exactly the names this registry does not know.
pub fn classify_name(name: &str) -> CanonicalTag {
    match name {
        "string" => CanonicalTag::Str,
        "bool" => CanonicalTag::Bool,
        "byte" => CanonicalTag::Int(IntKind::Byte),
        "char" => CanonicalTag::Int(IntKind::Char),
        "int8" => CanonicalTag::Int(IntKind::I8),
        "uint8" => CanonicalTag::Int(IntKind::U8),
        "int16" => CanonicalTag::Int(IntKind::I16),
        "uint16" => CanonicalTag::Int(IntKind::U16),
        "int32" => CanonicalTag::Int(IntKind::I32),
        "uint32" => CanonicalTag::Int(IntKind::U32),
        "int64" => CanonicalTag::Int(IntKind::I64),
        "uint64" => CanonicalTag::Int(IntKind::U64),
        "int" => CanonicalTag::Int(IntKind::Int),
        "float32" | "float" => CanonicalTag::Float(FloatKind::F32),
        "float64" | "double" => CanonicalTag::Float(FloatKind::F64),
        "time" => CanonicalTag::Time(TimeKind::Time),
        "duration" => CanonicalTag::Time(TimeKind::Duration),
        "bool[]" => CanonicalTag::BoolArray,
        "uint8[]" | "char[]" => CanonicalTag::ByteStream,
        _ => match ArrayKind::from_name(name) {
            Some(kind) => CanonicalTag::NumericArray(kind),
            None => CanonicalTag::Nested,
        },
    }
}
