//! The recursive tree extractor.

use treepack_buffers::Writer;

use super::classify::{classify, ArrayKind, CanonicalTag};
use super::constants::DEFAULT_MAX_DEPTH;
use super::error::ExtractError;
use super::sink::DiagnosticSink;
use crate::msg::{FieldDescriptor, FieldValue, Message, NumericSeq};
use crate::{TaggedBlob, TimePair, TreeFields, TreeValue};

/// Converts messages into tagged value trees.
///
/// Holds only configuration; no state survives a call, so one extractor
/// can serve any number of independent conversions, concurrently from
/// independent threads.
///
/// # Example
///
/// ```
/// use treepack::{FieldValue, Message, TreeExtractor, TreeValue, TypeDescriptor};
///
/// let msg = Message::new().with_field(
///     "_count",
///     TypeDescriptor::named("int32"),
///     FieldValue::I32(-7),
/// );
/// let tree = TreeExtractor::new().extract(&msg).unwrap();
/// assert_eq!(tree[0], ("count".to_owned(), TreeValue::Integer(-7)));
/// ```
pub struct TreeExtractor<'a> {
    max_depth: usize,
    sink: Option<&'a dyn DiagnosticSink>,
}

impl Default for TreeExtractor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TreeExtractor<'a> {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            sink: None,
        }
    }

    /// Fail fast once record nesting exceeds `max_depth`. Records are
    /// assumed acyclic; the guard bounds the damage when they are not.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Route classification-fallback diagnostics to `sink`.
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Convert `msg` into an ordered name → value mapping.
    ///
    /// Every field appears exactly once, keyed by its marker-stripped name,
    /// in declaration order. Either the whole tree is produced or the first
    /// failure propagates.
    pub fn extract(&self, msg: &Message) -> Result<TreeFields, ExtractError> {
        self.extract_at(msg, 0)
    }

    fn extract_at(&self, msg: &Message, depth: usize) -> Result<TreeFields, ExtractError> {
        if depth >= self.max_depth {
            return Err(ExtractError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        let mut out = Vec::with_capacity(msg.len());
        for (descriptor, value) in msg.fields() {
            let tag = classify(value, &descriptor.declared);
            let key = strip_marker(&descriptor.name);
            let encoded = self.encode_field(descriptor, &key, tag, value, depth)?;
            out.push((key, encoded));
        }
        Ok(out)
    }

    fn encode_field(
        &self,
        descriptor: &FieldDescriptor,
        key: &str,
        tag: CanonicalTag,
        value: &FieldValue,
        depth: usize,
    ) -> Result<TreeValue, ExtractError> {
        match tag {
            CanonicalTag::Str => match value {
                FieldValue::Str(s) => Ok(TreeValue::Str(s.clone())),
                _ => Err(self.shape_error(key)),
            },
            CanonicalTag::Bool => match value {
                FieldValue::Bool(b) => Ok(TreeValue::Bool(*b)),
                _ => Err(self.shape_error(key)),
            },
            // Range truncation and overflow are the caller's concern: every
            // integer kind narrows or widens with a plain cast.
            CanonicalTag::Int(_) => match value {
                FieldValue::I8(v) => Ok(TreeValue::Integer(i64::from(*v))),
                FieldValue::U8(v) => Ok(TreeValue::Integer(i64::from(*v))),
                FieldValue::I16(v) => Ok(TreeValue::Integer(i64::from(*v))),
                FieldValue::U16(v) => Ok(TreeValue::Integer(i64::from(*v))),
                FieldValue::I32(v) => Ok(TreeValue::Integer(i64::from(*v))),
                FieldValue::U32(v) => Ok(TreeValue::Integer(i64::from(*v))),
                FieldValue::I64(v) => Ok(TreeValue::Integer(*v)),
                FieldValue::U64(v) => Ok(TreeValue::Integer(*v as i64)),
                _ => Err(self.shape_error(key)),
            },
            CanonicalTag::Float(_) => match value {
                FieldValue::F32(v) => Ok(TreeValue::Float(f64::from(*v))),
                FieldValue::F64(v) => Ok(TreeValue::Float(*v)),
                _ => Err(self.shape_error(key)),
            },
            CanonicalTag::Time(_) => match value {
                FieldValue::Time(t) => Ok(TreeValue::Time(TimePair {
                    secs: t.sec,
                    nsecs: t.nanosec,
                })),
                _ => Err(self.shape_error(key)),
            },
            CanonicalTag::ByteStream => match value {
                FieldValue::Bytes(b) => Ok(TreeValue::Bytes(b.clone())),
                FieldValue::NumericSeq(NumericSeq::U8(v)) => Ok(TreeValue::Bytes(v.clone())),
                _ => Err(self.shape_error(key)),
            },
            CanonicalTag::BoolArray => match value {
                FieldValue::BoolSeq(v) => Ok(TreeValue::BoolArray(v.clone())),
                _ => Err(self.shape_error(key)),
            },
            CanonicalTag::NumericArray(kind) => match value {
                FieldValue::NumericSeq(seq) => pack_numeric(key, kind, seq),
                _ => Err(ExtractError::Packing {
                    field: key.to_owned(),
                }),
            },
            CanonicalTag::Nested => match value {
                FieldValue::Nested(nested) => {
                    Ok(TreeValue::Map(self.extract_at(nested, depth + 1)?))
                }
                FieldValue::NestedSeq(records) => {
                    let mut items = Vec::with_capacity(records.len());
                    for record in records {
                        items.push(TreeValue::Map(self.extract_at(record, depth + 1)?));
                    }
                    Ok(TreeValue::Array(items))
                }
                _ => {
                    // Lenient fallback hit a value that cannot be walked as
                    // a record. Surface the diagnostic, then fail the
                    // conversion.
                    if let Some(sink) = self.sink {
                        sink.classification_fallback(&descriptor.name, &descriptor.declared);
                    }
                    Err(self.shape_error(key))
                }
            },
        }
    }

    fn shape_error(&self, key: &str) -> ExtractError {
        ExtractError::ValueShape {
            field: key.to_owned(),
        }
    }
}

/// Convert with default settings (no sink, default depth limit).
pub fn extract_tree_values(msg: &Message) -> Result<TreeFields, ExtractError> {
    TreeExtractor::new().extract(msg)
}

/// Drops the one-character slot marker every exposed field name carries.
fn strip_marker(name: &str) -> String {
    let mut chars = name.chars();
    chars.next();
    chars.as_str().to_owned()
}

/// Packs `seq` little-endian at `kind`'s element width and wraps the bytes
/// with the registry tag.
fn pack_numeric(key: &str, kind: ArrayKind, seq: &NumericSeq) -> Result<TreeValue, ExtractError> {
    let count = seq.len();
    let mut w = Writer::with_capacity(count * kind.elem_width());
    match (kind, seq) {
        (ArrayKind::I8, NumericSeq::I8(v)) => {
            for x in v {
                w.i8(*x);
            }
        }
        (ArrayKind::I16, NumericSeq::I16(v)) => {
            for x in v {
                w.i16(*x);
            }
        }
        (ArrayKind::U16, NumericSeq::U16(v)) => {
            for x in v {
                w.u16(*x);
            }
        }
        (ArrayKind::I32, NumericSeq::I32(v)) => {
            for x in v {
                w.i32(*x);
            }
        }
        (ArrayKind::U32, NumericSeq::U32(v)) => {
            for x in v {
                w.u32(*x);
            }
        }
        (ArrayKind::I64, NumericSeq::I64(v)) => {
            for x in v {
                w.i64(*x);
            }
        }
        (ArrayKind::U64, NumericSeq::U64(v)) => {
            for x in v {
                w.u64(*x);
            }
        }
        (ArrayKind::F32, NumericSeq::F32(v)) => {
            for x in v {
                w.f32(*x);
            }
        }
        (ArrayKind::F64, NumericSeq::F64(v)) => {
            for x in v {
                w.f64(*x);
            }
        }
        _ => {
            return Err(ExtractError::Packing {
                field: key.to_owned(),
            })
        }
    }
    let payload = w.flush();
    // Invariant: payload length is element count times element width.
    if payload.len() != count * kind.elem_width() {
        return Err(ExtractError::Packing {
            field: key.to_owned(),
        });
    }
    Ok(TreeValue::Blob(TaggedBlob::new(kind.tag_id(), payload)))
}
