//! [`TreeValue`] — the output value alphabet.

use crate::TaggedBlob;

/// Ordered name → value pairs produced for one record.
///
/// Declaration order of the source fields is preserved; every field appears
/// exactly once, keyed by its normalized (marker-stripped) name.
pub type TreeFields = Vec<(String, TreeValue)>;

/// A single value in an extracted tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeValue {
    Str(String),
    Bool(bool),
    /// All integer field kinds collapse to a 64-bit signed integer.
    Integer(i64),
    /// All float field kinds collapse to a 64-bit float.
    Float(f64),
    /// Time and duration fields.
    Time(TimePair),
    /// Raw byte string; byte-stream fields pass through unpacked and untagged.
    Bytes(Vec<u8>),
    BoolArray(Vec<bool>),
    /// Packed numeric array with its registry tag.
    Blob(TaggedBlob),
    /// Sequence of nested records.
    Array(Vec<TreeValue>),
    /// Nested record.
    Map(TreeFields),
}

impl TreeValue {
    /// Looks up `key` when this value is a [`TreeValue::Map`].
    pub fn get(&self, key: &str) -> Option<&TreeValue> {
        match self {
            TreeValue::Map(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Seconds/nanoseconds pair emitted for time and duration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePair {
    pub secs: i64,
    pub nsecs: i64,
}
