//! [`TaggedBlob`] — packed numeric array wrapper.

/// A packed homogeneous numeric array together with the registry tag that
/// identifies its element encoding.
///
/// When the downstream encoder encounters a [`TaggedBlob`] it emits the tag
/// through its format's tagged-item mechanism and the payload as a raw byte
/// string. The payload length is always `element_count * element_width` and
/// the bytes are little-endian regardless of host byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedBlob {
    pub tag: u64,
    pub payload: Vec<u8>,
}

impl TaggedBlob {
    pub fn new(tag: u64, payload: Vec<u8>) -> Self {
        Self { tag, payload }
    }
}
