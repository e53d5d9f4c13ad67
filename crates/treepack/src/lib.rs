//! Tagged value tree extraction for typed message records.
//!
//! A message is an ordered tree of named fields whose declared types are
//! known at conversion time. This crate walks such a message depth-first and
//! produces a tree over a small output alphabet (strings, booleans, 64-bit
//! integers and floats, seconds/nanoseconds pairs, raw byte strings, boolean
//! sequences, nested maps and sequences, and tagged little-endian blobs for
//! homogeneous numeric arrays), ready for a downstream byte-level encoder.
//!
//! Conversion is one-way and purely synchronous; decoding, schema
//! validation, and the wire format itself live elsewhere.
//!
//! # Example
//!
//! ```
//! use treepack::{extract_tree_values, FieldValue, Message, NumericSeq, TreeValue, TypeDescriptor};
//!
//! let msg = Message::new().with_field(
//!     "_ranges",
//!     TypeDescriptor::sequence(TypeDescriptor::named("uint16")),
//!     FieldValue::NumericSeq(NumericSeq::U16(vec![10, 20, 30])),
//! );
//! let tree = extract_tree_values(&msg).unwrap();
//! let (key, value) = &tree[0];
//! assert_eq!(key, "ranges");
//! match value {
//!     TreeValue::Blob(blob) => {
//!         assert_eq!(blob.tag, 69);
//!         assert_eq!(blob.payload, [0x0a, 0x00, 0x14, 0x00, 0x1e, 0x00]);
//!     }
//!     other => panic!("expected blob, got {other:?}"),
//! }
//! ```

mod tagged_blob;
mod tree_value;

pub mod extract;
pub mod json;
pub mod msg;

pub use extract::{
    classify, classify_name, extract_tree_values, ArrayKind, CanonicalTag, DiagnosticSink,
    ExtractError, FloatKind, IntKind, NullSink, TimeKind, TreeExtractor, DEFAULT_MAX_DEPTH,
};
pub use msg::{FieldDescriptor, FieldValue, Message, NumericSeq, TimeValue, TypeDescriptor};
pub use tagged_blob::TaggedBlob;
pub use tree_value::{TimePair, TreeFields, TreeValue};

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn one_field(name: &str, declared: TypeDescriptor, value: FieldValue) -> Message {
        Message::new().with_field(name, declared, value)
    }

    fn extract_single(name: &str, declared: TypeDescriptor, value: FieldValue) -> TreeValue {
        let tree = extract_tree_values(&one_field(name, declared, value)).unwrap();
        assert_eq!(tree.len(), 1);
        tree.into_iter().next().unwrap().1
    }

    // --- classification ---

    #[test]
    fn classify_name_scalars() {
        assert_eq!(classify_name("string"), CanonicalTag::Str);
        assert_eq!(classify_name("bool"), CanonicalTag::Bool);
        assert_eq!(classify_name("byte"), CanonicalTag::Int(IntKind::Byte));
        assert_eq!(classify_name("char"), CanonicalTag::Int(IntKind::Char));
        assert_eq!(classify_name("int8"), CanonicalTag::Int(IntKind::I8));
        assert_eq!(classify_name("uint64"), CanonicalTag::Int(IntKind::U64));
        assert_eq!(classify_name("int"), CanonicalTag::Int(IntKind::Int));
        assert_eq!(classify_name("float32"), CanonicalTag::Float(FloatKind::F32));
        assert_eq!(classify_name("float64"), CanonicalTag::Float(FloatKind::F64));
        // Host-level spellings route to the sized names.
        assert_eq!(classify_name("float"), CanonicalTag::Float(FloatKind::F32));
        assert_eq!(classify_name("double"), CanonicalTag::Float(FloatKind::F64));
        assert_eq!(classify_name("time"), CanonicalTag::Time(TimeKind::Time));
        assert_eq!(
            classify_name("duration"),
            CanonicalTag::Time(TimeKind::Duration)
        );
    }

    #[test]
    fn classify_name_arrays() {
        assert_eq!(classify_name("bool[]"), CanonicalTag::BoolArray);
        assert_eq!(classify_name("uint8[]"), CanonicalTag::ByteStream);
        assert_eq!(classify_name("char[]"), CanonicalTag::ByteStream);
        assert_eq!(
            classify_name("uint16[]"),
            CanonicalTag::NumericArray(ArrayKind::U16)
        );
        assert_eq!(
            classify_name("byte[]"),
            CanonicalTag::NumericArray(ArrayKind::I8)
        );
        assert_eq!(
            classify_name("int8[]"),
            CanonicalTag::NumericArray(ArrayKind::I8)
        );
        assert_eq!(
            classify_name("float64[]"),
            CanonicalTag::NumericArray(ArrayKind::F64)
        );
    }

    #[test]
    fn classify_name_unknown_is_nested() {
        assert_eq!(classify_name("pose"), CanonicalTag::Nested);
        assert_eq!(classify_name("some_record_type"), CanonicalTag::Nested);
        assert_eq!(classify_name(""), CanonicalTag::Nested);
    }

    #[test]
    fn classify_runtime_value_wins_over_declared() {
        // A string value is a string no matter what the schema says.
        let declared = TypeDescriptor::named("int32");
        assert_eq!(
            classify(&FieldValue::Str("x".into()), &declared),
            CanonicalTag::Str
        );
        assert_eq!(
            classify(&FieldValue::F64(0.5), &declared),
            CanonicalTag::Float(FloatKind::F64)
        );
    }

    #[test]
    fn classify_sequence_declaration_uses_element_name() {
        let declared = TypeDescriptor::sequence(TypeDescriptor::named("string"));
        // Record-shaped runtime values defer to the declared element type.
        let nested = FieldValue::Nested(Message::new());
        assert_eq!(classify(&nested, &declared), CanonicalTag::Str);
    }

    #[test]
    fn classify_numeric_seq_by_format_code() {
        let declared = TypeDescriptor::named("whatever");
        assert_eq!(
            classify(&FieldValue::NumericSeq(NumericSeq::I16(vec![1])), &declared),
            CanonicalTag::NumericArray(ArrayKind::I16)
        );
        // Unsigned bytes have no tagged form.
        assert_eq!(
            classify(&FieldValue::NumericSeq(NumericSeq::U8(vec![1])), &declared),
            CanonicalTag::ByteStream
        );
    }

    #[test]
    fn array_kind_code_lookup() {
        assert_eq!(ArrayKind::from_code('b'), Some(ArrayKind::I8));
        assert_eq!(ArrayKind::from_code('H'), Some(ArrayKind::U16));
        // Long and int codes alias to the same 32-bit kinds.
        assert_eq!(ArrayKind::from_code('i'), Some(ArrayKind::I32));
        assert_eq!(ArrayKind::from_code('l'), Some(ArrayKind::I32));
        assert_eq!(ArrayKind::from_code('I'), Some(ArrayKind::U32));
        assert_eq!(ArrayKind::from_code('L'), Some(ArrayKind::U32));
        assert_eq!(ArrayKind::from_code('d'), Some(ArrayKind::F64));
        assert_eq!(ArrayKind::from_code('B'), None);
        assert_eq!(ArrayKind::from_code('x'), None);
    }

    #[test]
    fn array_kind_registry_is_stable() {
        let expect = [
            (ArrayKind::U16, 69, 2),
            (ArrayKind::U32, 70, 4),
            (ArrayKind::U64, 71, 8),
            (ArrayKind::I8, 72, 1),
            (ArrayKind::I16, 77, 2),
            (ArrayKind::I32, 78, 4),
            (ArrayKind::I64, 79, 8),
            (ArrayKind::F32, 85, 4),
            (ArrayKind::F64, 86, 8),
        ];
        for (kind, tag, width) in expect {
            assert_eq!(kind.tag_id(), tag, "{kind:?}");
            assert_eq!(kind.elem_width(), width, "{kind:?}");
        }
    }

    // --- scalar encoding ---

    #[test]
    fn scalar_fields_convert_exactly() {
        assert_eq!(
            extract_single("_s", TypeDescriptor::named("string"), FieldValue::Str("hi".into())),
            TreeValue::Str("hi".into())
        );
        assert_eq!(
            extract_single("_b", TypeDescriptor::named("bool"), FieldValue::Bool(true)),
            TreeValue::Bool(true)
        );
        assert_eq!(
            extract_single("_i", TypeDescriptor::named("int32"), FieldValue::I32(-7)),
            TreeValue::Integer(-7)
        );
        assert_eq!(
            extract_single("_u", TypeDescriptor::named("uint8"), FieldValue::U8(255)),
            TreeValue::Integer(255)
        );
        assert_eq!(
            extract_single("_f", TypeDescriptor::named("float32"), FieldValue::F32(1.5)),
            TreeValue::Float(1.5)
        );
        assert_eq!(
            extract_single("_d", TypeDescriptor::named("float64"), FieldValue::F64(-0.25)),
            TreeValue::Float(-0.25)
        );
    }

    #[test]
    fn u64_narrowing_wraps_without_range_check() {
        let out = extract_single(
            "_n",
            TypeDescriptor::named("uint64"),
            FieldValue::U64(u64::MAX),
        );
        assert_eq!(out, TreeValue::Integer(-1));
    }

    #[test]
    fn time_field_emits_secs_nsecs_pair() {
        let out = extract_single(
            "_stamp",
            TypeDescriptor::named("time"),
            FieldValue::Time(TimeValue {
                sec: 3,
                nanosec: 250,
            }),
        );
        assert_eq!(out, TreeValue::Time(TimePair { secs: 3, nsecs: 250 }));
    }

    #[test]
    fn duration_field_emits_same_pair_shape() {
        let out = extract_single(
            "_elapsed",
            TypeDescriptor::named("duration"),
            FieldValue::Time(TimeValue {
                sec: -1,
                nanosec: 999_999_999,
            }),
        );
        assert_eq!(
            out,
            TreeValue::Time(TimePair {
                secs: -1,
                nsecs: 999_999_999
            })
        );
    }

    // --- byte streams and bool arrays ---

    #[test]
    fn byte_stream_passes_through_untagged() {
        let out = extract_single(
            "_data",
            TypeDescriptor::sequence(TypeDescriptor::named("uint8")),
            FieldValue::Bytes(vec![0xde, 0xad]),
        );
        assert_eq!(out, TreeValue::Bytes(vec![0xde, 0xad]));

        // An unsigned-byte numeric sequence flattens the same way.
        let out = extract_single(
            "_data",
            TypeDescriptor::sequence(TypeDescriptor::named("uint8")),
            FieldValue::NumericSeq(NumericSeq::U8(vec![1, 2, 3])),
        );
        assert_eq!(out, TreeValue::Bytes(vec![1, 2, 3]));
    }

    #[test]
    fn bool_array_converts_element_wise() {
        let out = extract_single(
            "_flags",
            TypeDescriptor::sequence(TypeDescriptor::named("bool")),
            FieldValue::BoolSeq(vec![true, false, true]),
        );
        assert_eq!(out, TreeValue::BoolArray(vec![true, false, true]));
    }

    // --- name normalization ---

    #[test]
    fn field_name_marker_is_stripped() {
        let tree = extract_tree_values(&one_field(
            "_velocity",
            TypeDescriptor::named("float64"),
            FieldValue::F64(0.0),
        ))
        .unwrap();
        assert_eq!(tree[0].0, "velocity");
    }

    #[test]
    fn every_field_appears_once_in_order() {
        let msg = Message::new()
            .with_field("_a", TypeDescriptor::named("int32"), FieldValue::I32(1))
            .with_field("_b", TypeDescriptor::named("int32"), FieldValue::I32(2))
            .with_field("_c", TypeDescriptor::named("int32"), FieldValue::I32(3));
        let tree = extract_tree_values(&msg).unwrap();
        let keys: Vec<&str> = tree.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    // --- errors ---

    #[test]
    fn packing_mismatch_is_fatal() {
        // Declared as a numeric array, but the value cannot supply elements.
        let msg = one_field(
            "_ranges",
            TypeDescriptor::sequence(TypeDescriptor::named("uint16")),
            FieldValue::Nested(Message::new()),
        );
        // The declared element resolves to a scalar int tag here, so shape
        // mismatch surfaces; a literal array declaration gives Packing.
        let err = extract_tree_values(&msg).unwrap_err();
        assert_eq!(
            err,
            ExtractError::ValueShape {
                field: "ranges".into()
            }
        );

        let msg = one_field(
            "_ranges",
            TypeDescriptor::named("uint16[]"),
            FieldValue::Nested(Message::new()),
        );
        let err = extract_tree_values(&msg).unwrap_err();
        assert_eq!(
            err,
            ExtractError::Packing {
                field: "ranges".into()
            }
        );
    }

    #[test]
    fn scalar_declaration_with_record_value_is_shape_error() {
        let msg = one_field(
            "_count",
            TypeDescriptor::named("int32"),
            FieldValue::Nested(Message::new()),
        );
        let err = extract_tree_values(&msg).unwrap_err();
        assert_eq!(
            err,
            ExtractError::ValueShape {
                field: "count".into()
            }
        );
    }

    #[test]
    fn depth_guard_fails_fast() {
        // Build a chain of records four deep, then cap the extractor at two.
        let mut msg = Message::new().with_field(
            "_leaf",
            TypeDescriptor::named("int32"),
            FieldValue::I32(0),
        );
        for _ in 0..3 {
            msg = Message::new().with_field(
                "_inner",
                TypeDescriptor::named("record"),
                FieldValue::Nested(msg),
            );
        }
        let err = TreeExtractor::new()
            .with_max_depth(2)
            .extract(&msg)
            .unwrap_err();
        assert_eq!(err, ExtractError::DepthExceeded { limit: 2 });
        // The default limit is far above this shape.
        assert!(extract_tree_values(&msg).is_ok());
    }

    // --- diagnostics ---

    struct CountingSink {
        hits: Cell<usize>,
    }

    impl DiagnosticSink for CountingSink {
        fn classification_fallback(&self, field: &str, declared: &TypeDescriptor) {
            assert_eq!(field, "_stamp");
            assert_eq!(declared.name(), "timestamp");
            self.hits.set(self.hits.get() + 1);
        }
    }

    #[test]
    fn sink_observes_suspicious_fallback() {
        // Unknown declared type over a non-record value: nested fallback
        // cannot walk it, and the sink hears about it before the failure.
        let msg = one_field(
            "_stamp",
            TypeDescriptor::named("timestamp"),
            FieldValue::Time(TimeValue { sec: 1, nanosec: 2 }),
        );
        let sink = CountingSink { hits: Cell::new(0) };
        let err = TreeExtractor::new().with_sink(&sink).extract(&msg);
        assert!(err.is_err());
        assert_eq!(sink.hits.get(), 1);
    }

    #[test]
    fn normal_nested_walk_does_not_hit_sink() {
        struct FailSink;
        impl DiagnosticSink for FailSink {
            fn classification_fallback(&self, field: &str, _declared: &TypeDescriptor) {
                panic!("unexpected fallback diagnostic for {field}");
            }
        }
        let inner = Message::new().with_field(
            "_x",
            TypeDescriptor::named("float32"),
            FieldValue::F32(1.0),
        );
        let msg = one_field("_pose", TypeDescriptor::named("pose"), FieldValue::Nested(inner));
        let sink = FailSink;
        let tree = TreeExtractor::new().with_sink(&sink).extract(&msg).unwrap();
        assert!(matches!(tree[0].1, TreeValue::Map(_)));
    }

    // --- tree access and JSON rendering ---

    #[test]
    fn tree_value_get_looks_up_map_keys() {
        let map = TreeValue::Map(vec![
            ("x".into(), TreeValue::Integer(1)),
            ("y".into(), TreeValue::Integer(2)),
        ]);
        assert_eq!(map.get("y"), Some(&TreeValue::Integer(2)));
        assert_eq!(map.get("z"), None);
        assert_eq!(TreeValue::Integer(1).get("x"), None);
    }

    #[test]
    fn json_rendering_scalars_and_order() {
        let fields = vec![
            ("b".to_owned(), TreeValue::Bool(true)),
            ("a".to_owned(), TreeValue::Integer(-3)),
            ("t".to_owned(), TreeValue::Time(TimePair { secs: 1, nsecs: 2 })),
        ];
        let rendered = json::fields_to_json(&fields);
        let text = serde_json::to_string(&rendered).unwrap();
        // Field order survives into JSON.
        assert_eq!(text, r#"{"b":true,"a":-3,"t":{"secs":1,"nsecs":2}}"#);
    }

    #[test]
    fn json_rendering_binary_as_data_uri() {
        let rendered = json::tree_to_json(&TreeValue::Bytes(vec![1, 2, 3]));
        let serde_json::Value::String(s) = rendered else {
            panic!("expected string");
        };
        assert!(s.starts_with("data:application/octet-stream;base64,"));

        let blob = TreeValue::Blob(TaggedBlob::new(69, vec![0x0a, 0x00]));
        let rendered = json::tree_to_json(&blob);
        assert_eq!(rendered["tag"], serde_json::json!(69));
        let payload = rendered["payload"].as_str().unwrap();
        assert!(payload.starts_with("data:application/octet-stream;base64,"));
    }
}
