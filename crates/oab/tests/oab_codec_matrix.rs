//! End-to-end codec scenarios over realistic documents.

use std::sync::Arc;

use oab::{Lookup, OabDecoder, OabEncoder, OabError, OabOptions, Value};
use serde_json::json;

/// Collects every object key in a JSON document, the way a deployment would
/// build its shared lookup table.
fn collect_keys(value: &serde_json::Value, keys: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                if !keys.iter().any(|k| k == key) {
                    keys.push(key.clone());
                }
                collect_keys(val, keys);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr {
                collect_keys(item, keys);
            }
        }
        _ => {}
    }
}

fn sample_document() -> serde_json::Value {
    json!({
        "user": {
            "id": 1,
            "name": "John Doe",
            "email": "john.doe@example.com",
            "isActive": true,
            "age": 30,
            "socialCreditScore": null,
            "roles": ["admin", "user"],
            "profile": {
                "bio": "Software developer with a passion for open-source.",
                "website": "https://johndoe.dev",
            },
        },
        "posts": [
            {
                "id": 101,
                "title": "Introduction to JSON",
                "tags": ["json", "data", "format"],
            },
            {
                "id": 102,
                "title": "Understanding Endianness",
                "tags": ["endianness", "programming", "binary"],
            },
        ],
        "meta": {"totalPosts": 2, "totalComments": 2},
    })
}

#[test]
fn sample_document_roundtrip_with_full_lookup() {
    let doc = sample_document();
    let mut keys = Vec::new();
    collect_keys(&doc, &mut keys);
    let lookup: Arc<Lookup> = Arc::new(keys.into_iter().collect());
    let opts = OabOptions::new().with_lookup(lookup);

    let bytes = OabEncoder::with_options(opts.clone())
        .encode_json(&doc)
        .expect("encode");
    let back = OabDecoder::with_options(&bytes, opts)
        .read_json()
        .expect("decode");
    assert_eq!(back, doc);

    // The binary form with a full key table beats the JSON text form.
    let json_len = serde_json::to_string(&doc).unwrap().len();
    assert!(
        bytes.len() < json_len,
        "binary {} >= json {json_len}",
        bytes.len()
    );
}

#[test]
fn sample_document_roundtrip_without_lookup() {
    let doc = sample_document();
    let bytes = OabEncoder::new().encode_json(&doc).expect("encode");
    let back = OabDecoder::new(&bytes).read_json().expect("decode");
    assert_eq!(back, doc);
}

#[test]
fn end_to_end_hello_123() {
    let mut encoder = OabEncoder::new();
    encoder
        .write(&Value::Str("Hello!".into()))
        .unwrap()
        .write(&Value::Integer(123))
        .unwrap()
        .write(&Value::Integer(-123))
        .unwrap();
    let bytes = encoder.serialize();

    // Tag 7 + scalar count + 6 ASCII bytes, then tag 4 / tag 5 with their
    // varint magnitudes.
    assert_eq!(bytes[0], 7);
    assert_eq!(bytes[1], 6);
    assert_eq!(&bytes[2..8], b"Hello!");
    assert_eq!(&bytes[8..10], [4, 123]);
    assert_eq!(&bytes[10..12], [5, 123]);

    let mut decoder = OabDecoder::new(&bytes);
    assert_eq!(decoder.read(), Ok(Value::Str("Hello!".into())));
    assert_eq!(decoder.read(), Ok(Value::Integer(123)));
    assert_eq!(decoder.read(), Ok(Value::Integer(-123)));
    assert_eq!(decoder.rest(), [] as [u8; 0]);
}

#[test]
fn flush_then_serialize_is_empty() {
    let mut encoder = OabEncoder::new();
    encoder.write(&Value::Integer(42)).unwrap();
    let drained = encoder.flush();
    assert!(!drained.is_empty());
    assert_eq!(encoder.serialize(), [] as [u8; 0]);

    // Flushing resets the session; the encoder is reusable afterwards.
    encoder.write(&Value::Bool(true)).unwrap();
    assert_eq!(encoder.flush(), [3]);
}

#[test]
fn truncation_mid_varint_is_safe() {
    let mut encoder = OabEncoder::new();
    encoder.write(&Value::Integer(1_000_000)).unwrap();
    let bytes = encoder.flush();

    // Cut inside the varint payload.
    let truncated = &bytes[..bytes.len() - 1];
    assert_eq!(
        OabDecoder::new(truncated).read(),
        Err(OabError::BufferUnderrun)
    );

    let mut permissive = OabDecoder::with_options(
        truncated,
        OabOptions::new().with_fail_on_buffer_underrun(false),
    );
    // Must terminate with a substituted value, not hang.
    assert!(matches!(permissive.read(), Ok(Value::Integer(_))));
}

#[test]
fn truncation_at_every_prefix_is_safe() {
    let doc = sample_document();
    let bytes = OabEncoder::new().encode_json(&doc).unwrap();
    for cut in 0..bytes.len() {
        // Must simply return, never loop or panic.
        let _ = OabDecoder::new(&bytes[..cut]).read();
    }
}

#[test]
fn decoder_reads_concatenated_messages() {
    let lookup: Arc<Lookup> = Arc::new(["k"].into_iter().collect());
    let opts = OabOptions::new().with_lookup(lookup);
    let mut encoder = OabEncoder::with_options(opts.clone());
    let first = Value::Object(vec![("k".into(), Value::Integer(1))]);
    let second = Value::Array(vec![Value::Null, Value::Str("tail".into())]);
    encoder.write(&first).unwrap().write(&second).unwrap();
    let bytes = encoder.flush();

    let mut decoder = OabDecoder::with_options(&bytes, opts);
    assert_eq!(decoder.read(), Ok(first));
    assert_eq!(decoder.read(), Ok(second));
    assert_eq!(decoder.read(), Err(OabError::BufferUnderrun));
}

#[test]
fn encode_failure_leaves_partial_buffer() {
    // The codec documents no-rollback: callers snapshot and restore.
    let mut encoder = OabEncoder::new();
    let bad = Value::Array(vec![Value::Integer(1), Value::Float(f64::NAN)]);
    assert!(encoder.write(&bad).is_err());
    assert!(!encoder.serialize().is_empty());

    // Stage-and-commit pattern: a scratch encoder keeps the main one clean.
    let mut main = OabEncoder::new();
    let mut scratch = OabEncoder::new();
    if scratch.write(&bad).is_err() {
        scratch.flush();
    } else {
        main.writer.buf(&scratch.flush());
    }
    assert_eq!(main.serialize(), [] as [u8; 0]);
}
