use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use json_value::{Options, Value, encode_to_string};

#[test]
fn bytes_encode_as_quoted_base64() -> Result<(), Box<dyn std::error::Error>> {
    let payload = b"hello bytes";
    let v = Value::Bytes(payload.to_vec());
    let out = encode_to_string(&v, &Options::default())?;
    assert_eq!(out, format!("\"{}\"", STANDARD.encode(payload)));
    Ok(())
}

#[test]
fn base64_round_trip_recovers_payload() -> Result<(), Box<dyn std::error::Error>> {
    let payload: Vec<u8> = (0u8..=255).collect();
    let v = Value::Bytes(payload.clone());
    let out = encode_to_string(&v, &Options::default())?;

    let inner = out.strip_prefix('"').and_then(|s| s.strip_suffix('"'));
    let inner = inner.ok_or("output not quoted")?;
    assert_eq!(STANDARD.decode(inner)?, payload);
    Ok(())
}

#[test]
fn empty_bytes_are_empty_quoted_string() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::Bytes(Vec::new());
    assert_eq!(encode_to_string(&v, &Options::default())?, "\"\"");
    Ok(())
}

#[test]
fn bytes_inside_object() -> Result<(), Box<dyn std::error::Error>> {
    let mut v = Value::Null;
    v.set("blob", Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]))?;
    let out = encode_to_string(&v, &Options::default())?;
    assert_eq!(out, r#"{"blob":"3q2+7w=="}"#);
    Ok(())
}
