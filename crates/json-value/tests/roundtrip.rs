use json_value::{Options, Value, decode_from_str, encode_to_string};

fn sorted() -> Options {
    Options {
        sorted_keys: true,
        ..Options::default()
    }
}

#[test]
fn serialize_parse_serialize_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let mut v = Value::Null;
    v.set("name", "human-name")?;
    v.set("age", 25)?;
    v.set("tags", Value::Array(vec![Value::from("a"), Value::from("b")]))?;

    let opts = sorted();
    let first = encode_to_string(&v, &opts)?;
    let reparsed = decode_from_str(&first)?;
    let second = encode_to_string(&reparsed, &opts)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn parse_preserves_member_order() -> Result<(), Box<dyn std::error::Error>> {
    let text = r#"{"z":1,"a":2,"m":3}"#;
    let v = decode_from_str(text)?;
    assert_eq!(encode_to_string(&v, &Options::default())?, text);
    Ok(())
}

#[test]
fn idempotent_through_pretty_mode() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        pretty: true,
        sorted_keys: true,
        ..Options::default()
    };
    let v = decode_from_str(r#"{"b":[1,2,{"x":null}],"a":"s"}"#)?;
    let first = encode_to_string(&v, &opts)?;
    let second = encode_to_string(&decode_from_str(&first)?, &opts)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn decode_from_slice_and_reader_agree() -> Result<(), Box<dyn std::error::Error>> {
    let text = r#"[{"age":24}]"#;
    let a = json_value::decode_from_slice(text.as_bytes())?;
    let b = json_value::decode_from_reader(text.as_bytes())?;
    assert_eq!(a, b);
    assert_eq!(encode_to_string(&a, &Options::default())?, text);
    Ok(())
}

#[test]
fn decode_rejects_malformed_input() {
    assert!(decode_from_str("{\"a\":").is_err());
    assert!(decode_from_str("nul").is_err());
}

#[test]
fn interop_with_serde_json_value() -> Result<(), Box<dyn std::error::Error>> {
    let mut v = Value::Null;
    v.set("date", Value::Date("2024-05-01T12:34:56+00:00".to_string()))?;
    v.set("blob", Value::Bytes(vec![1, 2, 3]))?;

    let sj = serde_json::Value::try_from(&v)?;
    assert_eq!(sj["date"], "2024-05-01T12:34:56+00:00");
    assert_eq!(sj["blob"], "AQID");
    Ok(())
}
