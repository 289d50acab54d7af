use super::*;

#[test]
fn test_array_key_from_key_str() {
    assert_eq!(ArrayKey::from_key_str("12"), ArrayKey::Int(12));
    assert_eq!(ArrayKey::from_key_str("-3"), ArrayKey::Int(-3));
    assert_eq!(ArrayKey::from_key_str("012"), ArrayKey::from("012"));
    assert_eq!(ArrayKey::from_key_str("1.5"), ArrayKey::from("1.5"));
    assert_eq!(ArrayKey::from_key_str(""), ArrayKey::from(""));
}

#[test]
fn test_array_key_from_value() {
    assert_eq!(ArrayKey::from_value(&Value::Bool(true)), Some(ArrayKey::Int(1)));
    assert_eq!(ArrayKey::from_value(&Value::Double(2.9)), Some(ArrayKey::Int(2)));
    assert_eq!(ArrayKey::from_value(&Value::from("7")), Some(ArrayKey::Int(7)));
    assert_eq!(ArrayKey::from_value(&Value::Null), Some(ArrayKey::from("")));
    assert_eq!(ArrayKey::from_value(&Value::Vector(vec![])), None);
    assert_eq!(ArrayKey::Int(4).to_string(), "4");
}

#[test]
fn test_loose_emptiness() {
    for empty in [
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Double(0.0),
        Value::from(""),
        Value::from("0"),
        Value::Vector(vec![]),
        Value::Map(Map::new()),
        Value::Unknown,
    ] {
        assert!(empty.is_empty(), "{:?} should be empty", empty);
    }
    for full in [
        Value::Bool(true),
        Value::Float(0.5),
        Value::from("0.0"),
        Value::pair(Value::Null, Value::Null),
        Value::Object(Object::new("Empty")),
        Value::Resource(Resource::new(0, "socket")),
    ] {
        assert!(!full.is_empty(), "{:?} should not be empty", full);
    }
}

#[test]
fn test_keyed_get() {
    let object = Value::Object(Object::std(Map::new()).with_property("p", 1));
    assert_eq!(object.get("p"), Some(&Value::Int(1)));

    let mut array = Array::new();
    array.insert(ArrayKey::Int(3), Value::from("three"));
    let array = Value::Array(array);
    assert_eq!(array.get("3"), Some(&Value::from("three")));
    assert_eq!(array.get("03"), None);

    assert_eq!(Value::Int(1).get("x"), None);
}

#[test]
fn test_callable_identity() {
    let double = Callable::new(|args| match args.first() {
        Some(Value::Int(i)) => Value::Int(i * 2),
        _ => Value::Null,
    });
    assert_eq!(double.call(&[Value::Int(21)]), Value::Int(42));
    assert_eq!(double, double.clone());
    assert_ne!(double, Callable::new(|_| Value::Null));
}

#[test]
fn test_from_conversions() {
    assert_eq!(Value::from(7u8), Value::Int(7));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
    assert_eq!(Value::from(vec![Value::Int(1)]), Value::Vector(vec![Value::Int(1)]));
    assert_eq!(Value::pair(1, "b").kind(), TypeTag::Pair);
}

#[test]
fn test_serialize_shapes() {
    let mut set = Set::new();
    set.insert(ArrayKey::from("a"));
    set.insert(ArrayKey::Int(2));

    let mut map = Map::new();
    map.insert("set".to_string(), Value::Set(set));
    map.insert("bin".to_string(), Value::Binary(b"hi".to_vec()));
    map.insert("inf".to_string(), Value::Double(f64::INFINITY));
    map.insert("res".to_string(), Value::Resource(Resource::new(1, "file")));

    assert_eq!(
        serde_json::to_string(&Value::Map(map)).unwrap(),
        r#"{"set":["a",2],"bin":"hi","inf":null,"res":null}"#
    );
}

#[test]
fn test_deserialize_numbers() {
    let value: Value = serde_json::from_str("[1, -2, 18446744073709551615, 0.25]").unwrap();
    assert_eq!(
        value,
        Value::Vector(vec![
            Value::Int(1),
            Value::Int(-2),
            Value::Double(18446744073709551615.0),
            Value::Double(0.25),
        ])
    );
}
