use super::*;
use crate::list::VariantList;
use crate::TypeTag;
use crate::VariantError;

fn sample() -> VariantMap {
    VariantMap::of(
        r#"{
            "Name": "svc",
            "server": {"host": "localhost", "port": 8080, "use_tls": true},
            "hosts": ["a", "b"],
            "limits": {"max-conn": 16}
        }"#,
    )
}

#[test]
fn test_case_insensitive_lookup() {
    let mut map = VariantMap::new();
    map.set("Foo", 1);

    assert_eq!(map.get("foo"), map.get("FOO"));
    assert_eq!(map.get("foo").to_int(), 1);
    assert_eq!(map.search("fOo"), Some("Foo"));
    assert!(map.contains("FOO"));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Foo"]);
    assert!(map.get("bar").is_null());
    assert!(map.search("bar").is_none());
}

#[test]
fn test_exact_key_wins_over_fold() {
    let mut map = VariantMap::new();
    map.set("Key", "first").set("KEY", "second");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("KEY").to_string(), "second");
    assert_eq!(map.get("Key").to_string(), "first");
    // no exact match: the first stored spelling answers
    assert_eq!(map.get("key").to_string(), "first");
}

#[test]
fn test_set_existing_key_keeps_position() {
    let mut map = VariantMap::new();
    map.set("a", 1).set("b", 2).set("a", 3);
    assert_eq!(map.to_keys_vec(), vec!["a", "b"]);
    assert_eq!(map["a"].to_int(), 3);
}

#[test]
fn test_remove_repoints_fold_index() {
    let mut map = VariantMap::new();
    map.set("Key", 1).set("KEY", 2).set("other", 3);

    assert_eq!(map.remove("key").map(|v| v.to_int()), Some(1));
    assert_eq!(map.get("key").to_int(), 2);
    assert_eq!(map.to_keys_vec(), vec!["KEY", "other"]);

    assert!(map.remove("KEY").is_some());
    assert!(!map.contains("key"));
    assert!(map.remove("key").is_none());
}

#[test]
fn test_clear_keeps_earlier_snapshots() {
    let mut map = VariantMap::new();
    map.set("a", 1);
    let snapshot = map.clone();

    map.clear().set("b", 2);
    assert_eq!(snapshot.get("a").to_int(), 1);
    assert!(snapshot.get("b").is_null());
    assert!(map.get("a").is_null());

    let taken = map.take();
    assert_eq!(taken.get("B").to_int(), 2);
    assert!(map.is_empty());
    assert!(!map.contains("b"));
}

#[test]
fn test_nested_boxing() {
    let map = sample();
    assert!(matches!(map.get("server"), Variant::Map(_)));
    assert!(matches!(map.get("hosts"), Variant::List(_)));
    assert_eq!(map.get("SERVER").get_key("HOST").to_string(), "localhost");
    assert_eq!(map.get("hosts").get_index(1).to_string(), "b");
    assert_eq!(map.get("hosts").get_type(), TypeTag::Vector);
}

#[test]
fn test_of_sources() {
    let from_list = VariantMap::of(Value::Vector(vec!["x".into(), "y".into()]));
    assert_eq!(from_list.to_keys_vec(), vec!["0", "1"]);
    assert_eq!(from_list.get("1").to_string(), "y");

    let object = Object::new("Point").with_property("x", 1).with_property("y", 2);
    let from_object = VariantMap::of(object);
    assert_eq!(from_object.get("Y").to_int(), 2);

    let pair = VariantMap::of(Value::pair("k", 9));
    assert_eq!(pair.get("1").to_int(), 9);

    assert!(VariantMap::of(3.5).is_empty());
    assert!(VariantMap::of("[oops").is_empty());
}

#[test]
fn test_from_array_keys() {
    let mut array = Array::new();
    array.insert(ArrayKey::Int(5), Value::from("five"));
    array.insert(ArrayKey::from("name"), Value::from("n"));
    let map = VariantMap::from_array(array.clone());

    assert_eq!(map.to_keys_vec(), vec!["5", "name"]);
    assert_eq!(map.to_array(), array);
}

#[test]
fn test_get_data_round_trip() {
    let map = sample();
    let data = map.get_data();
    assert_eq!(VariantMap::of(data.clone()), map);
    assert_eq!(Variant::of(data), Variant::Map(map));
}

#[test]
fn test_get_path() {
    let map = sample();
    assert_eq!(map.get_path("server.host").map(Variant::to_string), Some("localhost".into()));
    assert_eq!(map.get_path("hosts.0").map(Variant::to_string), Some("a".into()));
    assert_eq!(map.get_path("name").map(Variant::to_string), Some("svc".into()));
    assert!(map.get_path("hosts.7").is_none());
    assert!(map.get_path("server.host.deeper").is_none());
    assert!(map.get_path("").is_none());
}

#[test]
fn test_get_path_snake_kebab_fallback() {
    let map = sample();
    assert!(map.has("server.use-tls"));
    assert!(map.has("limits.max_conn"));
    assert!(!map.has("limits.max.conn"));
}

#[test]
fn test_get_as() {
    let map = sample();
    let port: u16 = map.get_as("server.port").unwrap();
    let tls: bool = map.get_as("server.use_tls").unwrap();
    let hosts: Vec<String> = map.get_as("hosts").unwrap();
    assert_eq!(port, 8080);
    assert!(tls);
    assert_eq!(hosts, vec!["a", "b"]);

    let small: Result<u8, _> = map.get_as("server.port");
    assert!(matches!(small, Err(VariantError::TypeError { code: Some(407), .. })));

    let missing: Result<String, _> = map.get_as("server.user");
    assert_eq!(missing.unwrap_err().code(), Some(304));

    let wrong: Result<i64, _> = map.get_as("server.host");
    let err = wrong.unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_get_optional_and_get_or() {
    let map = sample();
    assert_eq!(map.get_optional::<String>("server.user").unwrap(), None);
    assert_eq!(
        map.get_optional::<String>("server.host").unwrap(),
        Some("localhost".to_string())
    );
    assert!(map.get_optional::<i64>("server.host").is_err());
    assert_eq!(map.get_or("server.timeout", 30i64), 30);
    assert_eq!(map.get_or("server.port", 1i64), 8080);
}

#[test]
fn test_get_keys() {
    let map = sample();
    assert_eq!(map.get_keys("").unwrap(), vec!["Name", "server", "hosts", "limits"]);
    assert_eq!(map.get_keys("server").unwrap(), vec!["host", "port", "use_tls"]);
    assert_eq!(map.get_keys("hosts").unwrap_err().code(), Some(306));
    assert_eq!(map.get_keys("nope").unwrap_err().code(), Some(304));
}

#[test]
fn test_grouped_buckets_are_lists() {
    let list = VariantList::of(r#"[{"k": "x"}, {"k": "y"}, {"k": "x"}]"#);
    let groups = list.grouped_variant_map("k");
    assert_eq!(groups.get("X").as_list().map(VariantList::len), Some(2));
}

#[test]
fn test_serialize_keeps_order_and_case() {
    let mut map = VariantMap::new();
    map.set("Zeta", 1).set("alpha", Value::Vector(vec![Value::Bool(true)]));
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"Zeta":1,"alpha":[true]}"#);
}
