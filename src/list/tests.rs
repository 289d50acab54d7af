use super::*;
use crate::value::{Map, Object};
use crate::TypeTag;

fn row(k: &str, v: i64) -> Value {
    let mut map = Map::new();
    map.insert("k".to_string(), Value::from(k));
    map.insert("v".to_string(), Value::Int(v));
    Value::Map(map)
}

fn letters() -> VariantList {
    VariantList::from_vec(vec!["a".into(), "b".into(), "c".into()])
}

#[test]
fn test_out_of_range_reads_null() {
    let list = letters();
    assert_eq!(list.get(0).to_string(), "a");
    assert!(list.get(3).is_null());
    assert!(list[42].is_null());
    assert!(list.contains(2));
    assert!(!list.contains(3));
}

#[test]
fn test_remove_compacts() {
    let mut list = letters();
    let removed = list.remove(1).unwrap();
    assert_eq!(removed.to_string(), "b");
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).to_string(), "a");
    assert_eq!(list.get(1).to_string(), "c");
    assert!(list.remove(5).is_none());
}

#[test]
fn test_add_boxes_by_shape() {
    let mut list = VariantList::new();
    list.add(row("x", 1))
        .add(Value::Vector(vec![Value::Int(1), Value::Int(2)]))
        .add(Variant::raw(Value::Vector(vec![])))
        .add(3.5);

    assert!(matches!(list.get(0), Variant::Map(_)));
    assert!(matches!(list.get(1), Variant::List(_)));
    // already-boxed values are stored unchanged
    assert!(matches!(list.get(2), Variant::Value(Value::Vector(_))));
    assert_eq!(list.get(3).get_type(), TypeTag::Double);
}

#[test]
fn test_set_replaces_or_appends() {
    let mut list = letters();
    list.set(1, "B");
    list.set(10, "d");
    assert_eq!(list.implode("", false), "aBcd");
    assert_eq!(list.len(), 4);
}

#[test]
fn test_of_sources() {
    let from_json = VariantList::of(r#"[1, "two", {"three": 3}]"#);
    assert_eq!(from_json.len(), 3);
    assert_eq!(from_json.get(2).get_key("THREE").to_int(), 3);

    let from_map = VariantList::of(row("x", 7));
    assert_eq!(from_map.to_values_vec(), vec![Value::from("x"), Value::Int(7)]);

    let from_object = VariantList::of(Object::std(Map::new()).with_property("p", 1));
    assert_eq!(from_object.len(), 1);

    assert!(VariantList::of(12).is_empty());
    assert!(VariantList::of("not json").is_empty());
}

#[test]
fn test_clear_keeps_earlier_snapshots() {
    let mut list = letters();
    let snapshot = list.clone();
    list.clear().add("z");
    assert_eq!(snapshot.len(), 3);
    assert_eq!(list.len(), 1);

    let taken = list.take();
    assert_eq!(taken.get(0).to_string(), "z");
    assert!(list.is_empty());
}

#[test]
fn test_pop() {
    let mut list = VariantList::from_vec(vec![Value::Int(1), row("x", 2)]);
    assert_eq!(list.pop_real(), row("x", 2));
    assert_eq!(list.pop().to_int(), 1);
    assert!(list.pop().is_null());
    assert_eq!(list.pop_real(), Value::Null);
}

#[test]
fn test_resize_reverse_splice() {
    let mut list = letters();
    list.resize(5, "-");
    assert_eq!(list.implode(",", false), "a,b,c,-,-");
    list.resize(3, Value::Null);
    list.reverse();
    assert_eq!(list.implode(",", false), "c,b,a");

    let cut = list.splice(1, Some(1));
    assert_eq!(cut.implode(",", false), "b");
    assert_eq!(list.implode(",", false), "c,a");

    let rest = list.splice(1, None);
    assert_eq!(rest.len(), 1);
    assert!(list.splice(9, Some(3)).is_empty());
}

#[test]
fn test_search() {
    let list = VariantList::from_vec(vec![Value::Int(10), "b".into(), Value::Int(10)]);
    assert_eq!(list.search("10"), Some(0));
    assert_eq!(list.search("b"), Some(1));
    assert_eq!(list.search("nope"), None);
}

#[test]
fn test_implode_for_sql() {
    let list = VariantList::from_vec(vec!["it's".into(), Value::Null, Value::Int(4)]);
    assert_eq!(list.implode(",", false), "it's,,4");
    assert_eq!(list.implode(",", true), r"'it\'s',NULL,'4'");
    assert_eq!(list.implode_with("|", |v| v.get_type().to_string()), "string|null|integer");
}

#[test]
fn test_grouped_variant_map() {
    let list = VariantList::from_vec(vec![row("x", 1), row("y", 2), row("x", 3), Value::Int(4)]);
    let groups = list.grouped_variant_map("k");

    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(
        groups.get("x").get_data(),
        Value::Vector(vec![row("x", 1), row("x", 3)])
    );
    assert_eq!(groups.get("y").get_data(), Value::Vector(vec![row("y", 2)]));
}

#[test]
fn test_grouped_variant_map_skips_empty_keys() {
    let list = VariantList::from_vec(vec![row("", 1), row("x", 2)]);
    let groups = list.grouped_variant_map("k");
    assert_eq!(groups.len(), 1);
    assert!(groups.get("").is_null());
}

#[test]
fn test_conversions_out() {
    let list = VariantList::from_vec(vec![row("x", 1), Value::Int(2)]);
    let array = list.to_array();
    assert_eq!(array[&ArrayKey::Int(1)], Value::Int(2));
    assert_eq!(list.to_keys_vec(), vec![0, 1]);
    assert_eq!(list.get_data(), Value::Vector(vec![row("x", 1), Value::Int(2)]));
    assert!(matches!(list.to_variant_vec()[0], Variant::Map(_)));
}

#[test]
fn test_collect_extend_serialize() {
    let mut list: VariantList = (1..=2).map(Value::Int).collect();
    list.extend(vec!["three"]);
    assert_eq!(list.len(), 3);
    assert_eq!(serde_json::to_string(&list).unwrap(), r#"[1,2,"three"]"#);
}
