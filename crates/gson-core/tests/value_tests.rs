use gson_core::{parse, Map, Value, ValueKind};

#[test]
fn kind_of_each_variant() {
    let doc = parse(r#"[null, true, 1, 1.0, "s", [], {}]"#).unwrap();
    let kinds: Vec<ValueKind> = doc.as_array().unwrap().iter().map(Value::kind).collect();
    assert_eq!(kinds, ValueKind::ALL.to_vec());
}

#[test]
fn kind_names_are_lowercase() {
    let names: Vec<&str> = ValueKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(
        names,
        ["null", "boolean", "integer", "float", "string", "array", "object"]
    );
    assert_eq!(ValueKind::Float.to_string(), "float");
}

#[test]
fn scalar_accessors() {
    assert!(Value::Null.is_null());
    assert_eq!(Value::Boolean(true).as_bool(), Some(true));
    assert_eq!(Value::Integer(7).as_i64(), Some(7));
    assert_eq!(Value::Float(7.5).as_i64(), None);
    assert_eq!(Value::Float(7.5).as_f64(), Some(7.5));
    assert_eq!(Value::Integer(7).as_f64(), Some(7.0));
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert_eq!(Value::Null.as_str(), None);
}

#[test]
fn container_accessors() {
    let doc = parse(r#"{"list": [1, 2], "name": "n"}"#).unwrap();
    assert_eq!(doc.get("list").and_then(Value::as_array).map(<[Value]>::len), Some(2));
    assert_eq!(doc.get("name").and_then(Value::as_str), Some("n"));
    assert_eq!(doc.get("missing"), None);
    assert_eq!(Value::Integer(1).get("list"), None);
    assert!(Value::Array(vec![]).as_object().is_none());
}

#[test]
fn from_conversions() {
    assert_eq!(Value::from(false), Value::Boolean(false));
    assert_eq!(Value::from(3i64), Value::Integer(3));
    assert_eq!(Value::from(0.25), Value::Float(0.25));
    assert_eq!(Value::from(String::from("s")), Value::String("s".into()));
    assert_eq!(
        Value::from(vec![Value::Null]),
        Value::Array(vec![Value::Null])
    );

    let mut map = Map::new();
    map.insert("k".into(), Value::from(1i64));
    assert_eq!(parse(r#"{"k": 1}"#).unwrap(), Value::from(map));
}

#[test]
fn integer_and_float_of_same_magnitude_differ() {
    assert_ne!(parse("10").unwrap(), parse("10.0").unwrap());
}

#[test]
fn parsed_trees_are_independent() {
    let first = parse("[1]").unwrap();
    let mut second = first.clone();
    if let Value::Array(items) = &mut second {
        items.push(Value::Null);
    }
    assert_eq!(first, Value::Array(vec![Value::Integer(1)]));
}

#[test]
fn values_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();

    let handles: Vec<_> = (0..4i64)
        .map(|n| std::thread::spawn(move || parse(format!("[{n}, {n}.5]")).unwrap()))
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        let value = handle.join().unwrap();
        assert_eq!(value.as_array().unwrap()[0], Value::Integer(n as i64));
    }
}
