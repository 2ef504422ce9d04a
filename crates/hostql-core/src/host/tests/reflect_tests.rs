use crate::host::HostKind;
use crate::host::ObjectValue;
use crate::host::Reflect;
use crate::host::ScalarKind;
use crate::host::Value;
use chrono::TimeZone;
use chrono::Utc;
use std::any::TypeId;
use std::collections::HashMap;

#[test]
fn scalar_kinds() {
    fn kind_of<T: Reflect>() -> ScalarKind {
        match T::host_type().kind() {
            HostKind::Scalar(kind) => *kind,
            other => panic!("expected a scalar, got {}", other.describe()),
        }
    }

    assert_eq!(kind_of::<String>(), ScalarKind::String);
    assert_eq!(kind_of::<&'static str>(), ScalarKind::String);
    assert_eq!(kind_of::<bool>(), ScalarKind::Bool);
    assert_eq!(kind_of::<i8>(), ScalarKind::I8);
    assert_eq!(kind_of::<isize>(), ScalarKind::Isize);
    assert_eq!(kind_of::<u16>(), ScalarKind::U16);
    assert_eq!(kind_of::<usize>(), ScalarKind::Usize);
    assert_eq!(kind_of::<f32>(), ScalarKind::F32);
    assert_eq!(kind_of::<f64>(), ScalarKind::F64);
}

#[test]
fn boxes_are_transparent() {
    assert_eq!(Box::<u8>::host_type().type_id(), TypeId::of::<u8>());
    let boxed = Box::new(7u8);
    assert!(matches!(boxed.to_value(), Value::UInt(7)));
}

#[test]
fn wrappers_describe_their_element() {
    match Vec::<Option<i32>>::host_type().kind() {
        HostKind::List(elem) => match elem().kind() {
            HostKind::Optional(inner) => {
                assert_eq!(inner().type_id(), TypeId::of::<i32>());
            },
            other => panic!("unexpected element kind: {}", other.describe()),
        },
        other => panic!("unexpected kind: {}", other.describe()),
    }
}

#[test]
fn maps_are_unsupported() {
    assert!(matches!(
        HashMap::<String, i32>::host_type().kind(),
        HostKind::Unsupported("map"),
    ));
}

#[test]
fn optional_values() {
    let none: Option<String> = None;
    assert!(none.to_value().is_null());
    assert!(matches!(
        Some("x".to_string()).to_value(),
        Value::String(s) if s == "x",
    ));
    assert_eq!(Option::<i32>::from_value(Value::Null), Some(None));
    assert_eq!(Option::<i32>::from_value(Value::Int(4)), Some(Some(4)));
}

#[test]
fn integer_conversions_are_range_checked() {
    assert_eq!(u8::from_value(Value::Int(255)), Some(255));
    assert_eq!(u8::from_value(Value::Int(256)), None);
    assert_eq!(u8::from_value(Value::Int(-1)), None);
    assert_eq!(i8::from_value(Value::UInt(127)), Some(127));
    assert_eq!(i8::from_value(Value::Float(1.0)), None);
}

#[test]
fn lists_convert_element_wise() {
    let items = vec![1i32, 2, 3];
    match items.to_value() {
        Value::List(values) => assert_eq!(values.len(), 3),
        other => panic!("expected a list, got {}", other.kind_name()),
    }
    let back = Vec::<i32>::from_value(Value::List(vec![Value::Int(1), Value::Int(2)]));
    assert_eq!(back, Some(vec![1, 2]));
    let bad = Vec::<i32>::from_value(Value::List(vec![Value::Int(1), Value::Bool(true)]));
    assert_eq!(bad, None);
}

#[test]
fn static_strs_only_accept_static_input() {
    assert_eq!(
        <&'static str>::from_value(Value::String("lit".into())),
        Some("lit"),
    );
    assert_eq!(
        <&'static str>::from_value(Value::String(String::from("owned").into())),
        None,
    );
}

#[test]
fn time_values() {
    let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert!(matches!(t.to_value(), Value::Time(v) if v == t));
    assert!(matches!(
        chrono::DateTime::<Utc>::host_type().kind(),
        HostKind::Time,
    ));
}

#[derive(Debug, PartialEq)]
struct Opaque(u32);

impl Reflect for Opaque {
    fn host_type() -> crate::HostType {
        crate::HostType::object::<Opaque>("Opaque").finish()
    }
}

#[test]
fn structs_default_to_opaque_objects() {
    let value = Opaque(3);
    match value.to_value() {
        Value::Object(ObjectValue::Borrowed(any)) => {
            assert_eq!(any.downcast_ref::<Opaque>(), Some(&Opaque(3)));
        },
        other => panic!("expected a borrowed object, got {other:?}"),
    }
    assert_eq!(Opaque::from_value(Opaque(9).into_value()), Some(Opaque(9)));
    assert_eq!(Opaque::from_value(Value::Int(9)), None);
}
