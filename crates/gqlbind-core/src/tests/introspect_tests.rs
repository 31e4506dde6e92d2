use crate::introspect;
use crate::tests::fixtures::ComplexSample;
use crate::types::FieldEnumerable;
use crate::types::TypeShape;
use crate::Value;

#[test]
fn value_fields_flags_absent_fields_without_dropping_them() {
    let mut sample = ComplexSample::seven();
    sample.string_var = None;
    let value = sample.to_value();

    let fields = introspect::value_fields(&value);
    let summary: Vec<(&str, bool)> =
        fields.iter()
            .map(|field| (field.name, field.is_absent()))
            .collect();
    assert_eq!(summary, vec![
        ("booleanVar", false),
        ("complexField", false),
        ("intVar", false),
        ("stringVar", true),
    ]);
}

#[test]
fn value_fields_of_scalar_is_empty() {
    assert!(introspect::value_fields(&Value::Int(1)).is_empty());
    assert!(introspect::value_fields(&Value::Null).is_empty());
}

#[test]
fn insertion_order_does_not_affect_enumeration() {
    let forwards = Value::object([("foo", Value::Int(1)), ("bar", Value::Int(2))]);
    let backwards = Value::object([("bar", Value::Int(2)), ("foo", Value::Int(1))]);

    let names = |value: &Value| -> Vec<String> {
        introspect::value_fields(value)
            .iter()
            .map(|field| field.name.to_string())
            .collect()
    };
    assert_eq!(names(&forwards), vec!["bar", "foo"]);
    assert_eq!(names(&forwards), names(&backwards));
}

#[test]
fn shape_fields_see_through_lists() {
    let shape = TypeShape::of::<Vec<ComplexSample>>();
    let names: Vec<&str> =
        introspect::shape_fields(&shape)
            .iter()
            .map(|(name, _)| *name)
            .collect();
    assert_eq!(names, vec!["booleanVar", "complexField", "intVar", "stringVar"]);
}
