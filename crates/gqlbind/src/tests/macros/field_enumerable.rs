use crate as gqlbind;
use gqlbind::macros::FieldEnumerable;
use gqlbind::operation::selection_set;
use gqlbind::operation::SelectionSetError;
use gqlbind::types::FieldEnumerable as _;
use gqlbind::types::TypeShape;
use gqlbind::Value;

#[derive(FieldEnumerable)]
struct Plain {
    zeta: i32,
    alpha: String,
}

#[derive(FieldEnumerable, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Renamed {
    inner_int_var: i32,
    #[serde(rename = "customName")]
    some_field: bool,
    #[serde(skip)]
    #[allow(dead_code)]
    cached: Option<String>,
    r#type: String,
}

#[derive(FieldEnumerable, serde::Deserialize)]
#[serde(rename_all(serialize = "snake_case", deserialize = "camelCase"))]
struct SplitNames {
    #[serde(rename(serialize = "brand", deserialize = "brandName"))]
    brand_name: String,
    alcohol_pct: f64,
    #[serde(skip_deserializing)]
    local_note: Option<String>,
}

#[derive(FieldEnumerable)]
#[serde(rename_all = "PascalCase")]
struct Pascal {
    first_name: String,
}

#[derive(FieldEnumerable)]
struct Outer {
    inner: Option<Plain>,
    tags: Vec<String>,
}

#[derive(FieldEnumerable)]
struct Wrapper<T> {
    item: T,
}

#[derive(FieldEnumerable)]
struct Recursive {
    name: String,
    next: Option<Box<Recursive>>,
}

#[derive(FieldEnumerable)]
struct Empty {}

#[test]
fn derived_value_lists_fields_alphabetically() {
    let plain = Plain {
        zeta: 1,
        alpha: "a".to_string(),
    };
    assert_eq!(plain.to_value(), Value::object([
        ("alpha", Value::String("a".to_string())),
        ("zeta", Value::Int(1)),
    ]));
}

#[test]
fn derived_shape_is_named_after_the_type() {
    let shape = TypeShape::of::<Plain>();
    let type_name = shape.as_object().unwrap().type_name().unwrap();
    assert!(type_name.ends_with("Plain"), "{type_name}");
}

#[test]
fn serde_naming_attributes_are_honored() {
    let renamed = Renamed {
        inner_int_var: 3,
        some_field: true,
        cached: Some("skipped".to_string()),
        r#type: "t".to_string(),
    };
    assert_eq!(renamed.to_value(), Value::object([
        ("customName", Value::Bool(true)),
        ("innerIntVar", Value::Int(3)),
        ("type", Value::String("t".to_string())),
    ]));
    assert_eq!(
        selection_set::generate(&TypeShape::of::<Renamed>(), None).unwrap(),
        "{customName innerIntVar type}",
    );
}

#[test]
fn split_serde_names_follow_the_deserialize_form() {
    assert_eq!(
        selection_set::generate(&TypeShape::of::<SplitNames>(), None).unwrap(),
        "{alcoholPct brandName}",
    );

    let decoded: SplitNames =
        serde_json::from_str(r#"{"brandName": "Hop", "alcoholPct": 5.5}"#).unwrap();
    assert_eq!(decoded.local_note, None);

    let with_note = SplitNames {
        local_note: Some("cold".to_string()),
        ..decoded
    };
    assert_eq!(with_note.to_value(), Value::object([
        ("alcoholPct", Value::Float(5.5)),
        ("brandName", Value::String("Hop".to_string())),
        ("localNote", Value::String("cold".to_string())),
    ]));
}

#[test]
fn pascal_case_rule() {
    let pascal = Pascal {
        first_name: "Ada".to_string(),
    };
    assert_eq!(pascal.to_value(), Value::object([
        ("FirstName", Value::String("Ada".to_string())),
    ]));
}

#[test]
fn nested_derived_types_expand_in_selection_sets() {
    assert_eq!(
        selection_set::generate(&TypeShape::of::<Outer>(), None).unwrap(),
        "{inner {alpha zeta} tags}",
    );

    let outer = Outer {
        inner: None,
        tags: vec!["x".to_string()],
    };
    assert_eq!(outer.to_value(), Value::object([
        ("inner", Value::Null),
        ("tags", Value::List(vec![Value::String("x".to_string())])),
    ]));
}

#[test]
fn generic_structs_derive_with_bounds() {
    assert_eq!(
        selection_set::generate(&TypeShape::of::<Wrapper<Plain>>(), None).unwrap(),
        "{item {alpha zeta}}",
    );
    let wrapper = Wrapper {
        item: 5_i32,
    };
    assert_eq!(wrapper.to_value(), Value::object([("item", Value::Int(5))]));
}

#[test]
fn recursive_struct_is_reported_as_cyclic() {
    assert!(matches!(
        selection_set::generate(&TypeShape::of::<Recursive>(), None),
        Err(SelectionSetError::CyclicSelectionSet { path, .. }) if path == "next",
    ));
}

#[test]
fn empty_struct_has_empty_selection_set() {
    assert!(matches!(
        selection_set::generate(&TypeShape::of::<Empty>(), None),
        Err(SelectionSetError::EmptySelectionSet { .. }),
    ));
}
