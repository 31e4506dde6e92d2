use crate::operation::argument_encoder;
use crate::operation::SynthesisError;
use crate::operation::VarMarkers;
use crate::operation::Variable;
use crate::tests::fixtures::ComplexSample;
use crate::tests::fixtures::SampleRequest;
use crate::types::ScalarKind;
use crate::types::TypeShape;
use crate::DotPath;
use crate::Value;

fn encode(variable: &Variable) -> Option<String> {
    argument_encoder::encode_variable(variable).unwrap()
}

#[test]
fn scalar_argument_uses_its_own_name() {
    assert_eq!(encode(&Variable::new("foo", "foo")), Some(r#"foo: "foo""#.to_string()));
    assert_eq!(encode(&Variable::new("count", &3_i32)), Some("count: 3".to_string()));
    assert_eq!(encode(&Variable::new("on", &false)), Some("on: false".to_string()));
}

#[test]
fn structured_argument_fields_are_alphabetical() {
    let variable = Variable::new("sampleRequest", &SampleRequest::new("foo", "bar"));
    assert_eq!(
        encode(&variable),
        Some(r#"sampleRequest: {bar: "bar", foo: "foo"}"#.to_string()),
    );
}

#[test]
fn nested_structured_argument() {
    let variable = Variable::new("complexSample", &ComplexSample::seven());
    assert_eq!(
        encode(&variable),
        Some(concat!(
            r#"complexSample: {booleanVar: true, complexField: {innerBooleanVar: false, "#,
            r#"innerIntVar: 77, innerStringVar: "sevenseven"}, intVar: 7, stringVar: "seven"}"#,
        ).to_string()),
    );
}

#[test]
fn null_fields_are_omitted_at_every_depth() {
    let mut sample = ComplexSample::seven();
    sample.string_var = None;
    if let Some(complex_field) = sample.complex_field.as_mut() {
        complex_field.inner_string_var = None;
    }

    assert_eq!(
        encode(&Variable::new("complexSample", &sample)),
        Some(concat!(
            "complexSample: {booleanVar: true, complexField: {innerBooleanVar: false, ",
            "innerIntVar: 77}, intVar: 7}",
        ).to_string()),
    );
}

#[test]
fn ignore_paths_exclude_exactly_the_named_fields() {
    let variable =
        Variable::new("complexSample", &ComplexSample::seven())
            .ignore("intVar")
            .ignore("complexField.innerStringVar")
            .ignore("complexField.innerBooleanVar");

    assert_eq!(
        encode(&variable),
        Some(concat!(
            r#"complexSample: {booleanVar: true, complexField: {innerIntVar: 77}, "#,
            r#"stringVar: "seven"}"#,
        ).to_string()),
    );
}

#[test]
fn ignore_paths_match_the_full_prefix_not_the_leaf_name() {
    // `innerIntVar` only exists under `complexField`, so a root-level path
    // with the same leaf name must not exclude it.
    let variable =
        Variable::new("complexSample", &ComplexSample::seven())
            .ignore("innerIntVar")
            .ignore("complexField.doesNotExist");

    assert_eq!(
        encode(&variable),
        encode(&Variable::new("complexSample", &ComplexSample::seven())),
    );
}

#[test]
fn fully_excluded_object_renders_as_empty_braces() {
    let variable =
        Variable::new("sampleRequest", &SampleRequest::new("foo", "bar"))
            .ignore("foo")
            .ignore("bar");
    assert_eq!(encode(&variable), Some("sampleRequest: {}".to_string()));
}

#[test]
fn null_top_level_argument_is_omitted() {
    let absent: Option<SampleRequest> = None;
    assert_eq!(encode(&Variable::new("sampleRequest", &absent)), None);
}

#[test]
fn explicit_name_overrides_inferred_name() {
    let variable = Variable::new("foo", "value").with_explicit_name("renamed");
    assert_eq!(encode(&variable), Some(r#"renamed: "value""#.to_string()));
}

#[test]
fn raw_text_is_emitted_unquoted() {
    let variable = Variable::new("status", "ACTIVE").raw(true);
    assert_eq!(encode(&variable), Some("status: ACTIVE".to_string()));

    let nested = Variable::from_parts(
        "filter",
        Value::object([("status", Value::String("ACTIVE".to_string()))]),
        TypeShape::Scalar(ScalarKind::Any),
    ).with_markers(VarMarkers {
        raw: true,
        ..VarMarkers::default()
    });
    assert_eq!(encode(&nested), Some("filter: {status: ACTIVE}".to_string()));
}

#[test]
fn strings_are_escaped() {
    let variable = Variable::new("text", "say \"hi\"\\\n\u{1}");
    assert_eq!(
        encode(&variable),
        Some(r#"text: "say \"hi\"\\\n\u0001""#.to_string()),
    );
}

#[test]
fn floats_always_carry_a_decimal_point() {
    assert_eq!(encode(&Variable::new("f", &1.0_f64)), Some("f: 1.0".to_string()));
    assert_eq!(encode(&Variable::new("f", &2.5_f64)), Some("f: 2.5".to_string()));
    assert_eq!(encode(&Variable::new("f", &-0.125_f32)), Some("f: -0.125".to_string()));
}

#[test]
fn single_precision_floats_keep_their_shortest_form() {
    assert_eq!(encode(&Variable::new("f", &0.1_f32)), Some("f: 0.1".to_string()));
    assert_eq!(encode(&Variable::new("f", &3.3_f32)), Some("f: 3.3".to_string()));
    assert_eq!(encode(&Variable::new("f", &1e-7_f32)), Some("f: 0.0000001".to_string()));
}

#[test]
fn non_finite_float_is_an_error() {
    let value = Value::object([("ratio", Value::Float(f64::NAN))]);
    let variable = Variable::from_parts("stats", value.clone(), TypeShape::inferred_from(&value));

    match argument_encoder::encode_variable(&variable) {
        Err(SynthesisError::NonFiniteFloat { argument_name, path }) => {
            assert_eq!(argument_name, "stats");
            assert_eq!(path, DotPath::from("ratio"));
        },
        other => panic!("Expected NonFiniteFloat, got {other:?}"),
    }
}

#[test]
fn lists_render_elements_in_order_and_keep_nulls() {
    let value = Value::List(vec![Value::Int(3), Value::Null, Value::Int(1)]);
    let variable = Variable::from_parts("ids", value, TypeShape::of::<Vec<Option<i32>>>());
    assert_eq!(encode(&variable), Some("ids: [3, null, 1]".to_string()));
}

#[test]
fn ignore_paths_reach_into_list_elements() {
    let requests = vec![SampleRequest::new("f1", "b1"), SampleRequest::new("f2", "b2")];
    let variable = Variable::new("requests", &requests).ignore("foo");
    assert_eq!(
        encode(&variable),
        Some(r#"requests: [{bar: "b1"}, {bar: "b2"}]"#.to_string()),
    );
}

#[test]
fn argument_list_preserves_caller_order() {
    let foo = Variable::new("foo", "foo");
    let bar = Variable::new("bar", "bar");
    assert_eq!(
        argument_encoder::encode_arguments([&foo, &bar]).unwrap(),
        r#"(foo: "foo", bar: "bar")"#,
    );
    assert_eq!(
        argument_encoder::encode_arguments([&bar, &foo]).unwrap(),
        r#"(bar: "bar", foo: "foo")"#,
    );
}

#[test]
fn argument_list_without_surviving_arguments_is_empty() {
    let absent: Option<String> = None;
    let variable = Variable::new("foo", &absent);
    assert_eq!(argument_encoder::encode_arguments([&variable]).unwrap(), "");
    assert_eq!(argument_encoder::encode_arguments(Vec::<&Variable>::new()).unwrap(), "");
}
