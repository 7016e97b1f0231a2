//! Unit tests for signature validation and parameter schema extraction.

use crate::agent::domain::{
    ANY_TYPE, AgentDomainError, Signature, SignatureParam, Variadic, introspect,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn required_and_defaulted_parameters_are_distinguished() {
    let signature = Signature::new([
        SignatureParam::required("a"),
        SignatureParam::with_default("b", json!(5)),
    ])
    .expect("valid signature");

    let schema = introspect(&signature);

    let a = schema.get("a").expect("a present");
    assert!(a.required());
    assert!(a.default().is_none());

    let b = schema.get("b").expect("b present");
    assert!(!b.required());
    assert_eq!(b.default(), Some(&json!(5)));
}

#[rstest]
fn schema_preserves_declaration_order() {
    let signature = Signature::new([
        SignatureParam::required("zeta"),
        SignatureParam::required("alpha"),
        SignatureParam::with_default("mid", json!("x")),
    ])
    .expect("valid signature");

    assert_eq!(introspect(&signature).names(), vec!["zeta", "alpha", "mid"]);
}

#[rstest]
fn defaults_are_captured_verbatim() {
    let default = json!({"depth": [1, 2, 3], "mode": "fast"});
    let signature = Signature::new([SignatureParam::with_default("opts", default.clone())
        .annotated("dict[str, Any]")])
    .expect("valid signature");

    let schema = introspect(&signature);
    let opts = schema.get("opts").expect("opts present");

    assert_eq!(opts.default(), Some(&default));
    assert_eq!(opts.type_label(), "dict[str, Any]");
}

#[rstest]
fn null_default_still_makes_parameter_optional() {
    let signature = Signature::new([SignatureParam::with_default("limit", json!(null))])
        .expect("valid signature");

    let schema = introspect(&signature);
    let limit = schema.get("limit").expect("limit present");

    assert!(!limit.required());
    assert_eq!(limit.default(), Some(&json!(null)));
}

#[rstest]
fn missing_annotation_falls_back_to_any() {
    let signature = Signature::new([SignatureParam::required("value")]).expect("valid");
    let schema = introspect(&signature);

    assert_eq!(schema.get("value").expect("present").type_label(), ANY_TYPE);
}

#[rstest]
fn broken_annotation_does_not_fail_extraction() {
    let signature = Signature::new([
        SignatureParam::required("ok").annotated("int"),
        SignatureParam::required("broken").annotated("list[str"),
    ])
    .expect("valid signature");

    let schema = introspect(&signature);

    assert_eq!(schema.get("ok").expect("present").type_label(), "int");
    assert_eq!(schema.get("broken").expect("present").type_label(), ANY_TYPE);
}

#[rstest]
fn variadic_parameters_carry_a_marker() {
    let signature = Signature::new([
        SignatureParam::required("query"),
        SignatureParam::var_positional("args"),
        SignatureParam::var_keyword("kwargs"),
    ])
    .expect("valid signature");

    let schema = introspect(&signature);
    let args = schema.get("args").expect("args present");
    let kwargs = schema.get("kwargs").expect("kwargs present");

    assert_eq!(args.variadic(), Some(Variadic::Positional));
    assert!(!args.required());
    assert!(args.default().is_none());
    assert_eq!(kwargs.variadic(), Some(Variadic::Keyword));
    assert!(schema.get("query").expect("present").variadic().is_none());
}

#[rstest]
fn descriptor_serializes_to_storage_contract_shape() {
    let signature = Signature::new([
        SignatureParam::required("text").annotated("string").described("Input text"),
        SignatureParam::var_keyword("extra"),
    ])
    .expect("valid signature");

    let value = serde_json::to_value(introspect(&signature)).expect("serializable");

    assert_eq!(
        value,
        json!({
            "text": {
                "name": "text",
                "type": "str",
                "required": true,
                "default": null,
                "description": "Input text"
            },
            "extra": {
                "name": "extra",
                "type": "Any",
                "required": false,
                "default": null,
                "description": null,
                "variadic": "keyword"
            }
        })
    );
}

#[rstest]
fn duplicate_parameter_names_are_rejected() {
    let result = Signature::new([SignatureParam::required("a"), SignatureParam::required("a")]);
    assert_eq!(result, Err(AgentDomainError::DuplicateParameter("a".to_owned())));
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_parameter_names_are_rejected(#[case] name: &str) {
    let result = Signature::new([SignatureParam::required(name)]);
    assert_eq!(result, Err(AgentDomainError::EmptyParameterName));
}

#[rstest]
fn repeated_catch_all_kind_is_rejected() {
    let result = Signature::new([
        SignatureParam::var_positional("args"),
        SignatureParam::var_positional("more"),
    ]);
    assert_eq!(
        result,
        Err(AgentDomainError::DuplicateVariadic(Variadic::Positional))
    );
}
