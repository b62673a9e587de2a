//! Integration tests for the lux-core data model: signatures built through
//! the public builder, constraint checks against realistic values, and the
//! serialized shape of descriptors.

use lux_core::{Args, Constraint, Function, Param, Signature, SignatureError, Ty, Value};
use serde_json::json;

// ── Helpers ────────────────────────────────────────────────────────────

fn list_of_str() -> Constraint {
    Constraint::sequence_of(Ty::Str.into())
}

// ── Signatures ─────────────────────────────────────────────────────────

#[test]
fn test_signature_with_mixed_params() {
    let sig = Signature::builder()
        .typed("x", list_of_str())
        .typed("y", Ty::Int)
        .required("z")
        .optional("scale", 1.0)
        .build()
        .expect("valid signature");

    assert_eq!(sig.len(), 4);
    assert_eq!(sig.required_count(), 3);
    assert!(sig.var_positional().is_none());
    assert!(sig.var_keyword().is_none());
    assert_eq!(sig.to_string(), "(x: List[Str], y: Int, z, scale = 1.0)");
}

#[test]
fn test_param_constraint_is_checked_against_values() {
    let x = Param::required("x").with_constraint(list_of_str());
    assert!(x.constraint.is_satisfied_by(&Value::list(["1"])));
    assert!(!x.constraint.is_satisfied_by(&Value::list([1])));
}

#[test]
fn test_duplicate_parameter_message() {
    let err = Signature::builder()
        .required("a")
        .required("b")
        .required("a")
        .build()
        .unwrap_err();
    assert!(matches!(err, SignatureError::DuplicateParameter { ref name } if name == "a"));
    assert_eq!(err.to_string(), "duplicate parameter `a`");
}

// ── Serialization ──────────────────────────────────────────────────────

#[test]
fn test_signature_serializes_without_index() {
    let sig = Signature::builder()
        .typed("y", Ty::Int)
        .optional("d", 5)
        .var_keyword("kwargs")
        .build()
        .unwrap();
    let value = serde_json::to_value(&sig).unwrap();
    assert_eq!(
        value,
        json!({
            "params": [
                { "name": "y", "default": null, "constraint": { "Exact": "Int" } },
                { "name": "d", "default": { "Int": 5 }, "constraint": "Any" }
            ],
            "var_positional": null,
            "var_keyword": "kwargs"
        })
    );
}

#[test]
fn test_args_serialize_in_call_order() {
    let args = Args::new().pos("a").kw("n", 2);
    let value = serde_json::to_value(&args).unwrap();
    assert_eq!(
        value,
        json!({
            "positional": [{ "Str": "a" }],
            "keywords": [["n", { "Int": 2 }]]
        })
    );
}

// ── Functions ──────────────────────────────────────────────────────────

#[test]
fn test_function_body_sees_declaration_order() {
    let sig = Signature::builder()
        .required("first")
        .required("second")
        .build()
        .unwrap();
    let concat = Function::new("concat", sig, |frame| {
        let parts: Vec<&str> = frame.values().iter().filter_map(Value::as_str).collect();
        Value::from(parts.join(""))
    });
    let out = concat.invoke(vec!["ab".into(), "cd".into()], vec![]);
    assert_eq!(out, Value::from("abcd"));
}
