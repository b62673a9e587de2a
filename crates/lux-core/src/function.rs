//! Callable functions and the argument frame their bodies receive.
//!
//! A [`Function`] bundles an identity (name and documentation), a
//! [`Signature`], and a native body. Bodies never see raw call arguments:
//! whoever invokes a function first resolves the arguments against the
//! signature and hands the body a [`Frame`] holding one value per declared
//! parameter, in declaration order.

use std::fmt;
use std::rc::Rc;

use crate::signature::Signature;
use crate::value::Value;

/// The native body of a [`Function`].
pub type Body = dyn Fn(&Frame<'_>) -> Value;

/// A named function with a fixed signature.
///
/// Cloning is cheap: the body is shared.
#[derive(Clone)]
pub struct Function {
    name: String,
    doc: Option<String>,
    signature: Signature,
    body: Rc<Body>,
}

impl Function {
    pub fn new<F>(name: impl Into<String>, signature: Signature, body: F) -> Self
    where
        F: Fn(&Frame<'_>) -> Value + 'static,
    {
        Function {
            name: name.into(),
            doc: None,
            signature,
            body: Rc::new(body),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Run the body on already-resolved values.
    ///
    /// `values` must hold exactly one value per declared parameter, in
    /// declaration order; `extra` holds collected `**kwargs` entries.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not match the parameter count.
    pub fn invoke(&self, values: Vec<Value>, extra: Vec<(String, Value)>) -> Value {
        assert_eq!(
            values.len(),
            self.signature.len(),
            "`{}` invoked with unresolved parameters",
            self.name
        );
        let frame = Frame {
            signature: &self.signature,
            values,
            extra,
        };
        (self.body)(&frame)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("signature", &self.signature.to_string())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.signature)
    }
}

/// Resolved arguments of one invocation.
pub struct Frame<'a> {
    signature: &'a Signature,
    values: Vec<Value>,
    extra: Vec<(String, Value)>,
}

impl Frame<'_> {
    /// Value of the parameter called `name`, or of a collected `**kwargs`
    /// entry with that key.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.signature.index_of(name) {
            Some(idx) => self.values.get(idx),
            None => self.extra.iter().find(|(k, _)| k == name).map(|(_, v)| v),
        }
    }

    /// Value of the `idx`-th declared parameter.
    pub fn arg(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// All declared parameter values in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Collected `**kwargs` entries in arrival order.
    pub fn extra_keywords(&self) -> &[(String, Value)] {
        &self.extra
    }

    /// Collected `**kwargs` entries as a `Map` value.
    pub fn extra_map(&self) -> Value {
        Value::Map(self.extra.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_ab() -> Function {
        let sig = Signature::builder()
            .required("a")
            .optional("b", 10)
            .var_keyword("kwargs")
            .build()
            .unwrap();
        Function::new("sum_ab", sig, |frame| {
            let extra: i64 = frame
                .extra_keywords()
                .iter()
                .filter_map(|(_, v)| v.as_int())
                .sum();
            Value::Int(frame.int("a").unwrap() + frame.int("b").unwrap() + extra)
        })
        .with_doc("adds things")
    }

    #[test]
    fn invoke_passes_frame() {
        let f = sum_ab();
        let out = f.invoke(
            vec![Value::Int(1), Value::Int(2)],
            vec![("z".into(), Value::Int(100))],
        );
        assert_eq!(out, Value::Int(103));
    }

    #[test]
    fn frame_lookup_by_name_and_index() {
        let sig = Signature::builder().required("x").required("y").build().unwrap();
        let f = Function::new("pick", sig, |frame| {
            assert_eq!(frame.arg(1), frame.get("y"));
            assert!(frame.get("nope").is_none());
            frame.get("x").cloned().unwrap_or(Value::None)
        });
        assert_eq!(f.invoke(vec!["a".into(), "b".into()], vec![]), Value::from("a"));
    }

    #[test]
    fn identity() {
        let f = sum_ab();
        assert_eq!(f.name(), "sum_ab");
        assert_eq!(f.doc(), Some("adds things"));
        assert_eq!(f.to_string(), "sum_ab(a, b = 10, **kwargs)");
    }

    #[test]
    #[should_panic(expected = "invoked with unresolved parameters")]
    fn invoke_checks_arity() {
        sum_ab().invoke(vec![Value::Int(1)], vec![]);
    }
}
