//! The arguments of a single call.

use std::fmt;

use serde::Serialize;

use crate::value::Value;

/// Positional values plus `name = value` keyword pairs, both in call order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Args {
    positional: Vec<Value>,
    keywords: Vec<(String, Value)>,
}

impl Args {
    pub fn new() -> Self {
        Args::default()
    }

    /// Only positional arguments.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Args {
            positional: values.into_iter().map(Into::into).collect(),
            keywords: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn pos(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a keyword argument.
    pub fn kw(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.push((name.into(), value.into()));
        self
    }

    pub fn positional_values(&self) -> &[Value] {
        &self.positional
    }

    pub fn keywords(&self) -> &[(String, Value)] {
        &self.keywords
    }

    /// Total number of arguments, positional and keyword.
    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Value>, Vec<(String, Value)>) {
        (self.positional, self.keywords)
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut first = true;
        for value in &self.positional {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}", value)?;
        }
        for (name, value) in &self.keywords {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}={}", name, value)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_call_order() {
        let args = Args::new().pos(1).pos("two").kw("c", 3).kw("a", 0);
        assert_eq!(args.len(), 4);
        assert_eq!(args.positional_values(), &[Value::Int(1), Value::from("two")]);
        let names: Vec<_> = args.keywords().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["c", "a"]);
    }

    #[test]
    fn display() {
        let args = Args::positional([1, 2]).kw("y", vec!["a"]);
        assert_eq!(args.to_string(), "(1, 2, y=[\"a\"])");
        assert_eq!(Args::new().to_string(), "()");
    }
}
