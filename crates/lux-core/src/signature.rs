//! Parameter descriptors.
//!
//! A [`Signature`] is the ordered list of parameters a function declares,
//! plus the optional variadic sinks. It is built once through
//! [`SignatureBuilder`] and never changes afterwards; the curry engine and the
//! overload dispatcher only ever read it.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::ty::Constraint;
use crate::value::Value;

/// One declared parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    /// `None` means the parameter is required.
    pub default: Option<Value>,
    pub constraint: Constraint,
}

impl Param {
    /// A required, unconstrained parameter.
    pub fn required(name: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            default: None,
            constraint: Constraint::Any,
        }
    }

    /// A parameter with a default value.
    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Param {
            name: name.into(),
            default: Some(default.into()),
            constraint: Constraint::Any,
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<Constraint>) -> Self {
        self.constraint = constraint.into();
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.constraint.is_any() {
            write!(f, ": {}", self.constraint)?;
        }
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// The kind of a variadic sink.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SinkKind {
    /// `*args`
    Positional,
    /// `**kwargs`
    Keyword,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Positional => write!(f, "variadic positional"),
            SinkKind::Keyword => write!(f, "variadic keyword"),
        }
    }
}

/// The declared parameters of a function.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Signature {
    params: Vec<Param>,
    var_positional: Option<String>,
    var_keyword: Option<String>,
    /// Parameter name -> position in `params`.
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl Signature {
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// Named parameters in declaration order. Sinks are not included.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Position of the parameter called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Param> {
        self.index_of(name).map(|idx| &self.params[idx])
    }

    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|p| p.is_required()).count()
    }

    pub fn var_positional(&self) -> Option<&str> {
        self.var_positional.as_deref()
    }

    pub fn var_keyword(&self) -> Option<&str> {
        self.var_keyword.as_deref()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .params
            .iter()
            .map(ToString::to_string)
            .chain(self.var_positional.iter().map(|n| format!("*{}", n)))
            .chain(self.var_keyword.iter().map(|n| format!("**{}", n)))
            .collect();
        write!(f, "({})", parts.join(", "))
    }
}

/// An invalid parameter list.
#[derive(Clone, Debug, PartialEq)]
pub enum SignatureError {
    /// Two parameters (or a parameter and a sink) share a name.
    DuplicateParameter { name: String },
    /// A second sink of the same kind was declared.
    DuplicateSink { kind: SinkKind },
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::DuplicateParameter { name } => {
                write!(f, "duplicate parameter `{}`", name)
            }
            SignatureError::DuplicateSink { kind } => {
                write!(f, "more than one {} parameter", kind)
            }
        }
    }
}

impl std::error::Error for SignatureError {}

/// Registers parameters in declaration order.
///
/// Errors are deferred to [`SignatureBuilder::build`] so the builder can be
/// chained without intermediate `?`.
#[derive(Debug, Default)]
pub struct SignatureBuilder {
    params: Vec<Param>,
    var_positional: Vec<String>,
    var_keyword: Vec<String>,
}

impl SignatureBuilder {
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn required(self, name: impl Into<String>) -> Self {
        self.param(Param::required(name))
    }

    pub fn optional(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.param(Param::optional(name, default))
    }

    /// A required parameter with a type constraint.
    pub fn typed(self, name: impl Into<String>, constraint: impl Into<Constraint>) -> Self {
        self.param(Param::required(name).with_constraint(constraint))
    }

    pub fn var_positional(mut self, name: impl Into<String>) -> Self {
        self.var_positional.push(name.into());
        self
    }

    pub fn var_keyword(mut self, name: impl Into<String>) -> Self {
        self.var_keyword.push(name.into());
        self
    }

    pub fn build(self) -> Result<Signature, SignatureError> {
        if self.var_positional.len() > 1 {
            return Err(SignatureError::DuplicateSink {
                kind: SinkKind::Positional,
            });
        }
        if self.var_keyword.len() > 1 {
            return Err(SignatureError::DuplicateSink {
                kind: SinkKind::Keyword,
            });
        }

        let mut index = FxHashMap::default();
        for (idx, param) in self.params.iter().enumerate() {
            if index.insert(param.name.clone(), idx).is_some() {
                return Err(SignatureError::DuplicateParameter {
                    name: param.name.clone(),
                });
            }
        }
        let sinks = self.var_positional.iter().chain(self.var_keyword.iter());
        let mut sink_names: Vec<&str> = Vec::new();
        for name in sinks {
            if index.contains_key(name) || sink_names.contains(&name.as_str()) {
                return Err(SignatureError::DuplicateParameter { name: name.clone() });
            }
            sink_names.push(name);
        }

        Ok(Signature {
            index,
            params: self.params,
            var_positional: self.var_positional.into_iter().next(),
            var_keyword: self.var_keyword.into_iter().next(),
        })
    }
}
