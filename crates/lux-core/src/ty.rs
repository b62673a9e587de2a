//! Runtime type tags and parameter type constraints.
//!
//! A `Ty` is the tag every [`Value`] carries at runtime. A `Constraint` is
//! what a parameter may declare about the values it accepts. Checking a value
//! against a constraint is plain structural matching: there is no subtyping
//! and no coercion (an `Int` never satisfies `Exact(Float)`).

use std::fmt;

use serde::Serialize;

use crate::value::Value;

/// The runtime tag of a [`Value`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Ty {
    None,
    Bool,
    Int,
    Float,
    Str,
    List,
    Map,
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ty::None => "None",
            Ty::Bool => "Bool",
            Ty::Int => "Int",
            Ty::Float => "Float",
            Ty::Str => "Str",
            Ty::List => "List",
            Ty::Map => "Map",
        };
        write!(f, "{}", name)
    }
}

/// A declared constraint on the values a parameter accepts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub enum Constraint {
    /// No annotation: every value is accepted.
    #[default]
    Any,
    /// The value's tag must equal this one.
    Exact(Ty),
    /// A `List` whose every element satisfies the inner constraint.
    SequenceOf(Box<Constraint>),
    /// A `Map` whose every value satisfies the inner constraint.
    MapOf(Box<Constraint>),
    /// Satisfied when any member is satisfied.
    Union(Vec<Constraint>),
}

impl Constraint {
    pub fn exact(ty: Ty) -> Constraint {
        Constraint::Exact(ty)
    }

    pub fn sequence_of(inner: Constraint) -> Constraint {
        Constraint::SequenceOf(Box::new(inner))
    }

    pub fn map_of(inner: Constraint) -> Constraint {
        Constraint::MapOf(Box::new(inner))
    }

    /// `inner` or `None`.
    pub fn optional(inner: Constraint) -> Constraint {
        Constraint::Union(vec![inner, Constraint::Exact(Ty::None)])
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Constraint::Any)
    }

    /// Check a value against this constraint.
    ///
    /// Containers are checked element-wise, so an empty list satisfies
    /// `SequenceOf` with any element constraint.
    pub fn is_satisfied_by(&self, value: &Value) -> bool {
        match (self, value) {
            (Constraint::Any, _) => true,
            (Constraint::Exact(ty), v) => v.ty() == *ty,
            (Constraint::SequenceOf(inner), Value::List(items)) => {
                items.iter().all(|item| inner.is_satisfied_by(item))
            }
            (Constraint::MapOf(inner), Value::Map(entries)) => {
                entries.values().all(|v| inner.is_satisfied_by(v))
            }
            (Constraint::Union(members), v) => members.iter().any(|m| m.is_satisfied_by(v)),
            (Constraint::SequenceOf(_), _) | (Constraint::MapOf(_), _) => false,
        }
    }
}

impl From<Ty> for Constraint {
    fn from(ty: Ty) -> Self {
        Constraint::Exact(ty)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Any => write!(f, "Any"),
            Constraint::Exact(ty) => write!(f, "{}", ty),
            Constraint::SequenceOf(inner) => write!(f, "List[{}]", inner),
            Constraint::MapOf(inner) => write!(f, "Map[{}]", inner),
            Constraint::Union(members) => {
                for (i, m) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", m)?;
                }
                Ok(())
            }
        }
    }
}
