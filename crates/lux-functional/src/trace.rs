//! Why overload candidates were accepted or rejected.
//!
//! Traces are a debugging aid. Producing one never changes which candidate
//! a dispatch selects.

use std::fmt;

use lux_core::{Constraint, Ty};
use serde::Serialize;

/// The reason a single candidate did not match a call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Rejection {
    /// Declared parameter count differs from the number of arguments.
    ArityMismatch { expected: usize, found: usize },
    /// An argument's runtime type does not satisfy the parameter's constraint.
    TypeMismatch {
        param: String,
        expected: Constraint,
        found: Ty,
    },
    /// A keyword named no parameter still open after the positional phase.
    UnexpectedKeyword { keyword: String },
    /// Parameters left without an argument.
    Unconsumed { params: Vec<String> },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ArityMismatch { expected, found } => {
                write!(f, "expected {} arguments, found {}", expected, found)
            }
            Rejection::TypeMismatch {
                param,
                expected,
                found,
            } => {
                write!(
                    f,
                    "parameter `{}` expected `{}`, found `{}`",
                    param, expected, found
                )
            }
            Rejection::UnexpectedKeyword { keyword } => {
                write!(f, "unexpected keyword argument `{}`", keyword)
            }
            Rejection::Unconsumed { params } => {
                write!(f, "unbound parameters: {}", params.join(", "))
            }
        }
    }
}

/// The outcome of matching one candidate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

/// One candidate's outcome, tagged with its position in the overload set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandidateTrace {
    pub index: usize,
    /// `name(signature)` of the candidate.
    pub function: String,
    pub outcome: Outcome,
}

impl CandidateTrace {
    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.outcome {
            Outcome::Accepted => None,
            Outcome::Rejected(r) => Some(r),
        }
    }
}

impl fmt::Display for CandidateTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}: ", self.index, self.function)?;
        match &self.outcome {
            Outcome::Accepted => write!(f, "accepted"),
            Outcome::Rejected(r) => write!(f, "{}", r),
        }
    }
}

/// Every candidate's outcome for one set of arguments.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DispatchTrace {
    /// The rendered call arguments.
    pub args: String,
    pub candidates: Vec<CandidateTrace>,
}

impl DispatchTrace {
    /// Index of the candidate dispatch would invoke: the first accepted one.
    pub fn selected(&self) -> Option<usize> {
        self.candidates
            .iter()
            .find(|c| c.outcome == Outcome::Accepted)
            .map(|c| c.index)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for DispatchTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dispatch {}", self.args)?;
        for candidate in &self.candidates {
            write!(f, "\n  {}", candidate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_display() {
        assert_eq!(
            Rejection::ArityMismatch {
                expected: 2,
                found: 5
            }
            .to_string(),
            "expected 2 arguments, found 5"
        );
        assert_eq!(
            Rejection::TypeMismatch {
                param: "x".into(),
                expected: Constraint::sequence_of(Ty::Str.into()),
                found: Ty::Int,
            }
            .to_string(),
            "parameter `x` expected `List[Str]`, found `Int`"
        );
        assert_eq!(
            Rejection::Unconsumed {
                params: vec!["a".into(), "b".into()]
            }
            .to_string(),
            "unbound parameters: a, b"
        );
    }

    #[test]
    fn selected_is_first_accepted() {
        let trace = DispatchTrace {
            args: "(1)".into(),
            candidates: vec![
                CandidateTrace {
                    index: 0,
                    function: "a(x: Str)".into(),
                    outcome: Outcome::Rejected(Rejection::TypeMismatch {
                        param: "x".into(),
                        expected: Ty::Str.into(),
                        found: Ty::Int,
                    }),
                },
                CandidateTrace {
                    index: 1,
                    function: "b(x)".into(),
                    outcome: Outcome::Accepted,
                },
                CandidateTrace {
                    index: 2,
                    function: "c(y)".into(),
                    outcome: Outcome::Accepted,
                },
            ],
        };
        assert_eq!(trace.selected(), Some(1));
        assert!(trace.candidates[0].rejection().is_some());
        assert_eq!(
            trace.to_string(),
            "dispatch (1)\n  #0 a(x: Str): parameter `x` expected `Str`, found `Int`\n  #1 b(x): accepted\n  #2 c(y): accepted"
        );
    }
}
