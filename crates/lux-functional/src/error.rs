//! Errors raised by the curry engine and the overload dispatcher.
//!
//! Every error is returned to the caller at the point of the offending call
//! (or, for unsupported signatures, at wrap time). Nothing is retried and a
//! failed call never leaves partial state behind.

use std::fmt;

use crate::trace::CandidateTrace;

/// A signature construct the curry engine cannot handle.
#[derive(Clone, Debug, PartialEq)]
pub enum Unsupported {
    /// A `*args` sink. Bound values are stored as named slots, so there is
    /// nowhere to keep anonymous extra positionals.
    VariadicPositional { name: String },
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unsupported::VariadicPositional { name } => {
                write!(f, "variadic positional parameter `*{}`", name)
            }
        }
    }
}

/// A call that could not be completed.
#[derive(Clone, Debug)]
pub enum CallError {
    /// A positional argument had no unbound parameter left to go to.
    ArgumentCount {
        function: String,
        /// Parameters still unbound when the call started.
        expected: usize,
        /// Positional arguments supplied by the call.
        given: usize,
    },
    /// A keyword named no parameter and the function has no `**kwargs` sink.
    UnexpectedKeyword { function: String, keyword: String },
    /// The function's signature cannot be curried.
    UnsupportedFeature {
        function: String,
        feature: Unsupported,
    },
    /// No candidate of an overload set accepted the arguments.
    NoOverloadMatched {
        /// The rendered call arguments, e.g. `(1, "a", y=2)`.
        args: String,
        /// Why each candidate was rejected, in candidate order.
        rejections: Vec<CandidateTrace>,
    },
}

impl CallError {
    /// Per-candidate rejection reasons; empty for curry errors.
    pub fn rejections(&self) -> &[CandidateTrace] {
        match self {
            CallError::NoOverloadMatched { rejections, .. } => rejections,
            _ => &[],
        }
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::ArgumentCount {
                function,
                expected,
                given,
            } => {
                write!(
                    f,
                    "too many positional arguments: `{}` takes {} positional arguments but {} were given",
                    function, expected, given
                )
            }
            CallError::UnexpectedKeyword { function, keyword } => {
                write!(
                    f,
                    "`{}` got an unexpected keyword argument `{}`",
                    function, keyword
                )
            }
            CallError::UnsupportedFeature { function, feature } => {
                write!(f, "`{}` uses an unsupported feature: {}", function, feature)
            }
            CallError::NoOverloadMatched { args, .. } => {
                write!(f, "no overload matched arguments {}", args)
            }
        }
    }
}

impl std::error::Error for CallError {}
