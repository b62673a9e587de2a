//! Functional helpers over `lux-core` functions: currying and overload
//! dispatch.
//!
//! The two components are independent and share no state.
//!
//! - [`curry()`]: wrap a function so it can be called with any subset of its
//!   arguments, returning a new callable until every required parameter is
//!   bound. Each partial owns its own binding state.
//! - [`overload()`]: combine several functions into one callable that invokes
//!   the first candidate whose signature accepts the call's arity and types.
//!
//! # Architecture
//!
//! - [`curry`](mod@curry): the curry engine (`Curried`, `Applied`, `BindingState`)
//! - [`overload`](mod@overload): the dispatcher (`Overload`, `DispatchOptions`)
//! - [`trace`]: per-candidate rejection reasons
//! - [`error`]: the error taxonomy shared by both components

pub mod curry;
pub mod error;
pub mod overload;
pub mod trace;

pub use curry::{curry, Applied, BindingState, Curried};
pub use error::{CallError, Unsupported};
pub use overload::{overload, DispatchOptions, Overload};
pub use trace::{CandidateTrace, DispatchTrace, Outcome, Rejection};
