//! Core data model for the luxtools functional helpers.
//!
//! Everything here is inert data: values, their runtime tags, the
//! constraints parameters may declare, parameter lists, call arguments, and
//! callable functions. The behavior (partial application and overload
//! dispatch) lives in `lux-functional`.
//!
//! # Architecture
//!
//! - [`value`]: the dynamic `Value`
//! - [`ty`]: runtime tags (`Ty`) and type constraints (`Constraint`)
//! - [`signature`]: parameter descriptors (`Param`, `Signature`) and their builder
//! - [`args`]: the arguments of one call
//! - [`function`]: `Function` and the `Frame` its body receives

pub mod args;
pub mod function;
pub mod signature;
pub mod ty;
pub mod value;

pub use args::Args;
pub use function::{Frame, Function};
pub use signature::{Param, Signature, SignatureBuilder, SignatureError, SinkKind};
pub use ty::{Constraint, Ty};
pub use value::Value;
