//! The overload dispatcher: pick the first candidate whose signature fits.
//!
//! Matching a candidate against a call goes through four checks, in order:
//! arity (declared parameters == positional + keyword arguments), the
//! positional phase (argument `i` against parameter `i`), the keyword phase
//! (each keyword against a parameter not consumed yet, checking the *value*),
//! and a final check that every parameter was consumed exactly once.
//! Candidate order is the tie-break: the first match wins.

use lux_core::{Args, Function, Param, Signature, Value};
use tracing::debug;

use crate::error::CallError;
use crate::trace::{CandidateTrace, DispatchTrace, Outcome, Rejection};

/// Dispatcher settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Emit a `debug` event for every attempt and rejection.
    pub verbose: bool,
}

impl DispatchOptions {
    pub fn verbose() -> Self {
        DispatchOptions { verbose: true }
    }
}

/// Build an overload set from candidates in priority order.
pub fn overload(functions: Vec<Function>, verbose: bool) -> Overload {
    Overload::with_options(functions, DispatchOptions { verbose })
}

/// An immutable, ordered set of candidate functions.
#[derive(Clone, Debug)]
pub struct Overload {
    candidates: Vec<Function>,
    options: DispatchOptions,
}

impl Overload {
    pub fn with_options(functions: Vec<Function>, options: DispatchOptions) -> Self {
        Overload {
            candidates: functions,
            options,
        }
    }

    pub fn candidates(&self) -> &[Function] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn options(&self) -> DispatchOptions {
        self.options
    }

    /// Invoke the first candidate that accepts `args`.
    pub fn call(&self, args: &Args) -> Result<Value, CallError> {
        let (idx, values) = self.select(args)?;
        Ok(self.candidates[idx].invoke(values, Vec::new()))
    }

    /// Index of the candidate [`Overload::call`] would invoke.
    pub fn resolve(&self, args: &Args) -> Result<usize, CallError> {
        self.select(args).map(|(idx, _)| idx)
    }

    /// Match `args` against every candidate, without stopping at the first
    /// accepted one and without invoking anything.
    pub fn explain(&self, args: &Args) -> DispatchTrace {
        let candidates = self
            .candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| CandidateTrace {
                index,
                function: candidate.to_string(),
                outcome: match match_signature(candidate.signature(), args) {
                    Ok(_) => Outcome::Accepted,
                    Err(rejection) => Outcome::Rejected(rejection),
                },
            })
            .collect();
        DispatchTrace {
            args: args.to_string(),
            candidates,
        }
    }

    fn select(&self, args: &Args) -> Result<(usize, Vec<Value>), CallError> {
        let verbose = self.options.verbose;
        let mut rejections = Vec::new();

        for (index, candidate) in self.candidates.iter().enumerate() {
            if verbose {
                debug!(
                    candidate = index,
                    function = %candidate,
                    args = %args,
                    "trying overload"
                );
            }
            match match_signature(candidate.signature(), args) {
                Ok(values) => {
                    if verbose {
                        debug!(candidate = index, function = %candidate, "overload selected");
                    }
                    return Ok((index, values));
                }
                Err(rejection) => {
                    if verbose {
                        debug!(
                            candidate = index,
                            function = %candidate,
                            reason = %rejection,
                            "overload rejected"
                        );
                    }
                    rejections.push(CandidateTrace {
                        index,
                        function: candidate.to_string(),
                        outcome: Outcome::Rejected(rejection),
                    });
                }
            }
        }

        Err(CallError::NoOverloadMatched {
            args: args.to_string(),
            rejections,
        })
    }
}

fn check(param: &Param, value: &Value) -> Result<(), Rejection> {
    if param.constraint.is_satisfied_by(value) {
        Ok(())
    } else {
        Err(Rejection::TypeMismatch {
            param: param.name.clone(),
            expected: param.constraint.clone(),
            found: value.ty(),
        })
    }
}

/// Match a call against one signature, returning the argument values in
/// declaration order.
fn match_signature(sig: &Signature, args: &Args) -> Result<Vec<Value>, Rejection> {
    let params = sig.params();
    if params.len() != args.len() {
        return Err(Rejection::ArityMismatch {
            expected: params.len(),
            found: args.len(),
        });
    }

    let mut slots: Vec<Option<&Value>> = vec![None; params.len()];

    // Arity equality guarantees every positional has a parameter.
    for ((param, slot), value) in params
        .iter()
        .zip(slots.iter_mut())
        .zip(args.positional_values())
    {
        check(param, value)?;
        *slot = Some(value);
    }

    for (name, value) in args.keywords() {
        let idx = match sig.index_of(name) {
            Some(idx) if slots[idx].is_none() => idx,
            _ => {
                return Err(Rejection::UnexpectedKeyword {
                    keyword: name.clone(),
                })
            }
        };
        check(&params[idx], value)?;
        slots[idx] = Some(value);
    }

    let unconsumed: Vec<String> = params
        .iter()
        .zip(&slots)
        .filter(|(_, slot)| slot.is_none())
        .map(|(param, _)| param.name.clone())
        .collect();
    if !unconsumed.is_empty() {
        return Err(Rejection::Unconsumed { params: unconsumed });
    }

    Ok(slots.into_iter().flatten().cloned().collect())
}
