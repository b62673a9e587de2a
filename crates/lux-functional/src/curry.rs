//! The curry engine: partial application over named parameter slots.
//!
//! [`curry`] wraps a [`Function`] into a [`Curried`] callable. Each call binds
//! the supplied arguments onto a *copy* of the callable's [`BindingState`]:
//!
//! 1. Positional arguments fill the next unbound required parameter, or the
//!    next unbound parameter of any kind once all required ones are bound.
//! 2. Keyword arguments fill the parameter of the same name, replacing an
//!    earlier value. Unknown names go to the `**kwargs` sink if the function
//!    declares one.
//! 3. If a required parameter is still unbound, the call returns a new
//!    `Curried` owning the updated state. Otherwise the function runs with
//!    bound values, defaults for the rest, and the collected `**kwargs`.
//!
//! The callable that was invoked is never modified, so a partial can be
//! called any number of times and each call starts a fresh chain.

use std::fmt;
use std::rc::Rc;

use lux_core::{Args, Function, Signature, Value};
use tracing::trace;

use crate::error::{CallError, Unsupported};

/// Wrap `function` for partial application.
///
/// Fails if the function declares a `*args` sink.
pub fn curry(function: Function) -> Result<Curried, CallError> {
    if let Some(name) = function.signature().var_positional() {
        return Err(CallError::UnsupportedFeature {
            function: function.name().to_string(),
            feature: Unsupported::VariadicPositional {
                name: name.to_string(),
            },
        });
    }
    let state = BindingState::new(function.signature().len());
    Ok(Curried {
        function: Rc::new(function),
        state,
    })
}

/// Values bound so far by one partial-application chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BindingState {
    /// One slot per declared parameter, in declaration order.
    slots: Vec<Option<Value>>,
    /// Keywords collected by the `**kwargs` sink, in arrival order.
    extra: Vec<(String, Value)>,
}

impl BindingState {
    fn new(params: usize) -> Self {
        BindingState {
            slots: vec![None; params],
            extra: Vec::new(),
        }
    }

    /// Value bound to the `idx`-th parameter, if any.
    pub fn slot(&self, idx: usize) -> Option<&Value> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    pub fn extra_keywords(&self) -> &[(String, Value)] {
        &self.extra
    }

    fn unbound_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Where the next positional argument goes.
    fn next_positional_slot(&self, sig: &Signature) -> Option<usize> {
        let params = sig.params();
        let is_unbound = |idx: &usize| self.slots[*idx].is_none();
        (0..params.len())
            .filter(is_unbound)
            .find(|&idx| params[idx].is_required())
            .or_else(|| (0..params.len()).find(is_unbound))
    }

    fn collect_extra(&mut self, name: String, value: Value) {
        match self.extra.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.extra.push((name, value)),
        }
    }

    /// Required parameters with no value yet, in declaration order.
    fn remaining<'s>(&self, sig: &'s Signature) -> Vec<&'s str> {
        sig.params()
            .iter()
            .zip(&self.slots)
            .filter(|(param, slot)| param.is_required() && slot.is_none())
            .map(|(param, _)| param.name.as_str())
            .collect()
    }

    /// Bound values with defaults filled in, or `None` while a required
    /// parameter is unbound.
    fn resolve(&self, sig: &Signature) -> Option<Vec<Value>> {
        sig.params()
            .iter()
            .zip(&self.slots)
            .map(|(param, slot)| slot.clone().or_else(|| param.default.clone()))
            .collect()
    }
}

/// A function awaiting some or all of its arguments.
///
/// Cloning yields an independent chain: the function is shared, the
/// binding state is copied.
#[derive(Clone, Debug)]
pub struct Curried {
    function: Rc<Function>,
    state: BindingState,
}

impl Curried {
    /// Apply one call's worth of arguments.
    ///
    /// `self` is left untouched whether the call succeeds or fails.
    pub fn call(&self, args: Args) -> Result<Applied, CallError> {
        let sig = self.function.signature();
        let mut state = self.state.clone();
        let (positional, keywords) = args.into_parts();

        let open = state.unbound_count();
        let given = positional.len();
        for value in positional {
            let Some(idx) = state.next_positional_slot(sig) else {
                return Err(CallError::ArgumentCount {
                    function: self.name().to_string(),
                    expected: open,
                    given,
                });
            };
            state.slots[idx] = Some(value);
        }

        for (name, value) in keywords {
            match sig.index_of(&name) {
                Some(idx) => state.slots[idx] = Some(value),
                None if sig.var_keyword().is_some() => state.collect_extra(name, value),
                None => {
                    return Err(CallError::UnexpectedKeyword {
                        function: self.name().to_string(),
                        keyword: name,
                    })
                }
            }
        }

        match state.resolve(sig) {
            Some(values) => {
                trace!(function = self.name(), "all parameters bound, invoking");
                Ok(Applied::Done(self.function.invoke(values, state.extra)))
            }
            None => {
                trace!(
                    function = self.name(),
                    remaining = state.remaining(sig).len(),
                    "partial application"
                );
                Ok(Applied::Partial(Curried {
                    function: Rc::clone(&self.function),
                    state,
                }))
            }
        }
    }

    pub fn name(&self) -> &str {
        self.function.name()
    }

    pub fn doc(&self) -> Option<&str> {
        self.function.doc()
    }

    pub fn signature(&self) -> &Signature {
        self.function.signature()
    }

    pub fn state(&self) -> &BindingState {
        &self.state
    }

    /// Value bound so far for a parameter or a collected keyword.
    pub fn bound(&self, name: &str) -> Option<&Value> {
        match self.signature().index_of(name) {
            Some(idx) => self.state.slot(idx),
            None => self
                .state
                .extra
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v),
        }
    }

    /// Names of required parameters still awaiting a value.
    pub fn remaining(&self) -> Vec<&str> {
        self.state.remaining(self.function.signature())
    }

    /// Whether the next call, even an empty one, runs the function.
    pub fn is_saturated(&self) -> bool {
        self.remaining().is_empty()
    }
}

impl fmt::Display for Curried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "curry({})", self.function)?;
        let bound: Vec<String> = self
            .signature()
            .params()
            .iter()
            .zip(&self.state.slots)
            .filter_map(|(p, slot)| slot.as_ref().map(|v| format!("{}={}", p.name, v)))
            .chain(self.state.extra.iter().map(|(k, v)| format!("{}={}", k, v)))
            .collect();
        if !bound.is_empty() {
            write!(f, "[{}]", bound.join(", "))?;
        }
        Ok(())
    }
}

/// The result of one [`Curried::call`].
#[derive(Debug)]
pub enum Applied {
    /// Every required parameter was bound and the function ran.
    Done(Value),
    /// More arguments are needed.
    Partial(Curried),
}

impl Applied {
    pub fn is_done(&self) -> bool {
        matches!(self, Applied::Done(_))
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Applied::Done(value) => Some(value),
            Applied::Partial(_) => None,
        }
    }

    pub fn into_partial(self) -> Option<Curried> {
        match self {
            Applied::Done(_) => None,
            Applied::Partial(curried) => Some(curried),
        }
    }
}
