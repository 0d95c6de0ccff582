//! Evaluation context for a single maketext call.

use crate::interpreter::EvalError;
use crate::types::Value;

/// The positional arguments of one maketext call and the template they
/// were supplied for.
pub struct EvalContext<'a> {
    template: &'a str,
    args: &'a [Value],
}

impl<'a> EvalContext<'a> {
    pub fn new(template: &'a str, args: &'a [Value]) -> Self {
        Self { template, args }
    }

    /// The source template, for error messages.
    pub fn template(&self) -> &'a str {
        self.template
    }

    /// All positional arguments, for `_*`.
    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// Resolve `_N` (1-based).
    pub fn positional(&self, index: usize) -> Result<&'a Value, EvalError> {
        index
            .checked_sub(1)
            .and_then(|i| self.args.get(i))
            .ok_or_else(|| EvalError::MissingArgument {
                index,
                template: self.template.to_string(),
            })
    }
}
