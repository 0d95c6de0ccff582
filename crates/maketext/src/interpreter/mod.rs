//! Maketext interpreter for evaluating bracket-notation templates.
//!
//! This module provides the evaluation engine that takes parsed templates
//! and produces formatted strings. It substitutes positional arguments,
//! dispatches bracket groups to the locale's function registry, and selects
//! plural forms through the locale's plural rule.

mod context;
mod error;
mod evaluator;
mod functions;
mod locale;
mod plural;
mod registry;

pub use context::EvalContext;
pub use error::{EvalError, LoadError, compute_suggestions};
pub use evaluator::eval_template;
pub use functions::{FormatterFn, FunctionRegistry};
pub use locale::Locale;
pub use plural::{PluralChoice, PluralRule, plural_categories, plural_category};
pub use registry::LocaleRegistry;
