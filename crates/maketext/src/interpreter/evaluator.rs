//! Template evaluation against a locale.

use crate::interpreter::{EvalContext, EvalError, Locale, compute_suggestions};
use crate::parser::{Argument, Segment, Template};
use crate::types::Value;

/// Evaluate a parsed template.
///
/// Literal segments are copied, `[_N]` placeholders are replaced by the
/// display form of argument `N` (nothing for `Null`), and function groups are dispatched through
/// the locale's function registry with their arguments resolved.
pub fn eval_template(
    template: &Template,
    ctx: &EvalContext<'_>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(index) => {
                let value = ctx.positional(*index)?;
                if !value.is_null() {
                    output.push_str(&value.to_string());
                }
            }
            Segment::Call { function, args, .. } => {
                output.push_str(&eval_call(function, args, ctx, locale)?);
            }
        }
    }
    Ok(output)
}

fn eval_call(
    function: &str,
    args: &[Argument],
    ctx: &EvalContext<'_>,
    locale: &Locale,
) -> Result<String, EvalError> {
    let Some(formatter) = locale.functions().get(function) else {
        return Err(EvalError::UnknownFunction {
            name: function.to_string(),
            template: ctx.template().to_string(),
            suggestions: compute_suggestions(function, locale.functions().names()),
        });
    };
    let resolved = resolve_arguments(args, ctx)?;
    formatter(locale, &resolved)
}

/// Resolve `_N` and `_*` references, splicing `_*` in place.
fn resolve_arguments(args: &[Argument], ctx: &EvalContext<'_>) -> Result<Vec<Value>, EvalError> {
    let mut resolved = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Argument::Literal(text) => resolved.push(Value::String(text.clone())),
            Argument::Positional(index) => resolved.push(ctx.positional(*index)?.clone()),
            Argument::Spread => resolved.extend(ctx.args().iter().cloned()),
        }
    }
    Ok(resolved)
}
