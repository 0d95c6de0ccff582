//! Public AST types for maketext templates.
//!
//! These types are public to enable external tooling (linters, phrase
//! harvesters, the CLI `check` command).

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, with `~` escapes already resolved.
    Literal(String),
    /// A bracket group holding a single positional reference: `[_1]`.
    Placeholder(usize),
    /// A bracket group invoking a locale function: `[quant,_1,file,files]`.
    Call {
        /// Function name with `#`/`*` shorthand already canonicalized.
        function: String,
        args: Vec<Argument>,
        /// Byte offset of the opening `[` in the source template.
        offset: usize,
    },
}

/// A single comma-separated argument of a function bracket group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Literal text, with escaped commas restored.
    Literal(String),
    /// `_N`: positional call argument `N` (1-based).
    Positional(usize),
    /// `_*`: every positional call argument, spliced in place.
    Spread,
}

impl Template {
    /// Names of every function invoked by this template, in order of use.
    pub fn function_names(&self) -> impl Iterator<Item = (&str, usize)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Call {
                function, offset, ..
            } => Some((function.as_str(), *offset)),
            Segment::Literal(_) | Segment::Placeholder(_) => None,
        })
    }
}
