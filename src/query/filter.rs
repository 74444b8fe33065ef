// Boolean filter expression compiler
// Author: Gabriel Demetrios Lafis

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// The permitted comparison operators, longest spellings first
pub const FILTER_OPERATORS: [&str; 10] = ["!~", "=~", "==", "!=", ">=", "<=", "=@", "!@", ">", "<"];

static OPERATOR_ALTERNATION: Lazy<String> = Lazy::new(|| {
    FILTER_OPERATORS
        .iter()
        .map(|op| regex::escape(op))
        .collect::<Vec<_>>()
        .join("|")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// An identifier at the start of the expression or after a connective,
// directly followed by an operator.
static OPERAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(&&\s*|\|\|\s*|^)([a-z0-9]+)(\s*(?:{}))",
        *OPERATOR_ALTERNATION
    ))
    .expect("operand pattern is valid")
});

static QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new(r#"['"]"#).expect("quote pattern is valid"));

static AND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*&&\s*").expect("and pattern is valid"));

static OR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\|\|\s*").expect("or pattern is valid"));

static OPERATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\s*({})\s*", *OPERATOR_ALTERNATION)).expect("operator pattern is valid")
});

/// A filter expression in the service's wire syntax
///
/// `;` joins operands with AND and `,` with OR; there is no grouping, so a
/// mixed chain is evaluated by the service in textual order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFilter {
    expression: String,
}

impl CompiledFilter {
    /// Get the compiled expression before percent-encoding
    pub fn as_str(&self) -> &str {
        &self.expression
    }

    /// Get the percent-encoded form sent as the `filters` parameter
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.expression).into_owned()
    }
}

impl fmt::Display for CompiledFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Compile a human-written filter such as `country == Brazil && visits > 10`
///
/// Returns `None` when nothing is left after compilation, in which case the
/// filter parameter must be omitted from the request.
pub fn compile_filter(raw: &str) -> Option<CompiledFilter> {
    let filter = WHITESPACE.replace_all(raw.trim(), " ");
    let filter = escape_reserved(&filter);
    let filter = OPERAND.replace_all(&filter, "${1}ga:${2}${3}");
    let filter = QUOTES.replace_all(&filter, "");
    let filter = AND.replace_all(&filter, ";");
    let filter = OR.replace_all(&filter, ",");
    let filter = OPERATOR.replace_all(&filter, "${1}");

    if filter.is_empty() {
        None
    } else {
        Some(CompiledFilter {
            expression: filter.into_owned(),
        })
    }
}

/// Escape literal `,` and `;`; characters that are already escaped stay as they are
fn escape_reserved(filter: &str) -> String {
    let mut escaped = String::with_capacity(filter.len());
    let mut after_backslash = false;

    for c in filter.chars() {
        if (c == ',' || c == ';') && !after_backslash {
            escaped.push('\\');
        }
        escaped.push(c);
        after_backslash = c == '\\' && !after_backslash;
    }

    escaped
}
