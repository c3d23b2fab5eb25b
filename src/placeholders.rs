//! Named placeholder compilation
//!
//! Statements are written with `:name` placeholders; the MySQL protocol only
//! understands positional `?`. This module rewrites the text and lines up the
//! bound values in placeholder order.

use crate::errors::DataAccessError;
use std::collections::{HashMap, HashSet};
use type_mapping::{StatementParams, Value, is_placeholder_char};

/// Statement text with positional markers and the values to bind, in order
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub bindings: Vec<Value>,
}

/// Rewrite `:name` placeholders to `?` and collect their values from `params`.
///
/// Quoted strings, backtick identifiers and comments are copied untouched,
/// `::` is literal. A placeholder used twice binds its value twice.
/// Parameters that match no placeholder are ignored.
pub fn compile(query: &str, params: &StatementParams) -> Result<CompiledQuery, DataAccessError> {
    let lookup: HashMap<&str, &Value> = params
        .iter()
        .map(|(key, value)| (key.strip_prefix(':').unwrap_or(key), value))
        .collect();

    let chars: Vec<char> = query.chars().collect();
    let len = chars.len();
    let mut sql = String::with_capacity(query.len());
    let mut bindings = Vec::new();
    let mut used: HashSet<String> = HashSet::new();
    let mut i = 0;

    while i < len {
        let c = chars[i];
        match c {
            '\'' | '"' | '`' => {
                i = copy_quoted(&chars, i, &mut sql);
            }
            '-' if chars.get(i + 1) == Some(&'-')
                && chars.get(i + 2).is_none_or(|next| next.is_whitespace()) =>
            {
                i = copy_until(&chars, i, &mut sql, "\n");
            }
            '#' => {
                i = copy_until(&chars, i, &mut sql, "\n");
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i = copy_until(&chars, i, &mut sql, "*/");
            }
            '?' => {
                return Err(DataAccessError::invalid_query(
                    "positional '?' placeholders are not supported, use :name",
                ));
            }
            ':' if chars.get(i + 1) == Some(&':') => {
                sql.push_str("::");
                i += 2;
            }
            ':' if chars.get(i + 1).is_some_and(|next| is_placeholder_char(*next)) => {
                let start = i + 1;
                let mut end = start;
                while end < len && is_placeholder_char(chars[end]) {
                    end += 1;
                }
                let name: String = chars[start..end].iter().collect();
                let value = lookup.get(name.as_str()).ok_or_else(|| {
                    DataAccessError::invalid_query(format!(
                        "missing value for named parameter :{}",
                        name
                    ))
                })?;
                bindings.push((*value).clone());
                sql.push('?');
                used.insert(name);
                i = end;
            }
            _ => {
                sql.push(c);
                i += 1;
            }
        }
    }

    #[cfg(feature = "debug-logging")]
    for name in lookup.keys().filter(|name| !used.contains(**name)) {
        trace_log!("parameter :{} matches no placeholder and is ignored", name);
    }
    #[cfg(not(feature = "debug-logging"))]
    let _ = used;

    Ok(CompiledQuery { sql, bindings })
}

/// Copy a quoted run starting at `start` (the opening quote). Handles
/// backslash escapes in string literals and doubled quotes. Returns the
/// index just past the closing quote, or the end of input when unterminated.
fn copy_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
    let quote = chars[start];
    out.push(quote);
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;
        if c == '\\' && quote != '`' {
            if let Some(&escaped) = chars.get(i) {
                out.push(escaped);
                i += 1;
            }
            continue;
        }
        if c == quote {
            if chars.get(i) == Some(&quote) {
                out.push(quote);
                i += 1;
                continue;
            }
            break;
        }
    }
    i
}

/// Copy from `start` through the first occurrence of `terminator` (inclusive)
fn copy_until(chars: &[char], start: usize, out: &mut String, terminator: &str) -> usize {
    let term: Vec<char> = terminator.chars().collect();
    let mut i = start;
    while i < chars.len() {
        if chars[i..].starts_with(&term) {
            out.extend(&term);
            return i + term.len();
        }
        out.push(chars[i]);
        i += 1;
    }
    i
}
