//! Formatting of rule message templates.
//!
//! Templates use printf-style positional placeholders: `%1` is always the
//! subject label (the property key, unless the rule overrides it) and `%2`
//! onward bind, in order, to the extra arguments a failing rule supplied with
//! its verdict. `%%` is a literal percent sign.

use serde_json::Value;

/// Formats a message template against a subject label and extra arguments.
///
/// A placeholder with no corresponding argument renders as the empty string;
/// a `%` not followed by a digit or another `%` is kept verbatim.
pub(crate) fn format(template: &str, subject: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(d) if d.is_ascii_digit() => {
                let mut index = 0usize;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    index = index * 10 + d as usize;
                    chars.next();
                }

                match index {
                    0 => {}
                    1 => out.push_str(subject),
                    n => {
                        if let Some(arg) = args.get(n - 2) {
                            out.push_str(&display(arg));
                        }
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

/// Renders a format argument for interpolation into a message.
///
/// Strings render bare, without surrounding quotes; everything else renders
/// as its JSON representation.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
