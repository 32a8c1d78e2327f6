use crate::errors;
use std::collections::VecDeque;

/// Splits a command line into tokens, respecting spaces inside double quotes.
///
/// Quotes are kept on their token so the parser can tell a quoted name from a
/// bare identifier.
///
/// # Arguments
/// * `line` - The raw command line to split.
///
/// # Returns
/// A `Result` containing a `VecDeque<String>` of tokens or an `errors::Error` if a quote is
/// left open.
pub fn tokenize(line: &str) -> Result<VecDeque<String>, errors::Error> {
    let mut result = VecDeque::new();
    let mut current = String::new();
    let mut inside_text = false;

    for c in line.chars() {
        match c {
            '"' => {
                inside_text = !inside_text;
                current.push(c);
            }
            c if c.is_whitespace() && !inside_text => {
                if !current.is_empty() {
                    result.push_back(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if inside_text {
        return Err(errors::Error::Syntax("Unclosed name literal.".to_owned()));
    }
    if !current.is_empty() {
        result.push_back(current);
    }

    Ok(result)
}
