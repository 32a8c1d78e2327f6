use crate::errors;
use crate::tree::Ufid;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAME_REGEX: Regex = Regex::new(r#"^[A-Za-z ]+$"#).unwrap();
    static ref ID_REGEX: Regex = Regex::new(r#"^[0-9]{8}$"#).unwrap();
}

/// Validates a record name: letters and spaces only.
///
/// # Arguments
/// * `name` - The unquoted name to validate.
///
/// # Returns
/// A `Result` containing the validated name or an `errors::Error`.
pub fn validate_name(name: &str) -> Result<String, errors::Error> {
    if name.is_empty() {
        return Err(errors::Error::Validation("Name cannot be empty.".to_owned()));
    }
    if NAME_REGEX.is_match(name) {
        Ok(name.to_string())
    } else {
        Err(errors::Error::Validation(format!(
            "Name ({}) must match regex {}.",
            name,
            NAME_REGEX.as_str()
        )))
    }
}

/// Validates an identifier: exactly eight decimal digits.
///
/// # Arguments
/// * `id` - The identifier text to validate.
///
/// # Returns
/// A `Result` containing the parsed `Ufid` or an `errors::Error`.
pub fn validate_id(id: &str) -> Result<Ufid, errors::Error> {
    if !ID_REGEX.is_match(id) {
        return Err(errors::Error::Validation(format!(
            "Identifier ({}) must match regex {}.",
            id,
            ID_REGEX.as_str()
        )));
    }
    id.parse()
}

/// Strips the surrounding double quotes from a name token.
///
/// # Arguments
/// * `token` - The token as produced by the tokenizer.
///
/// # Returns
/// A `Result` containing the text between the quotes or an `errors::Error`.
pub fn unquote(token: &str) -> Result<String, errors::Error> {
    match token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) if !inner.contains('"') => Ok(inner.to_string()),
        _ => Err(errors::Error::Syntax(format!(
            "Names must be enclosed in double quotes: {}.",
            token
        ))),
    }
}
