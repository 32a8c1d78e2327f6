use crate::errors::Error;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of decimal digits in every identifier.
pub const UFID_DIGITS: usize = 8;

/// An 8-digit decimal identifier.
///
/// The original text is kept (leading zeros included) so it can be printed back
/// verbatim, while ordering and equality use the numeric value.
#[derive(Debug, Clone)]
pub struct Ufid {
    text: heapless::String<UFID_DIGITS>,
    key: u32,
}

impl Ufid {
    /// Returns the numeric value used for ordering.
    pub fn key(&self) -> u32 {
        self.key
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl FromStr for Ufid {
    type Err = Error;

    /// Parses an identifier, accepting exactly eight ASCII digits.
    ///
    /// # Errors
    /// Returns `Error::Validation` for any other input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != UFID_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err!(
                Validation,
                "Identifier '{}' must be exactly {} digits",
                s,
                UFID_DIGITS
            ));
        }
        let mut text = heapless::String::new();
        text.push_str(s)
            .map_err(|_| err!(Validation, "Identifier '{}' is too long", s))?;
        let key = s.parse::<u32>()?;
        Ok(Ufid { text, key })
    }
}

impl PartialEq for Ufid {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ufid {}

impl PartialOrd for Ufid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ufid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Ufid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
