use crate::error::CoreError;
use serde::Serialize;

pub const COUNTRY_PREFIX: &str = "+7";

const DOMESTIC_LEN: usize = 10;
const FULL_LEN: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(CoreError::NoDigits);
        }

        let domestic = domestic_digits(&digits).ok_or(CoreError::UnrecognizedFormat)?;
        // Only reachable through the 11-digit branch: the 10-digit branch
        // already requires a leading 9.
        if !domestic.starts_with('9') {
            return Err(CoreError::NotMobile);
        }

        Ok(Self(format!("{}{}", COUNTRY_PREFIX, domestic)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Country code and subscriber digits, without the leading plus.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl std::fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn domestic_digits(digits: &str) -> Option<&str> {
    if digits.len() == FULL_LEN && (digits.starts_with('7') || digits.starts_with('8')) {
        return Some(&digits[1..]);
    }
    if digits.len() == DOMESTIC_LEN && digits.starts_with('9') {
        return Some(digits);
    }
    None
}
