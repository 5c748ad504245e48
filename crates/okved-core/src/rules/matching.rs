use crate::domain::OkvedEntry;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub normalized_phone: String,
    pub entry: OkvedEntry,
    pub match_length: usize,
    pub fallback_used: bool,
}

pub fn find_match(
    normalized_phone: &str,
    entries: &[OkvedEntry],
) -> Result<MatchResult, CoreError> {
    let phone_digits: String = normalized_phone
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();
    let candidates: Vec<&OkvedEntry> = entries
        .iter()
        .filter(|entry| !entry.numeric_code().is_empty())
        .collect();

    if let Some(best) = best_suffix_match(&phone_digits, &candidates) {
        return Ok(MatchResult {
            normalized_phone: normalized_phone.to_string(),
            entry: best.clone(),
            match_length: best.numeric_code().len(),
            fallback_used: false,
        });
    }

    let fallback = fallback_entry(&phone_digits, &candidates)?;
    Ok(MatchResult {
        normalized_phone: normalized_phone.to_string(),
        entry: fallback.clone(),
        match_length: 0,
        fallback_used: true,
    })
}

// Strict comparison keeps the first candidate on equal length.
fn best_suffix_match<'a>(
    phone_digits: &str,
    candidates: &[&'a OkvedEntry],
) -> Option<&'a OkvedEntry> {
    let mut best: Option<&'a OkvedEntry> = None;
    let mut best_length = 0;
    for &entry in candidates {
        let code = entry.numeric_code();
        if phone_digits.ends_with(code) && code.len() > best_length {
            best = Some(entry);
            best_length = code.len();
        }
    }
    best
}

fn fallback_entry<'a>(
    phone_digits: &str,
    candidates: &[&'a OkvedEntry],
) -> Result<&'a OkvedEntry, CoreError> {
    if candidates.is_empty() {
        return Err(CoreError::EmptyCandidates);
    }
    let digit_sum: usize = phone_digits
        .bytes()
        .map(|byte| usize::from(byte - b'0'))
        .sum();
    let digit_sum = if digit_sum == 0 { 1 } else { digit_sum };
    Ok(candidates[digit_sum % candidates.len()])
}
