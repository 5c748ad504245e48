use crate::rules::MatchResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResultDto {
    pub normalized_phone: String,
    pub okved_code: String,
    pub okved_name: String,
    pub match_length: usize,
    pub fallback_used: bool,
}

impl From<&MatchResult> for MatchResultDto {
    fn from(result: &MatchResult) -> Self {
        Self {
            normalized_phone: result.normalized_phone.clone(),
            okved_code: result.entry.code().to_string(),
            okved_name: result.entry.name().to_string(),
            match_length: result.match_length,
            fallback_used: result.fallback_used,
        }
    }
}
