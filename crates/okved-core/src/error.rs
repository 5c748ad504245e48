use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("phone number contains no digits")]
    NoDigits,
    #[error("could not normalize phone number")]
    UnrecognizedFormat,
    #[error("expected a mobile number starting with 9")]
    NotMobile,
    #[error("okved candidate list is empty")]
    EmptyCandidates,
}
