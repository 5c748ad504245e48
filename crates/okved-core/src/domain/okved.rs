#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OkvedEntry {
    code: String,
    name: String,
    numeric_code: String,
}

impl OkvedEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        let code = code.into();
        let numeric_code = code.chars().filter(|ch| ch.is_ascii_digit()).collect();
        Self {
            code,
            name: name.into(),
            numeric_code,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Digits of the code with separators stripped, computed once at construction.
    pub fn numeric_code(&self) -> &str {
        &self.numeric_code
    }
}

#[cfg(test)]
mod tests {
    use super::OkvedEntry;

    #[test]
    fn numeric_code_strips_separators() {
        let entry = OkvedEntry::new("01.11.1", "Test");
        assert_eq!(entry.numeric_code(), "01111");
    }

    #[test]
    fn numeric_code_is_empty_for_digitless_codes() {
        let entry = OkvedEntry::new("-", "No digits");
        assert_eq!(entry.numeric_code(), "");
    }
}
