//! Verification code generation.

use std::fmt;

use uuid::Uuid;

/// An opaque, globally-unique, lexically-sortable verification token.
///
/// Used as the default proof value whenever the caller does not supply their
/// own code. Generated fresh per call, never reused.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Generate a fresh code. UUID v7 in simple form: 32 lowercase hex
    /// characters, time-ordered, so codes sort lexically by creation time.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let a = VerificationCode::generate();
        let b = VerificationCode::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn codes_are_lexically_ordered_by_generation() {
        let a = VerificationCode::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = VerificationCode::generate();
        assert!(a < b);
    }

    #[test]
    fn codes_are_plain_lowercase_hex() {
        let code = VerificationCode::generate();
        assert_eq!(code.as_str().len(), 32);
        assert!(code
            .as_str()
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
