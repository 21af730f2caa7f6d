use std::fmt;

/// Returned when a variant key such as `"danger"` or `"lg"` does not name
/// any value of the target enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    /// Which enum was being parsed, e.g. `"button variant"`.
    pub kind: &'static str,
    pub key: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.key)
    }
}

impl std::error::Error for UnknownVariant {}
