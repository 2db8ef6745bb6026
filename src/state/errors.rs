//! Field-scoped and form-level error messages

use std::collections::BTreeMap;

/// What an error message is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Name,
    Email,
    Phone,
    Cv,
    /// Submission-level error not attributable to one field
    Form,
}

impl ErrorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Cv => "cv",
            Self::Form => "form",
        }
    }
}

/// Error messages keyed by field. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<ErrorKey, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.entries.insert(key, message.into());
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn clear(&mut self, key: ErrorKey) {
        self.entries.remove(&key);
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(ErrorKey, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (ErrorKey, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
