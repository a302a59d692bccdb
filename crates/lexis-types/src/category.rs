use std::fmt;

use serde::{Deserialize, Serialize};

/// Category tag of a vocabulary entry.
///
/// Kept open: any label is accepted, the associated constants are only the
/// ones reports know how to order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const ACADEMIC: &'static str = "ACADEMIC";
    pub const BUSINESS: &'static str = "BUSINESS";
    pub const EXAM_SPECIFIC: &'static str = "EXAM_SPECIFIC";
    pub const EVERYDAY: &'static str = "EVERYDAY";
    pub const GRAMMAR_FOCUSED: &'static str = "GRAMMAR_FOCUSED";

    /// Known labels in report order
    pub const KNOWN: [&'static str; 5] = [
        Self::ACADEMIC,
        Self::BUSINESS,
        Self::EXAM_SPECIFIC,
        Self::EVERYDAY,
        Self::GRAMMAR_FOCUSED,
    ];

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn academic() -> Self {
        Self::new(Self::ACADEMIC)
    }

    pub fn business() -> Self {
        Self::new(Self::BUSINESS)
    }

    pub fn exam_specific() -> Self {
        Self::new(Self::EXAM_SPECIFIC)
    }

    pub fn everyday() -> Self {
        Self::new(Self::EVERYDAY)
    }

    pub fn grammar_focused() -> Self {
        Self::new(Self::GRAMMAR_FOCUSED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    /// Position in the report order, `None` for labels outside the known set
    pub fn known_rank(&self) -> Option<usize> {
        Self::KNOWN.iter().position(|known| *known == self.0)
    }

    /// Human label used in summaries
    pub fn display_name(&self) -> &str {
        match self.0.as_str() {
            Self::ACADEMIC => "Academic",
            Self::BUSINESS => "Business",
            Self::EXAM_SPECIFIC => "Exam-specific",
            Self::EVERYDAY => "Everyday",
            Self::GRAMMAR_FOCUSED => "Grammar-focused",
            other => other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}
