use serde::{Deserialize, Serialize};

fn default_required() -> bool {
    true
}

/// Literal find/replace pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchRule {
    pub find: String,
    pub replace: String,
    /// Fail the file when `find` does not occur
    #[serde(default = "default_required")]
    pub required: bool,
}

impl PatchRule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            required: default_required(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Ordered rules applied to every target file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSet {
    #[serde(default)]
    pub rules: Vec<PatchRule>,
}

impl PatchSet {
    pub fn new(rules: Vec<PatchRule>) -> Self {
        Self { rules }
    }
}
