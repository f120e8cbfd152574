use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single preparation instruction.
///
/// The id is the ordering and diffing key; two steps can carry identical
/// text, so identity is never derived from the description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    pub id: Uuid,
    pub description: String,
}

impl Step {
    /// An empty step, as appended when the user adds one.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            description: String::new(),
        }
    }

    pub fn with(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_new() {
        let step = Step::new();
        assert!(step.description.is_empty());
    }

    #[test]
    fn test_identical_text_distinct_identity() {
        let a = Step::with("Stir well");
        let b = Step::with("Stir well");
        assert_eq!(a.description, b.description);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_step_json_roundtrip() {
        let step = Step::with("Preheat the oven to 180 degrees.");
        let json = serde_json::to_string(&step).unwrap();
        let parsed: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(step, parsed);
    }
}
