// ABOUTME: Workout-of-the-day template model
// ABOUTME: Immutable AMRAP / EMOM / For Time templates with a duration label and movement lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use std::fmt;

use serde::{Deserialize, Serialize};

/// Timing format of a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WodKind {
    /// As many rounds/reps as possible within a time cap
    #[serde(rename = "AMRAP", alias = "amrap")]
    Amrap,
    /// Every minute on the minute
    #[serde(rename = "EMOM", alias = "emom")]
    Emom,
    /// Complete the work as fast as possible
    #[serde(rename = "For Time", alias = "for_time", alias = "ForTime")]
    ForTime,
}

impl fmt::Display for WodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Amrap => "AMRAP",
            Self::Emom => "EMOM",
            Self::ForTime => "For Time",
        })
    }
}

/// A workout template from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WodTemplate {
    /// Timing format
    #[serde(rename = "type")]
    pub kind: WodKind,
    /// Free-form duration label, e.g. "20 min"
    pub duration: String,
    /// Movement lines in the order they are performed
    pub movements: Vec<String>,
}

impl WodTemplate {
    /// Build a template from borrowed movement lines
    #[must_use]
    pub fn new(kind: WodKind, duration: impl Into<String>, movements: &[&str]) -> Self {
        Self {
            kind,
            duration: duration.into(),
            movements: movements.iter().map(|m| (*m).to_owned()).collect(),
        }
    }

    /// Heading line, e.g. "AMRAP 20 min"
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.kind, self.duration)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_template_json_shape() {
        let json = r#"{"type":"For Time","duration":"21-15-9","movements":["Thrusters","Pull-ups"]}"#;
        let template: WodTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.kind, WodKind::ForTime);
        assert_eq!(template.title(), "For Time 21-15-9");
        assert_eq!(template.movements.len(), 2);
    }
}
