//! Causation links: directed, heuristic "likely caused" edges between events.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::EventId;

/// Which detector rule produced a link.
///
/// Temporal precedence is a precondition for every rule, not a link type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Threshold,
    Correlation,
    Direct,
}

impl LinkType {
    pub const ALL: [LinkType; 3] = [Self::Threshold, Self::Correlation, Self::Direct];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::Correlation => "correlation",
            Self::Direct => "direct",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "threshold" => Some(Self::Threshold),
            "correlation" => Some(Self::Correlation),
            "direct" => Some(Self::Direct),
            _ => None,
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge `from → to` with the rule's confidence and rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausationLink {
    pub from: EventId,
    pub to: EventId,
    pub link_type: LinkType,
    /// Confidence in [0, 1], fixed per rule.
    pub strength: f64,
    /// Human-readable rationale.
    pub explanation: String,
    /// Metric names implicated.
    pub metrics_involved: Vec<String>,
}
