//! Causation rule tables: threshold boundaries, known consequences, and
//! direct component mappings.
//!
//! Loaded once when an engine is built and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Which way a value must move to cross a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Above,
    Below,
}

impl Direction {
    /// Above: `prev < boundary <= new`. Below: `prev > boundary >= new`.
    pub fn crossed(&self, prev: f64, new: f64, boundary: f64) -> bool {
        match self {
            Self::Above => prev < boundary && boundary <= new,
            Self::Below => prev > boundary && boundary >= new,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

/// A labelled boundary on one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub metric: String,
    pub label: String,
    pub boundary: f64,
    #[serde(default)]
    pub direction: Direction,
}

/// Keywords the effect event must mention for a crossing to count as causal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownConsequence {
    pub metric: String,
    pub label: String,
    pub keywords: Vec<String>,
}

/// A fixed "component A drives component B" rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMapping {
    pub from: String,
    pub to: String,
    pub explanation: String,
}

/// The full rule set, evaluated in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub thresholds: Vec<ThresholdRule>,
    pub consequences: Vec<KnownConsequence>,
    pub direct_mappings: Vec<DirectMapping>,
}

impl RulesConfig {
    /// A rule set with no rules at all.
    pub fn empty() -> Self {
        Self {
            thresholds: Vec::new(),
            consequences: Vec::new(),
            direct_mappings: Vec::new(),
        }
    }

    /// Keywords registered for `(metric, label)`, if any.
    pub fn consequence_keywords(&self, metric: &str, label: &str) -> Option<&[String]> {
        self.consequences
            .iter()
            .find(|c| c.metric == metric && c.label == label)
            .map(|c| c.keywords.as_slice())
    }

    /// Explanation for a `(from, to)` component pair, if mapped.
    pub fn direct_explanation(&self, from: &str, to: &str) -> Option<&str> {
        self.direct_mappings
            .iter()
            .find(|m| m.from == from && m.to == to)
            .map(|m| m.explanation.as_str())
    }
}

fn threshold(metric: &str, label: &str, boundary: f64, direction: Direction) -> ThresholdRule {
    ThresholdRule {
        metric: metric.to_string(),
        label: label.to_string(),
        boundary,
        direction,
    }
}

fn consequence(metric: &str, label: &str, keywords: &[&str]) -> KnownConsequence {
    KnownConsequence {
        metric: metric.to_string(),
        label: label.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn direct(from: &str, to: &str, explanation: &str) -> DirectMapping {
    DirectMapping {
        from: from.to_string(),
        to: to.to_string(),
        explanation: explanation.to_string(),
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        use Direction::{Above, Below};
        Self {
            thresholds: vec![
                threshold("modularity", "collapse", 0.3, Below),
                threshold("organism_count", "collapse", 500.0, Above),
                threshold("clustering_coefficient", "collapse", 0.5, Above),
                threshold("violation_pressure", "vp0", 0.25, Above),
                threshold("violation_pressure", "vp1", 0.50, Above),
                threshold("violation_pressure", "vp2", 0.75, Above),
                threshold("violation_pressure", "vp3", 0.99, Above),
                threshold("vp_calculations", "transition", 50.0, Above),
            ],
            consequences: vec![
                consequence("modularity", "collapse", &["is_collapsed", "collapse", "transition"]),
                consequence("organism_count", "collapse", &["is_collapsed", "collapse", "transition"]),
                consequence("violation_pressure", "vp0", &["vp_classification", "transition", "convergence"]),
                consequence("vp_calculations", "transition", &["phase", "transition", "mathematical_capability"]),
            ],
            direct_mappings: vec![
                direct("breath", "reality_sim", "Breath cycle drives network update"),
                direct("breath", "djinn_kernel", "Breath cycle drives VP calculation"),
                direct("reality_sim", "djinn_kernel", "Network metrics feed into VP calculation"),
                direct("explorer", "reality_sim", "Explorer phase affects network behavior"),
            ],
        }
    }
}
