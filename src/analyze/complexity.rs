//! Line and branch-keyword counting.
//!
//! "Cyclomatic factors" is a raw keyword occurrence count over the whole
//! text, not a control-flow-graph computation. Keywords inside strings and
//! comments count like code.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Branch keywords counted toward the complexity estimate.
    static ref BRANCH_KEYWORDS: Regex = Regex::new(r"(?:if|for|while|case|catch)").unwrap();
}

/// Complexity bucket for a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplexityLevel::Low => write!(f, "Low"),
            ComplexityLevel::Medium => write!(f, "Medium"),
            ComplexityLevel::High => write!(f, "High"),
        }
    }
}

/// Complexity estimate: bucket plus the two raw counts behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complexity {
    pub level: ComplexityLevel,
    pub lines: usize,
    pub cyclomatic_factors: usize,
}

/// Estimate complexity from line count and branch-keyword occurrences.
///
/// Later threshold wins when both match: Medium at lines > 100 or
/// factors > 10, High at lines > 300 or factors > 20.
pub fn estimate_complexity(code: &str) -> Complexity {
    let lines = code.split('\n').count();
    let cyclomatic_factors = BRANCH_KEYWORDS.find_iter(code).count();

    let mut level = ComplexityLevel::Low;
    if lines > 100 || cyclomatic_factors > 10 {
        level = ComplexityLevel::Medium;
    }
    if lines > 300 || cyclomatic_factors > 20 {
        level = ComplexityLevel::High;
    }

    Complexity {
        level,
        lines,
        cyclomatic_factors,
    }
}
