//! Report types produced by the audit pipeline.
//!
//! Everything here is a plain value: created once per audit, serializable
//! with stable keys, and free of the candidate password itself.

use serde::Serialize;
use std::fmt;

/// A structural weakness found by the strength check.
///
/// Issues are appended in a fixed order (length, then the four character
/// classes, then weak patterns) so report output is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    TooShort,
    NoUppercase,
    NoLowercase,
    NoDigit,
    NoSymbol,
    WeakPattern,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Issue::TooShort => "Too short (<12 characters)",
            Issue::NoUppercase => "No uppercase letters",
            Issue::NoLowercase => "No lowercase letters",
            Issue::NoDigit => "No numbers",
            Issue::NoSymbol => "No special characters",
            Issue::WeakPattern => "Contains weak pattern",
        };
        f.write_str(msg)
    }
}

/// Structural strength of a password on a 0-5 scale.
///
/// A high score and a non-empty issue list can coexist: the weak-pattern
/// penalty is applied after complexity credit, so `issues` records every
/// finding even when the score stays up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    /// Score clamped to `0..=5`.
    pub score: u8,
    pub issues: Vec<Issue>,
}

/// Outcome of the breach-database lookup.
///
/// `Count(0)` means the password was checked and is clean. `LookupFailed`
/// means the service could not be consulted; the two are never conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreachStatus {
    /// Number of known breach occurrences; 0 = not found.
    Count(u64),
    /// Network/service error; the audit continues without breach data.
    LookupFailed,
}

impl BreachStatus {
    /// True only for a confirmed non-zero breach count.
    pub fn is_breached(&self) -> bool {
        matches!(self, BreachStatus::Count(n) if *n > 0)
    }
}

/// Thresholds for the policy gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyThresholds {
    pub min_length: usize,
    pub min_score: u8,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self {
            min_length: 12,
            min_score: 4,
        }
    }
}

/// Consolidated audit outcome.
///
/// Assembled once per audit and immutable afterwards. Never contains the
/// audited password; partial failures are encoded in the field values
/// (`BreachStatus::LookupFailed`) rather than surfaced as errors.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub strength: StrengthReport,
    pub breach: BreachStatus,
    pub in_dictionary: bool,
    pub policy_compliant: bool,
    /// Human-readable advice in priority order.
    pub recommendations: Vec<String>,
}
