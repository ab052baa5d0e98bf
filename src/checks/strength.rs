//! Strength check - scores password structure on a 0-5 scale.

use secrecy::{ExposeSecret, SecretString};

use crate::types::{Issue, StrengthReport};

const MIN_LENGTH: usize = 12;
const SYMBOLS: &str = "!@#$%^&*()";
const WEAK_PATTERNS: [&str; 5] = ["123456", "password", "qwerty", "admin", "welcome"];

/// Scores password structure and collects issues.
///
/// One point for length >= 12 and one per character class present
/// (uppercase, lowercase, digit, symbol from `!@#$%^&*()`), checked in that
/// order. Containing a weak pattern (the fixed set plus `year` as a string,
/// matched case-insensitively) costs two points, floored at zero.
///
/// `year` is the evaluation year; the caller owns the clock so results are
/// reproducible.
///
/// # Returns
/// A `StrengthReport` with the clamped score and issues in check order.
pub fn evaluate_strength(password: &SecretString, year: i32) -> StrengthReport {
    let pwd = password.expose_secret();
    let mut score: u8 = 0;
    let mut issues = Vec::new();

    if pwd.chars().count() < MIN_LENGTH {
        issues.push(Issue::TooShort);
    } else {
        score += 1;
    }

    let class_checks: [(fn(char) -> bool, Issue); 4] = [
        (|c| c.is_ascii_uppercase(), Issue::NoUppercase),
        (|c| c.is_ascii_lowercase(), Issue::NoLowercase),
        (|c| c.is_ascii_digit(), Issue::NoDigit),
        (|c| SYMBOLS.contains(c), Issue::NoSymbol),
    ];

    for (predicate, issue) in class_checks {
        if pwd.chars().any(predicate) {
            score += 1;
        } else {
            issues.push(issue);
        }
    }

    let lowered = pwd.to_lowercase();
    let year = year.to_string();
    let has_weak_pattern = WEAK_PATTERNS
        .iter()
        .copied()
        .chain(std::iter::once(year.as_str()))
        .any(|patt| lowered.contains(patt));

    if has_weak_pattern {
        issues.push(Issue::WeakPattern);
        score = score.saturating_sub(2);
    }

    StrengthReport {
        score: score.min(5),
        issues,
    }
}
