//! Terminal and JSON rendering for audit reports.
//!
//! The meter and colors live here, on the presentation side; the report
//! itself stays plain data.

use pwd_audit::{AuditReport, BreachStatus};
use std::path::Path;

const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";
const GREEN: &str = "\x1b[92m";
const RESET: &str = "\x1b[0m";

/// Builds the five-segment color-coded strength meter.
pub fn strength_meter(score: u8) -> String {
    let filled = usize::from(score.min(5));
    let meter = format!("[{}{}]", "█".repeat(filled), " ".repeat(5 - filled));

    let color = match score {
        0..=2 => RED,
        3..=4 => YELLOW,
        _ => GREEN,
    };

    format!("{}{}{}", color, meter, RESET)
}

pub fn print_report(report: &AuditReport) {
    println!("\n=== Audit Report ===");
    println!(
        "Strength Meter: {} ({}/5)",
        strength_meter(report.strength.score),
        report.strength.score
    );

    if !report.strength.issues.is_empty() {
        println!("Issues:");
        for issue in &report.strength.issues {
            println!("  - {}", issue);
        }
    }

    let breach_line = match report.breach {
        BreachStatus::Count(0) => "Not found in known breaches".to_string(),
        BreachStatus::Count(n) => format!("Exposed in {} breaches", n),
        BreachStatus::LookupFailed => "Unknown (breach lookup failed)".to_string(),
    };
    println!("\nBreach Status: {}", breach_line);
    println!(
        "Dictionary Status: {}",
        if report.in_dictionary {
            "Found in common wordlists"
        } else {
            "Not in common wordlists"
        }
    );
    println!(
        "Policy Compliance: {}",
        if report.policy_compliant {
            "Compliant"
        } else {
            "Non-compliant"
        }
    );

    println!("\nRecommendations:");
    for rec in &report.recommendations {
        println!("  - {}", rec);
    }
}

/// Writes the report as pretty-printed JSON to `output`, or to stdout when
/// no path is given. The meter string is a terminal concern and never
/// appears in the JSON artifact.
pub fn write_json(report: &AuditReport, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!("\nJSON report saved to {}", path.display());
        }
        None => {
            println!("\nJSON Report:");
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwd_audit::{Issue, StrengthReport};

    fn sample_report() -> AuditReport {
        AuditReport {
            strength: StrengthReport {
                score: 3,
                issues: vec![Issue::WeakPattern],
            },
            breach: BreachStatus::Count(0),
            in_dictionary: false,
            policy_compliant: false,
            recommendations: vec!["Password doesn't meet security policy requirements".to_string()],
        }
    }

    #[test]
    fn test_meter_fills_to_score() {
        let meter = strength_meter(3);
        assert!(meter.contains("[███  ]"));
        assert!(meter.starts_with(YELLOW));
    }

    #[test]
    fn test_meter_color_bands() {
        assert!(strength_meter(0).starts_with(RED));
        assert!(strength_meter(2).starts_with(RED));
        assert!(strength_meter(4).starts_with(YELLOW));
        assert!(strength_meter(5).starts_with(GREEN));
    }

    #[test]
    fn test_meter_clamps_oversized_score() {
        assert!(strength_meter(9).contains("[█████]"));
    }

    #[test]
    fn test_json_artifact_has_no_meter_or_colors() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        write_json(&sample_report(), Some(temp.path())).unwrap();

        let written = std::fs::read_to_string(temp.path()).unwrap();
        assert!(!written.contains('█'));
        assert!(!written.contains("\x1b["));

        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["strength"]["score"], 3);
        assert_eq!(parsed["recommendations"][0], sample_report().recommendations[0]);
    }
}
