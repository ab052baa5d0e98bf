//! Password security audit library
//!
//! This library audits a single candidate password against four independent
//! signals - structural strength, known-breach exposure (via a k-anonymity
//! range query), dictionary membership and policy compliance - and
//! assembles them into one consolidated report with recommendations.
//!
//! The password travels as a [`secrecy::SecretString`] and is never logged,
//! stored or included in the report. Only the first five characters of its
//! SHA-1 digest ever leave the process.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{Auditor, PolicyThresholds};
//! use secrecy::SecretString;
//!
//! # async fn run() {
//! let auditor = Auditor::new(2024)
//!     .with_wordlist("rockyou.txt")
//!     .with_thresholds(PolicyThresholds::default());
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = auditor.audit(&password, None).await;
//!
//! println!("Score: {}/5", report.strength.score);
//! for rec in &report.recommendations {
//!     println!("- {}", rec);
//! }
//! # }
//! ```

// Internal modules
mod audit;
mod checks;
mod types;
mod wordlist;

// Public API
pub use audit::Auditor;
pub use checks::{BreachClient, check_dictionary, check_policy, evaluate_strength};
pub use types::{AuditReport, BreachStatus, Issue, PolicyThresholds, StrengthReport};
pub use wordlist::{Wordlist, WordlistError};
