//! Password auditor - aggregates the four checks into one report.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use crate::checks::{BreachClient, check_dictionary, check_policy, evaluate_strength};
use crate::types::{AuditReport, BreachStatus, PolicyThresholds};

/// Runs a full audit of a single candidate password.
///
/// The auditor owns the collaborators the checks need: the breach client,
/// an optional wordlist path, the policy thresholds and the evaluation year
/// (fed to the weak-pattern check; the embedder owns the clock).
///
/// # Example
/// ```rust,no_run
/// use pwd_audit::Auditor;
/// use secrecy::SecretString;
///
/// # async fn run() {
/// let auditor = Auditor::new(2024).with_wordlist("rockyou.txt");
/// let password = SecretString::new("MyP@ssw0rd!".to_string().into());
/// let report = auditor.audit(&password, None).await;
/// println!("score: {}/5", report.strength.score);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Auditor {
    breach: BreachClient,
    wordlist: Option<PathBuf>,
    thresholds: PolicyThresholds,
    year: i32,
}

impl Auditor {
    pub fn new(year: i32) -> Self {
        Self {
            breach: BreachClient::new(),
            wordlist: None,
            thresholds: PolicyThresholds::default(),
            year,
        }
    }

    pub fn with_wordlist(mut self, path: impl Into<PathBuf>) -> Self {
        self.wordlist = Some(path.into());
        self
    }

    pub fn with_thresholds(mut self, thresholds: PolicyThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_breach_client(mut self, client: BreachClient) -> Self {
        self.breach = client;
        self
    }

    /// Audits a password and assembles the consolidated report.
    ///
    /// Never fails: check-level problems (unreachable breach service,
    /// missing wordlist) are encoded in the report fields. Cancelling the
    /// token abandons an in-flight breach lookup as `LookupFailed` without
    /// touching the locally computed results.
    pub async fn audit(
        &self,
        password: &SecretString,
        token: Option<CancellationToken>,
    ) -> AuditReport {
        tracing::debug!("password audit started");

        let strength = evaluate_strength(password, self.year);

        let in_dictionary = match &self.wordlist {
            Some(path) => check_dictionary(password, path),
            None => {
                tracing::debug!("no wordlist configured, skipping dictionary check");
                false
            }
        };

        let length = password.expose_secret().chars().count();
        let policy_compliant = check_policy(&strength, length, &self.thresholds);

        let breach = match token {
            Some(t) if t.is_cancelled() => {
                tracing::warn!("audit cancelled, skipping breach lookup");
                BreachStatus::LookupFailed
            }
            Some(t) => {
                tokio::select! {
                    _ = t.cancelled() => {
                        tracing::warn!("audit cancelled, abandoning breach lookup");
                        BreachStatus::LookupFailed
                    }
                    status = self.breach.check(password) => status,
                }
            }
            None => self.breach.check(password).await,
        };

        let recommendations = derive_recommendations(&breach, in_dictionary, policy_compliant);

        AuditReport {
            strength,
            breach,
            in_dictionary,
            policy_compliant,
            recommendations,
        }
    }
}

/// Derives advice lines in fixed priority order: breach exposure first,
/// then dictionary membership, then policy. Each condition is checked
/// independently; the all-clear line appears only when none triggered.
fn derive_recommendations(
    breach: &BreachStatus,
    in_dictionary: bool,
    policy_compliant: bool,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let BreachStatus::Count(n) = breach {
        if *n > 0 {
            recommendations.push(format!(
                "Password found in {} breaches - change immediately!",
                n
            ));
        }
    }

    if in_dictionary {
        recommendations
            .push("Password is in common wordlists - choose something more unique".to_string());
    }

    if !policy_compliant {
        recommendations.push("Password doesn't meet security policy requirements".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Password meets basic security standards".to_string());
    }

    recommendations
}
