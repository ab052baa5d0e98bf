//! Dictionary check - tests membership in a wordlist of known-weak passwords.

use secrecy::SecretString;
use std::path::Path;

use crate::wordlist::Wordlist;

/// Checks whether the password appears verbatim in the wordlist at `path`.
///
/// An unavailable wordlist never fails the audit: the I/O problem is logged
/// once at error level and the check reports `false`. Operators must read
/// the log to tell a missing resource from a genuine miss; the report value
/// alone cannot distinguish them.
///
/// Callers that audit repeatedly against the same file can load a
/// [`Wordlist`] themselves and call [`Wordlist::contains`] directly.
pub fn check_dictionary(password: &SecretString, path: &Path) -> bool {
    match Wordlist::load(path) {
        Ok(wordlist) => wordlist.contains(password),
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "dictionary check unavailable");
            false
        }
    }
}
