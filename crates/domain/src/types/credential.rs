//! Bearer credential for the adoption directory
//!
//! A credential is obtained through the OAuth 2.0 client-credentials grant
//! and reused until it is about to expire. The stored expiry already has the
//! safety margin subtracted, so validity is a plain `now < expires_at`.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TOKEN_EXPIRY_MARGIN_SECS;
use crate::errors::{PetMatchError, Result};

/// Access token plus the instant after which it must not be used.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer token sent in the `Authorization` header
    pub token: String,

    /// Grant time plus `expires_in`, minus the safety margin
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// Build a credential from a token grant.
    ///
    /// # Arguments
    /// * `token` - The access token
    /// * `expires_in` - Lifetime in seconds reported by the token endpoint
    /// * `issued_at` - When the grant was received
    ///
    /// # Errors
    /// Returns `PetMatchError::Upstream` when `expires_in` does not fit a
    /// representable expiry instant.
    pub fn from_grant(token: String, expires_in: i64, issued_at: DateTime<Utc>) -> Result<Self> {
        let expires_at = Duration::try_seconds(expires_in)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .and_then(|at| at.checked_sub_signed(Duration::seconds(TOKEN_EXPIRY_MARGIN_SECS)))
            .ok_or_else(|| PetMatchError::Upstream(format!("invalid expires_in: {expires_in}")))?;
        Ok(Self { token, expires_at })
    }

    /// Whether the credential may still be used at `now`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Seconds left before the credential stops being reused.
    #[must_use]
    pub fn seconds_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Client credentials used to request a bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn issued() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn expiry_subtracts_margin() {
        let credential = Credential::from_grant("abc".to_string(), 3600, issued()).unwrap();

        assert_eq!(credential.expires_at, issued() + Duration::seconds(3540));
        assert_eq!(credential.seconds_until_expiry(issued()), 3540);
    }

    #[test]
    fn validity_is_strict_before_expiry() {
        let credential = Credential::from_grant("abc".to_string(), 3600, issued()).unwrap();

        assert!(credential.is_valid_at(issued() + Duration::seconds(3539)));
        assert!(!credential.is_valid_at(issued() + Duration::seconds(3540)));
        assert!(!credential.is_valid_at(issued() + Duration::seconds(7200)));
    }

    #[test]
    fn short_lived_grant_is_already_expired() {
        let credential = Credential::from_grant("abc".to_string(), 30, issued()).unwrap();
        assert!(!credential.is_valid_at(issued()));
    }

    #[test]
    fn out_of_range_lifetime_is_rejected() {
        for expires_in in [9_000_000_000_000_000, i64::MAX, i64::MIN] {
            let err = Credential::from_grant("abc".to_string(), expires_in, issued()).unwrap_err();
            assert!(matches!(err, PetMatchError::Upstream(ref msg) if msg.contains("expires_in")));
        }
    }

    #[test]
    fn debug_redacts_secrets() {
        let credential =
            Credential::from_grant("super-secret".to_string(), 3600, issued()).unwrap();
        let client =
            ClientCredentials { api_key: "key".to_string(), api_secret: "hush".to_string() };

        assert!(!format!("{credential:?}").contains("super-secret"));
        assert!(!format!("{client:?}").contains("hush"));
    }
}
