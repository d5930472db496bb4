//! Signed reset-token issuance and verification.

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use contactly_core::config::auth::AuthConfig;
use contactly_core::error::AppError;
use contactly_core::traits::Clock;

use super::claims::ResetClaims;

/// Issues and verifies time-limited, tamper-evident reset tokens.
///
/// Signing uses HMAC-SHA256 with the process-wide secret, which is
/// read-only after startup. Issuance timestamps come from the injected
/// clock so expiry behavior is testable.
pub struct ResetTokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Reset token TTL in minutes.
    ttl_minutes: i64,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ResetTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetTokenIssuer")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl ResetTokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        // Signature and claim shape are checked by jsonwebtoken; expiry is
        // checked against the injected clock in `verify`, so the library's
        // system-time exp validation stays off.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl_minutes: config.reset_ttl_minutes as i64,
            clock,
        }
    }

    /// Issues a signed reset token carrying the user's identity.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AppError> {
        let now = self.clock.now();
        let exp = now + Duration::minutes(self.ttl_minutes);

        let claims = ResetClaims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode reset token: {e}")))
    }

    /// Verifies a reset token and returns its claims.
    ///
    /// Malformed, tampered, and expired tokens all fail identically so the
    /// caller leaks nothing about which check tripped.
    pub fn verify(&self, token: &str) -> Result<ResetClaims, AppError> {
        let claims = decode::<ResetClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::unauthorized("Token is expired or invalid"))?;

        if claims.exp < self.clock.now().timestamp() {
            return Err(AppError::unauthorized("Token is expired or invalid"));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use contactly_core::traits::SystemClock;

    #[derive(Debug)]
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = ResetTokenIssuer::new(&config(), Arc::new(SystemClock));
        let user_id = Uuid::new_v4();

        let token = issuer.issue(user_id, "a@x.com").expect("issue");
        let claims = issuer.verify(&token).expect("verify");

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 5 * 60);
    }

    #[test]
    fn test_expired_token_rejected() {
        // Five minute TTL, verified ten minutes after issuance.
        let issued_at = Utc::now();
        let issuer = ResetTokenIssuer::new(&config(), Arc::new(FixedClock(issued_at)));
        let token = issuer.issue(Uuid::new_v4(), "a@x.com").expect("issue");

        let later = Arc::new(FixedClock(issued_at + Duration::minutes(10)));
        let verifier = ResetTokenIssuer::new(&config(), later);
        let err = verifier.verify(&token).unwrap_err();
        assert_eq!(err.message, "Token is expired or invalid");
    }

    #[test]
    fn test_expiry_follows_injected_clock_not_system_time() {
        // A token that is fresh by the wall clock must still be rejected
        // when the verifying clock sits past its expiry.
        let issued_at = Utc::now();
        let issuer = ResetTokenIssuer::new(&config(), Arc::new(FixedClock(issued_at)));
        let token = issuer.issue(Uuid::new_v4(), "a@x.com").expect("issue");

        let just_inside = Arc::new(FixedClock(issued_at + Duration::minutes(4)));
        assert!(
            ResetTokenIssuer::new(&config(), just_inside)
                .verify(&token)
                .is_ok()
        );

        let just_past = Arc::new(FixedClock(issued_at + Duration::minutes(6)));
        assert!(
            ResetTokenIssuer::new(&config(), just_past)
                .verify(&token)
                .is_err()
        );
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let issuer = ResetTokenIssuer::new(&config(), Arc::new(SystemClock));
        let token = issuer.issue(Uuid::new_v4(), "a@x.com").expect("issue");

        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        parts[1] = base64::Engine::encode(
            &base64::engine::general_purpose::URL_SAFE_NO_PAD,
            br#"{"sub":"00000000-0000-0000-0000-000000000000","email":"evil@x.com","iat":0,"exp":9999999999}"#,
        );
        assert!(issuer.verify(&parts.join(".")).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = ResetTokenIssuer::new(&config(), Arc::new(SystemClock));
        let token = issuer.issue(Uuid::new_v4(), "a@x.com").expect("issue");

        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..AuthConfig::default()
        };
        let verifier = ResetTokenIssuer::new(&other, Arc::new(SystemClock));
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = ResetTokenIssuer::new(&config(), Arc::new(SystemClock));
        assert!(issuer.verify("not-a-jwt").is_err());
        assert!(issuer.verify("").is_err());
    }
}
