//! # registrar-adapter-auth-jwt
//!
//! [`IdentityVerifier`] backed by HS256 JSON Web Tokens.
//!
//! The token's `studentId` claim names the caller. Tokens that fail to
//! decode, carry a bad signature, are expired, or come from an unexpected
//! issuer are reported as [`Verification::rejected`]. A valid token without a
//! `studentId` claim is reported as successful but anonymous, and the
//! application layer refuses it.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use registrar_app::ports::IdentityVerifier;
use registrar_domain::identity::{Credentials, Verification};

/// Claims read from a bearer token.
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(rename = "studentId")]
    student_id: Option<String>,
}

/// Settings for [`JwtVerifier`].
pub struct Config {
    /// Shared HMAC secret used to sign tokens.
    pub secret: String,
    /// Expected `iss` claim, if tokens must come from a specific issuer.
    pub issuer: Option<String>,
}

impl Config {
    /// Build a verifier from this configuration.
    #[must_use]
    pub fn build(self) -> JwtVerifier {
        JwtVerifier::new(self.secret.as_bytes(), self.issuer.as_deref())
    }
}

/// Verifies HS256 bearer tokens.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Create a verifier for tokens signed with `secret`.
    #[must_use]
    pub fn new(secret: &[u8], issuer: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    fn check(&self, token: &str) -> Verification {
        match decode::<Claims>(token, &self.key, &self.validation) {
            Ok(data) => Verification {
                success: true,
                student_id: data.claims.student_id,
            },
            Err(err) => {
                tracing::debug!(error = %err, "bearer token rejected");
                Verification::rejected()
            }
        }
    }
}

impl IdentityVerifier for JwtVerifier {
    async fn verify(&self, credentials: Credentials) -> Verification {
        match credentials.token() {
            Some(token) => self.check(token),
            None => Verification::rejected(),
        }
    }
}
