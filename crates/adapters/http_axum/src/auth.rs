//! Bearer credential extraction.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use registrar_domain::identity::Credentials;

/// Credentials presented by the request.
///
/// Never rejects: a missing or malformed `Authorization` header yields
/// anonymous credentials and the verifier decides.
pub struct Caller(pub Credentials);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(credentials(&parts.headers)))
    }
}

/// Read `Authorization: Bearer <token>`.
pub fn credentials(headers: &HeaderMap) -> Credentials {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .map_or_else(Credentials::anonymous, Credentials::bearer)
}
