//! Identity port: resolves who is calling.

use std::future::Future;

use registrar_domain::identity::{Credentials, Verification};

/// Maps the credentials presented by a request to a [`Verification`].
///
/// Implementations never fail: anything they cannot verify is reported as
/// [`Verification::rejected`].
pub trait IdentityVerifier {
    fn verify(&self, credentials: Credentials) -> impl Future<Output = Verification> + Send;
}
