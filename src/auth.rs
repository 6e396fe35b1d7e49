//! Identity provider seam.
//!
//! Sign-in is delegated entirely to an external identity provider; this
//! module owns the boundary types. The provider classifies its own failures
//! with an [`AuthErrorKind`]; anything it cannot classify surfaces as
//! [`ProviderError::Other`] and is handed back to the caller untouched
//! through [`SignInOutcome::Unhandled`]. No session or token state lives
//! here.

use async_trait::async_trait;
use thiserror::Error;

/// Classification tag a provider attaches to a recognized sign-in failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthErrorKind {
    /// The email/password pair was rejected
    CredentialsSignin,
    /// The OAuth flow could not be started
    OAuthSignin,
    /// The OAuth callback was rejected or malformed
    OAuthCallback,
    /// The provider refused access for this account
    AccessDenied,
    /// Provider-side misconfiguration
    Configuration,
}

/// Failure reported by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// A sign-in failure the provider classified
    #[error("sign-in failed: {kind:?}")]
    Auth {
        /// The provider's classification of the failure
        kind: AuthErrorKind,
    },
    /// Anything the provider could not classify (transport, outage, internal fault)
    #[error("identity provider error: {message}")]
    Other {
        /// Provider-supplied description
        message: String,
    },
}

/// Local credential pair from the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Plain-text password, forwarded to the provider as-is
    pub password: String,
}

/// One of the three supported sign-in flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInFlow {
    /// Email/password against the provider's credential store
    Credentials(Credentials),
    /// OAuth via GitHub
    GitHub {
        /// Where the provider should land the user afterwards
        redirect_to: String,
    },
    /// OAuth via Google
    Google {
        /// Where the provider should land the user afterwards
        redirect_to: String,
    },
}

/// External identity provider.
///
/// Implementations own credential verification, the OAuth dance, and session
/// issuance. `Ok(())` means the user is signed in and the caller may navigate.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Runs one sign-in flow to completion.
    async fn sign_in(&self, flow: SignInFlow) -> Result<(), ProviderError>;
}

/// Outcome of a sign-in attempt after provider errors have been shaped for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The provider accepted; navigate to the target path
    SignedIn {
        /// Post-sign-in destination
        redirect_to: String,
    },
    /// A recognized failure was handled; `message` is rendered inline, `None` renders nothing
    Rejected {
        /// Inline message for the sign-in form, if any
        message: Option<&'static str>,
    },
    /// An unclassified failure; the caller decides how to propagate it
    Unhandled(ProviderError),
}
