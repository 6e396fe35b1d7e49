//! Sign-in actions.
//!
//! Thin pass-throughs to the external identity provider. The only logic here
//! is shaping recognized provider failures into the strings the sign-in form
//! displays. The credentials flow names its failures; the GitHub and Google
//! flows stay silent on recognized failures and simply leave the user on the
//! form. Unrecognized failures are never swallowed: they come back as
//! [`SignInOutcome::Unhandled`] for the caller to propagate.

use crate::{
    actions::DASHBOARD_PATH,
    auth::{AuthErrorKind, Credentials, IdentityProvider, ProviderError, SignInFlow, SignInOutcome},
};

const INVALID_CREDENTIALS: &str = "Invalid credentials.";
const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

/// Signs in with a local email/password pair.
pub async fn authenticate(
    provider: &dyn IdentityProvider,
    credentials: Credentials,
) -> SignInOutcome {
    match provider.sign_in(SignInFlow::Credentials(credentials)).await {
        Ok(()) => SignInOutcome::SignedIn {
            redirect_to: DASHBOARD_PATH.to_string(),
        },
        Err(ProviderError::Auth {
            kind: AuthErrorKind::CredentialsSignin,
        }) => SignInOutcome::Rejected {
            message: Some(INVALID_CREDENTIALS),
        },
        Err(ProviderError::Auth { .. }) => SignInOutcome::Rejected {
            message: Some(SOMETHING_WENT_WRONG),
        },
        Err(err) => SignInOutcome::Unhandled(err),
    }
}

/// Signs in via GitHub OAuth.
///
/// `redirect_to` comes from the form and falls back to the dashboard.
pub async fn sign_in_with_github(
    provider: &dyn IdentityProvider,
    redirect_to: Option<String>,
) -> SignInOutcome {
    let target = redirect_to.unwrap_or_else(|| DASHBOARD_PATH.to_string());
    match provider
        .sign_in(SignInFlow::GitHub {
            redirect_to: target.clone(),
        })
        .await
    {
        Ok(()) => SignInOutcome::SignedIn {
            redirect_to: target,
        },
        Err(ProviderError::Auth { .. }) => SignInOutcome::Rejected { message: None },
        Err(err) => SignInOutcome::Unhandled(err),
    }
}

/// Signs in via Google OAuth.
///
/// `redirect_to` comes from the form and falls back to the dashboard.
pub async fn sign_in_with_google(
    provider: &dyn IdentityProvider,
    redirect_to: Option<String>,
) -> SignInOutcome {
    let target = redirect_to.unwrap_or_else(|| DASHBOARD_PATH.to_string());
    match provider
        .sign_in(SignInFlow::Google {
            redirect_to: target.clone(),
        })
        .await
    {
        Ok(()) => SignInOutcome::SignedIn {
            redirect_to: target,
        },
        Err(ProviderError::Auth { .. }) => SignInOutcome::Rejected { message: None },
        Err(err) => SignInOutcome::Unhandled(err),
    }
}
