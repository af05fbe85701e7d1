//! Session/identity gate
//!
//! The identity provider backend is an external collaborator; this module
//! defines the value types and the async seam the rest of the crate sees.
//! The synchronizer never reads identity from ambient state — callers pass
//! the current `Identity` (or none, for guest mode) explicitly.

use async_trait::async_trait;
use thiserror::Error;

/// An authenticated identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque unique identifier assigned by the provider
    pub uid: String,

    /// Email address, when the provider supplies one
    pub email: Option<String>,
}

impl Identity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
        }
    }

    pub fn with_email(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: Some(email.into()),
        }
    }
}

/// Federated sign-in providers offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FederatedProvider {
    Google,
    Apple,
}

/// Identity operation failures, stripped of provider error-code noise
///
/// These messages are shown to the user verbatim; on any failure the
/// caller's state is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("An account with this email already exists")]
    EmailAlreadyInUse,

    #[error("Password is too weak; use at least 6 characters")]
    WeakPassword,

    #[error("Network error; check your connection and try again")]
    Network,

    #[error("Sign-in failed: {0}")]
    Provider(String),
}

impl AuthError {
    /// Map a raw provider error code to a user-presentable error
    ///
    /// Unknown codes keep their text in the `Provider` variant, minus the
    /// `auth/` prefix.
    pub fn from_provider_code(code: &str) -> Self {
        match code {
            "auth/invalid-credential" | "auth/user-not-found" | "auth/wrong-password" => {
                Self::InvalidCredentials
            }
            "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "auth/weak-password" => Self::WeakPassword,
            "auth/network-request-failed" => Self::Network,
            other => Self::Provider(other.strip_prefix("auth/").unwrap_or(other).to_string()),
        }
    }
}

/// The async operations an identity backend must supply
///
/// Every fallible operation either resolves with an established `Identity`
/// or fails with an `AuthError` and leaves the session unchanged.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Create an account with email and password
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Sign in through a federated provider
    async fn sign_in_federated(&self, provider: FederatedProvider) -> Result<Identity, AuthError>;

    /// End the current session
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The currently established identity, if any
    fn current(&self) -> Option<Identity>;
}
