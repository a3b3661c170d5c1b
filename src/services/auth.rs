//! Admin session state
//!
//! The session token is an explicit value with an `Unauthenticated` variant,
//! held in a reactive context scoped to the running page. It is never written
//! to browser storage; closing the tab ends the session.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::auth::{login, Credentials};

/// The admin session, either absent or carrying a backend-issued token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionToken {
    #[default]
    Unauthenticated,
    Authenticated {
        token: String,
        issued_at: DateTime<Utc>,
    },
}

impl SessionToken {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionToken::Authenticated { .. })
    }
}

/// Reactive auth state provided at the application root.
#[derive(Clone, Copy)]
pub struct AuthSession {
    pub token: RwSignal<SessionToken>,
    pub is_authenticating: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(SessionToken::Unauthenticated),
            is_authenticating: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_authenticated()
    }

    pub fn sign_out(&self) {
        self.token.set(SessionToken::Unauthenticated);
        self.error.set(None);
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_auth_session() {
    provide_context(AuthSession::new());
}

pub fn use_auth_session() -> AuthSession {
    expect_context::<AuthSession>()
}

/// Exchange credentials for a session token via the backend; on success the
/// given callback runs (navigation lives with the caller).
pub fn login_action(session: AuthSession) -> impl Fn(Credentials, Callback<()>) + Clone {
    move |credentials: Credentials, on_success: Callback<()>| {
        spawn_local(async move {
            session.is_authenticating.set(true);
            session.error.set(None);

            match login(&credentials).await {
                Ok(response) => {
                    session.token.set(SessionToken::Authenticated {
                        token: response.token,
                        issued_at: Utc::now(),
                    });
                    on_success.run(());
                }
                Err(e) => {
                    log::warn!("admin login failed: {e}");
                    session.error.set(Some("Invalid credentials".to_string()));
                }
            }

            session.is_authenticating.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_unauthenticated() {
        assert!(!SessionToken::default().is_authenticated());
    }

    #[test]
    fn test_issued_token_is_authenticated() {
        let token = SessionToken::Authenticated {
            token: "abc".to_string(),
            issued_at: Utc::now(),
        };
        assert!(token.is_authenticated());
    }
}
