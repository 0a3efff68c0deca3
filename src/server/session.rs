//! Session helpers keeping handlers free of cookie plumbing

use crate::contract::CurrentUser;
use crate::server::error::ApiError;
use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

pub(crate) const USER_KEY: &str = "user";

/// Thin wrapper over the cookie session exposing user-level operations
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the logged-in user in the session cookie
    pub fn persist_user(&self, user: &CurrentUser) -> Result<(), ApiError> {
        self.0
            .insert(USER_KEY, user)
            .map_err(|error| ApiError::internal(format!("failed to persist session: {error}")))
    }

    /// Drop the session entirely
    pub fn clear(&self) {
        self.0.purge();
    }

    /// The logged-in user, if any. Decode failures are swallowed and
    /// reported as "no session" rather than surfacing an error.
    pub fn user(&self) -> Option<CurrentUser> {
        match self.0.get::<CurrentUser>(USER_KEY) {
            Ok(user) => user,
            Err(error) => {
                warn!(%error, "unreadable session cookie treated as anonymous");
                None
            }
        }
    }

    /// Require a logged-in user or answer with the fixed 401 object
    pub fn require_user(&self) -> Result<CurrentUser, ApiError> {
        self.user().ok_or_else(ApiError::unauthorized)
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

/// Session middleware configured for tests: fresh key, plain HTTP cookie
#[cfg(test)]
pub fn test_session_middleware(
) -> actix_session::SessionMiddleware<actix_session::storage::CookieSessionStore> {
    use actix_session::storage::CookieSessionStore;
    use actix_web::cookie::Key;

    actix_session::SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}
