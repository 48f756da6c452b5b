//! Browser session registry
//!
//! Each browser gets a random session id in a cookie. The id maps to its own
//! `SessionState` behind an async mutex, so a session handles one action at
//! a time while different sessions proceed independently. Idle sessions are
//! evicted by the cache.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use moka::future::Cache;
use petmatch_core::SessionState;
use petmatch_domain::constants::SESSION_COOKIE_NAME;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Upper bound on live sessions.
const MAX_SESSIONS: u64 = 10_000;

pub type SharedSession = Arc<Mutex<SessionState>>;

/// A resolved session for the current request
pub struct Session {
    pub id: String,
    pub state: SharedSession,
    /// True when the id was minted for this request and must be set as a
    /// cookie on the response.
    pub is_new: bool,
}

impl Session {
    /// Short id prefix for log fields.
    pub fn log_id(&self) -> &str {
        short_id(&self.id)
    }

    /// Attach the session cookie to `response` when the session is new.
    pub fn attach(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if self.is_new {
            let cookie =
                format!("{SESSION_COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

/// Session id to state map with idle eviction
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<String, SharedSession>,
}

impl SessionStore {
    pub fn new(idle: Duration) -> Self {
        let cache = Cache::builder().max_capacity(MAX_SESSIONS).time_to_idle(idle).build();
        tracing::info!(
            idle_seconds = idle.as_secs(),
            max_sessions = MAX_SESSIONS,
            "Session store configured"
        );
        Self { cache }
    }

    /// Find the session named by the request cookie, or start a new one.
    ///
    /// Unknown, expired, or malformed ids get a fresh session.
    pub async fn resolve(&self, headers: &HeaderMap) -> Session {
        if let Some(id) = session_cookie(headers) {
            if let Some(state) = self.cache.get(&id).await {
                return Session { id, state, is_new: false };
            }
        }

        let id = Uuid::new_v4().to_string();
        let state = Arc::new(Mutex::new(SessionState::new()));
        self.cache.insert(id.clone(), Arc::clone(&state)).await;
        tracing::debug!(session = short_id(&id), "Session started");
        Session { id, state, is_new: true }
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Extract a well-formed session id from the `Cookie` headers.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
        .map(|id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie_headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn parses_session_cookie_among_others() {
        let id = Uuid::new_v4().to_string();
        let headers = cookie_headers(&format!("theme=dark; petmatch_session={id}; lang=en"));

        assert_eq!(session_cookie(&headers), Some(id));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(session_cookie(&cookie_headers("petmatch_session=../../etc")), None);
        assert_eq!(session_cookie(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn known_cookie_resumes_session() {
        let store = SessionStore::new(Duration::from_secs(60));
        let first = store.resolve(&HeaderMap::new()).await;
        assert!(first.is_new);
        first.state.lock().await.favorites_mut().add(petmatch_domain::PetRecord::new(1, "Rex"));

        let again = store.resolve(&cookie_headers(&format!("petmatch_session={}", first.id))).await;

        assert!(!again.is_new);
        assert_eq!(again.id, first.id);
        assert_eq!(again.state.lock().await.favorites().len(), 1);
    }

    #[tokio::test]
    async fn unknown_cookie_starts_new_session() {
        let store = SessionStore::new(Duration::from_secs(60));
        let stale = Uuid::new_v4().to_string();

        let session = store.resolve(&cookie_headers(&format!("petmatch_session={stale}"))).await;

        assert!(session.is_new);
        assert_ne!(session.id, stale);
    }

    #[test]
    fn new_sessions_set_cookie() {
        let session = Session {
            id: Uuid::new_v4().to_string(),
            state: Arc::new(Mutex::new(SessionState::new())),
            is_new: true,
        };

        let response = session.attach("ok");
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();

        assert!(cookie.starts_with("petmatch_session="));
        assert!(cookie.contains("HttpOnly"));
    }
}
