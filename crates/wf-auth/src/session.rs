//! Cookie sessions

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::permissions::CurrentUser;

const SESSION_ID_LENGTH: usize = 64;

/// Session data
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub user: CurrentUser,
    pub created_at: DateTime<Utc>,
    pub accessed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: CurrentUser, lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: generate_session_id(),
            user,
            created_at: now,
            accessed_at: now,
            expires_at: now + lifetime,
        }
    }

    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }

    pub fn touch(&mut self) {
        self.accessed_at = Utc::now();
    }
}

/// Generate a random alphanumeric session id
pub fn generate_session_id() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    let mut rng = rand::rng();
    (0..SESSION_ID_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Session store trait for different backends
pub trait SessionStore: Send + Sync {
    /// A live session. Expired sessions read as absent.
    fn get(&self, session_id: &str) -> Option<Session>;

    fn set(&self, session: Session);

    fn delete(&self, session_id: &str);

    fn cleanup_expired(&self) -> usize;
}

/// In-memory session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session_id: &str) -> Option<Session> {
        let mut entry = self.sessions.get_mut(session_id)?;
        if !entry.is_valid() {
            drop(entry);
            self.sessions.remove(session_id);
            return None;
        }
        entry.touch();
        Some(entry.clone())
    }

    fn set(&self, session: Session) {
        self.sessions.insert(session.id.clone(), session);
    }

    fn delete(&self, session_id: &str) {
        self.sessions.remove(session_id);
    }

    fn cleanup_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.is_valid());
        before - self.sessions.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

/// Cookie configuration for sessions
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub path: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    /// Seconds
    pub max_age: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "wf_session".to_string(),
            path: "/".to_string(),
            secure: false,
            http_only: true,
            same_site: SameSite::Lax,
            max_age: Some(24 * 60 * 60),
        }
    }
}

impl CookieConfig {
    /// `Set-Cookie` value carrying `session_id`
    pub fn build_cookie(&self, session_id: &str) -> String {
        let mut parts = vec![
            format!("{}={}", self.name, session_id),
            format!("Path={}", self.path),
        ];

        if self.secure {
            parts.push("Secure".to_string());
        }
        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        parts.push(
            match self.same_site {
                SameSite::Strict => "SameSite=Strict",
                SameSite::Lax => "SameSite=Lax",
                SameSite::None => "SameSite=None",
            }
            .to_string(),
        );
        if let Some(max_age) = self.max_age {
            parts.push(format!("Max-Age={}", max_age));
        }

        parts.join("; ")
    }

    /// `Set-Cookie` value that makes the browser drop the session cookie
    pub fn build_clear_cookie(&self) -> String {
        format!("{}=; Path={}; Max-Age=0; HttpOnly", self.name, self.path)
    }
}

/// Extract session ID from a `Cookie` header
pub fn extract_session_id(cookie_header: &str, cookie_name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(name, _)| name.trim() == cookie_name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
