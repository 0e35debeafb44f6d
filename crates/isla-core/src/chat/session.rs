//! Chat session identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One correlation key per application launch.
///
/// Generated locally; there is no server-issued identity. The session is
/// passed explicitly to everything that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Random opaque identifier (UUID v4)
    pub id: String,
    /// When the session was started (ISO 8601 format)
    pub started_at: String,
}

impl ChatSession {
    /// Starts a new session with a fresh random ID.
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_unique() {
        let a = ChatSession::start();
        let b = ChatSession::start();
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }
}
