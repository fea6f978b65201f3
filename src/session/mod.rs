use std::collections::HashMap;
use std::sync::Mutex;

pub const USER_ROLE_KEY: &str = "userRole";
pub const USER_ID_KEY: &str = "userId";
pub const REQUESTS_UPDATED_KEY: &str = "requests_updated";

/// String key-value seam over the host's persistent session storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used by tests and headless runs.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        let guard = self.entries.lock().expect("session mutex poisoned");
        guard.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut guard = self.entries.lock().expect("session mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        let mut guard = self.entries.lock().expect("session mutex poisoned");
        guard.remove(key);
    }
}

/// Stored role of the signed-in user. Anything unrecognized reads as `User`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserRole {
    #[default]
    User,
    Moderator,
    Admin,
}

impl UserRole {
    fn from_stored(value: &str) -> Self {
        match value.trim() {
            "moderator" => Self::Moderator,
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }

    pub const fn can_moderate(self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }
}

/// Read the stored role, falling back to the default on absent or invalid
/// values. Never errors.
pub fn stored_role(store: &dyn SessionStore) -> UserRole {
    store
        .get(USER_ROLE_KEY)
        .map(|value| UserRole::from_stored(&value))
        .unwrap_or_default()
}

pub fn stored_user_id(store: &dyn SessionStore) -> Option<String> {
    store
        .get(USER_ID_KEY)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Signal that the requests list must refresh after an edit flow.
pub fn mark_requests_updated(store: &dyn SessionStore) {
    store.set(REQUESTS_UPDATED_KEY, "true");
}

/// One-shot read of the refresh flag: reports whether it was set and clears
/// it so the next reader sees nothing.
pub fn take_requests_updated(store: &dyn SessionStore) -> bool {
    let set = store.get(REQUESTS_UPDATED_KEY).is_some();
    if set {
        store.remove(REQUESTS_UPDATED_KEY);
    }
    set
}
