//! Login Gate
//!
//! Two-state machine (`Unauthenticated` ⇄ `Authenticated`) backed by a
//! durable boolean flag. The password comparison is purely local: nothing is
//! hashed, rate-limited or sent anywhere. This is a placeholder gate, not a
//! security boundary.

use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Storage key holding the auth flag
pub const AUTH_STORAGE_KEY: &str = "isAuthenticated";

/// Value stored under [`AUTH_STORAGE_KEY`] once logged in
pub const AUTH_FLAG_VALUE: &str = "true";

/// Shared dashboard password
pub const DASHBOARD_PASSWORD: &str = "jira2024";

/// Durable key-value storage for the auth flag (browser `localStorage`, or
/// memory in tests)
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`FlagStore`]
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Authentication state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// Login failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Incorrect password")]
    IncorrectPassword,
}

/// Password gate in front of the dashboard
pub struct LoginGate<F: FlagStore> {
    store: F,
    password: String,
    state: AuthState,
}

impl<F: FlagStore> LoginGate<F> {
    /// Create a gate with the shared dashboard password
    pub fn new(store: F) -> Self {
        Self::with_password(store, DASHBOARD_PASSWORD)
    }

    /// Create a gate with a custom password
    pub fn with_password(store: F, password: impl Into<String>) -> Self {
        Self {
            store,
            password: password.into(),
            state: AuthState::Unauthenticated,
        }
    }

    /// Read the durable flag; a stored "true" skips the password prompt
    pub fn restore(&mut self) -> AuthState {
        self.state = match self.store.get(AUTH_STORAGE_KEY).as_deref() {
            Some(AUTH_FLAG_VALUE) => AuthState::Authenticated,
            _ => AuthState::Unauthenticated,
        };
        self.state
    }

    /// Submit a password attempt
    pub fn submit(&mut self, attempt: &str) -> Result<AuthState, LoginError> {
        if attempt != self.password {
            tracing::debug!("login rejected");
            return Err(LoginError::IncorrectPassword);
        }

        self.store.set(AUTH_STORAGE_KEY, AUTH_FLAG_VALUE);
        self.state = AuthState::Authenticated;
        tracing::info!("login accepted");
        Ok(self.state)
    }

    /// Clear the durable flag and return to the login prompt
    pub fn logout(&mut self) -> AuthState {
        self.store.remove(AUTH_STORAGE_KEY);
        self.state = AuthState::Unauthenticated;
        self.state
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    pub fn store(&self) -> &F {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_password_persists_flag() {
        let mut gate = LoginGate::new(MemoryFlagStore::new());
        assert_eq!(gate.restore(), AuthState::Unauthenticated);

        assert_eq!(gate.submit("jira2024"), Ok(AuthState::Authenticated));
        assert!(gate.is_authenticated());
        assert_eq!(gate.store().get(AUTH_STORAGE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_wrong_password_stays_unauthenticated() {
        let mut gate = LoginGate::new(MemoryFlagStore::new());
        let err = gate.submit("hunter2").unwrap_err();

        assert_eq!(err.to_string(), "Incorrect password");
        assert_eq!(gate.state(), AuthState::Unauthenticated);
        assert!(gate.store().get(AUTH_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_restore_from_existing_flag() {
        let store = MemoryFlagStore::new();
        store.set(AUTH_STORAGE_KEY, "true");

        let mut gate = LoginGate::new(store);
        assert_eq!(gate.restore(), AuthState::Authenticated);
    }

    #[test]
    fn test_restore_ignores_other_values() {
        let store = MemoryFlagStore::new();
        store.set(AUTH_STORAGE_KEY, "yes");

        let mut gate = LoginGate::new(store);
        assert_eq!(gate.restore(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_logout_clears_flag() {
        let mut gate = LoginGate::new(MemoryFlagStore::new());
        gate.submit(DASHBOARD_PASSWORD).unwrap();

        assert_eq!(gate.logout(), AuthState::Unauthenticated);
        assert!(gate.store().get(AUTH_STORAGE_KEY).is_none());

        let mut reloaded = LoginGate::new(MemoryFlagStore::new());
        assert_eq!(reloaded.restore(), AuthState::Unauthenticated);
    }
}
