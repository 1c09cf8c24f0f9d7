//! `localStorage` flag store

use dashboard_core::FlagStore;

/// Auth flag persisted in the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageFlags;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl FlagStore for LocalStorageFlags {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                web_sys::console::error_1(&format!("Failed to store {}: {:?}", key, e).into());
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                web_sys::console::error_1(&format!("Failed to remove {}: {:?}", key, e).into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::session::{AUTH_FLAG_VALUE, AUTH_STORAGE_KEY, DASHBOARD_PASSWORD};
    use dashboard_core::{AuthState, LoginGate};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_auth_flag_round_trip() {
        let flags = LocalStorageFlags;
        flags.remove(AUTH_STORAGE_KEY);
        assert_eq!(flags.get(AUTH_STORAGE_KEY), None);

        flags.set(AUTH_STORAGE_KEY, AUTH_FLAG_VALUE);
        assert_eq!(flags.get(AUTH_STORAGE_KEY).as_deref(), Some(AUTH_FLAG_VALUE));

        flags.remove(AUTH_STORAGE_KEY);
        assert_eq!(flags.get(AUTH_STORAGE_KEY), None);
    }

    #[wasm_bindgen_test]
    fn test_login_survives_reload() {
        LocalStorageFlags.remove(AUTH_STORAGE_KEY);

        let mut gate = LoginGate::new(LocalStorageFlags);
        assert_eq!(gate.restore(), AuthState::Unauthenticated);
        assert_eq!(gate.submit(DASHBOARD_PASSWORD), Ok(AuthState::Authenticated));

        // A fresh gate reads the persisted flag
        let mut reloaded = LoginGate::new(LocalStorageFlags);
        assert_eq!(reloaded.restore(), AuthState::Authenticated);

        reloaded.logout();
        assert_eq!(LocalStorageFlags.get(AUTH_STORAGE_KEY), None);
    }
}
