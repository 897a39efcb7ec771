use gloo_storage::{SessionStorage, Storage};
use tracing::{info, warn};

use super::errors::{AuthError, ClientResult};
use super::traits::SessionStore;
use super::types::SessionRecord;
use crate::auth::Role;

const USER_ID_KEY: &str = "user_id";
const USER_NAME_KEY: &str = "user_name";
const USER_EMAIL_KEY: &str = "user_email";
const USER_ROLE_KEY: &str = "user_role";

/// Session persistence backed by browser `sessionStorage`.
///
/// Each field of the record is written under its own key, as raw strings
/// rather than JSON, so server-rendered pages reading the same keys see the
/// plain values.
#[derive(Clone, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn set_item(storage: &web_sys::Storage, key: &str, value: &str) -> ClientResult<()> {
        storage.set_item(key, value).map_err(|e| AuthError::Storage {
            message: format!("Failed to store {}: {:?}", key, e),
        })
    }

    fn get_item(storage: &web_sys::Storage, key: &str) -> ClientResult<Option<String>> {
        storage.get_item(key).map_err(|e| AuthError::Storage {
            message: format!("Failed to read {}: {:?}", key, e),
        })
    }
}

impl SessionStore for BrowserSessionStore {
    fn store(&self, record: &SessionRecord) -> ClientResult<()> {
        let storage = SessionStorage::raw();
        Self::set_item(&storage, USER_ID_KEY, &record.user_id.to_string())?;
        Self::set_item(&storage, USER_NAME_KEY, &record.user_name)?;
        Self::set_item(&storage, USER_EMAIL_KEY, &record.user_email)?;
        Self::set_item(&storage, USER_ROLE_KEY, record.user_role.as_str())?;

        info!("Stored session for user: {}", record.user_name);
        Ok(())
    }

    fn load(&self) -> ClientResult<Option<SessionRecord>> {
        let storage = SessionStorage::raw();
        let user_id = Self::get_item(&storage, USER_ID_KEY)?;
        let user_name = Self::get_item(&storage, USER_NAME_KEY)?;
        let user_email = Self::get_item(&storage, USER_EMAIL_KEY)?;
        let user_role = Self::get_item(&storage, USER_ROLE_KEY)?;

        // A session only counts when every key is present and readable.
        let (Some(user_id), Some(user_name), Some(user_email), Some(user_role)) =
            (user_id, user_name, user_email, user_role)
        else {
            return Ok(None);
        };

        let Ok(user_id) = user_id.parse::<u64>() else {
            warn!("Stored user_id is not numeric: {}", user_id);
            return Ok(None);
        };

        let Some(user_role) = Role::parse(&user_role) else {
            warn!("Stored user_role is not recognized: {}", user_role);
            return Ok(None);
        };

        Ok(Some(SessionRecord {
            user_id,
            user_name,
            user_email,
            user_role,
        }))
    }

    fn clear(&self) -> ClientResult<()> {
        let storage = SessionStorage::raw();
        for key in [USER_ID_KEY, USER_NAME_KEY, USER_EMAIL_KEY, USER_ROLE_KEY] {
            storage.remove_item(key).map_err(|e| AuthError::Storage {
                message: format!("Failed to remove {}: {:?}", key, e),
            })?;
        }

        info!("Cleared stored session");
        Ok(())
    }
}

/// In-memory session store for native tests and previews.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: std::cell::RefCell<Option<SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record currently held, if any.
    pub fn stored(&self) -> Option<SessionRecord> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn store(&self, record: &SessionRecord) -> ClientResult<()> {
        *self.slot.borrow_mut() = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> ClientResult<Option<SessionRecord>> {
        Ok(self.slot.borrow().clone())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_round_trips_discrete_keys() {
        let store = BrowserSessionStore::new();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        let record = SessionRecord {
            user_id: 42,
            user_name: "Sam Lee".to_string(),
            user_email: "sam@example.com".to_string(),
            user_role: Role::Student,
        };
        store.store(&record).unwrap();

        // Raw strings land in storage, not JSON-quoted values.
        let storage = SessionStorage::raw();
        assert_eq!(storage.get_item("user_id").unwrap().as_deref(), Some("42"));
        assert_eq!(
            storage.get_item("user_role").unwrap().as_deref(),
            Some("student")
        );

        assert_eq!(store.load().unwrap(), Some(record));
        store.clear().unwrap();
    }

    #[wasm_bindgen_test]
    fn host_page_helpers_read_and_clear_the_session() {
        use crate::services::client::compat;

        let store = BrowserSessionStore::new();
        let record = SessionRecord {
            user_id: 7,
            user_name: "Jane Doe".to_string(),
            user_email: "jane@example.com".to_string(),
            user_role: Role::Mentor,
        };
        store.store(&record).unwrap();
        assert_eq!(compat::current_session(), Some(record));

        compat::clear_session();
        assert!(compat::current_session().is_none());
    }

    #[wasm_bindgen_test]
    fn partial_or_garbled_keys_read_as_no_session() {
        let store = BrowserSessionStore::new();
        store.clear().unwrap();

        // Only one of the four keys present.
        let storage = SessionStorage::raw();
        storage.set_item("user_id", "7").unwrap();
        assert!(store.load().unwrap().is_none());

        // All four present but the id is not numeric.
        storage.set_item("user_id", "seven").unwrap();
        storage.set_item("user_name", "Sam Lee").unwrap();
        storage.set_item("user_email", "sam@example.com").unwrap();
        storage.set_item("user_role", "student").unwrap();
        assert!(store.load().unwrap().is_none());

        store.clear().unwrap();
    }
}
