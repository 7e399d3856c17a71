use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::constants::*;
use crate::validation::{validate_display_name, validate_email, validate_phone};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected write to `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String key-value storage, e.g. `localStorage` in the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct VisitorForm {
    #[validate(custom = "validate_display_name")]
    pub name: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
}

impl VisitorForm {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        let phone = phone.trim();
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VisitorEntry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub timestamp_ms: u64,
    pub visitor_number: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct VisitorTicket {
    pub visitor_number: u64,
    pub is_special: bool,
}

impl VisitorTicket {
    /// Prize the wheel must land on for this visitor, if any.
    pub fn forced_winner(&self) -> Option<&'static str> {
        self.is_special.then_some(TOP_PRIZE_ID)
    }
}

#[derive(Debug, Error)]
pub enum VisitorError {
    #[error("invalid visitor details")]
    Invalid(#[from] ValidationErrors),
    #[error("prize already claimed on this device")]
    AlreadyWon,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("could not encode visitor entry: {0}")]
    Encode(#[from] serde_json::Error),
}

impl VisitorError {
    /// Message suitable for showing under the visitor form.
    pub fn user_message(&self) -> &'static str {
        match self {
            VisitorError::Invalid(errors) => {
                let fields = errors.field_errors();
                if let Some(name) = fields.get("name") {
                    if name.iter().any(|e| e.code == "inappropriate_name") {
                        return INAPPROPRIATE_NAME_ERROR;
                    }
                    return NAME_REQUIRED_ERROR;
                }
                if fields.contains_key("email") {
                    return INVALID_EMAIL_ERROR;
                }
                INVALID_PHONE_ERROR
            }
            VisitorError::AlreadyWon => ALREADY_WON_ERROR,
            VisitorError::Store(_) | VisitorError::Encode(_) => STORAGE_ERROR,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PrizeWonRecord {
    pub prize_id: String,
    pub visitor_number: u64,
}

/// Visitor counter and "prize won" flag kept in an injected store.
///
/// Everything here lives on the visitor's own device, so the counter and the flag
/// are promotional bookkeeping only and can be reset by clearing storage.
pub struct VisitorRegistry<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> VisitorRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn visitor_count(&self) -> Result<u64, StoreError> {
        let raw = self.store.get(STORAGE_KEY_VISITOR_COUNT)?;
        Ok(match raw {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring corrupt visitor counter {:?}", value);
                0
            }),
            None => 0,
        })
    }

    /// Writes the entry before the counter, so a failed write leaves the count untouched.
    pub fn register(&self, form: VisitorForm, timestamp_ms: u64) -> Result<VisitorTicket, VisitorError> {
        form.validate()?;
        if self.has_won()? {
            return Err(VisitorError::AlreadyWon);
        }

        let visitor_number = self.visitor_count()? + 1;
        let entry = VisitorEntry {
            name: form.name,
            email: form.email,
            phone: form.phone,
            timestamp_ms,
            visitor_number,
        };

        self.store
            .set(STORAGE_KEY_VISITOR_ENTRY, &serde_json::to_string(&entry)?)?;
        self.store
            .set(STORAGE_KEY_VISITOR_COUNT, &visitor_number.to_string())?;

        let ticket = VisitorTicket {
            visitor_number,
            is_special: visitor_number == SPECIAL_VISITOR_NUMBER,
        };
        log::info!("registered visitor #{} (special: {})", visitor_number, ticket.is_special);
        Ok(ticket)
    }

    pub fn last_entry(&self) -> Result<Option<VisitorEntry>, StoreError> {
        let raw = self.store.get(STORAGE_KEY_VISITOR_ENTRY)?;
        Ok(raw.and_then(|json| match serde_json::from_str(&json) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("ignoring unreadable visitor entry: {}", e);
                None
            }
        }))
    }

    pub fn has_won(&self) -> Result<bool, StoreError> {
        Ok(self.won_prize()?.is_some())
    }

    pub fn won_prize(&self) -> Result<Option<PrizeWonRecord>, StoreError> {
        let raw = self.store.get(STORAGE_KEY_PRIZE_WON)?;
        Ok(raw.and_then(|json| match serde_json::from_str(&json) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("ignoring unreadable prize flag: {}", e);
                None
            }
        }))
    }

    pub fn mark_won(&self, prize_id: &str, ticket: &VisitorTicket) -> Result<(), VisitorError> {
        let record = PrizeWonRecord {
            prize_id: prize_id.to_string(),
            visitor_number: ticket.visitor_number,
        };
        self.store
            .set(STORAGE_KEY_PRIZE_WON, &serde_json::to_string(&record)?)?;
        Ok(())
    }

    pub fn reset(&self) -> Result<(), StoreError> {
        self.store.remove(STORAGE_KEY_PRIZE_WON)?;
        self.store.remove(STORAGE_KEY_VISITOR_ENTRY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    /// Fails writes to a single key, everything else goes to memory.
    struct FailingKeyStore {
        inner: MemoryStore,
        failing_key: &'static str,
    }

    impl KeyValueStore for FailingKeyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.failing_key {
                return Err(StoreError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }
    }

    fn form() -> VisitorForm {
        VisitorForm::new(" Maria ", "maria@example.com", "")
    }

    #[test]
    fn test_register_increments_counter() {
        let registry = VisitorRegistry::new(MemoryStore::new());
        let first = registry.register(form(), 1_000).unwrap();
        let second = registry.register(form(), 2_000).unwrap();

        assert_eq!(first.visitor_number, 1);
        assert_eq!(second.visitor_number, 2);
        assert_eq!(registry.visitor_count().unwrap(), 2);

        let entry = registry.last_entry().unwrap().unwrap();
        assert_eq!(entry.name, "Maria");
        assert_eq!(entry.phone, None);
        assert_eq!(entry.timestamp_ms, 2_000);
    }

    #[test]
    fn test_special_visitor_gets_top_prize() {
        let store = MemoryStore::new();
        store
            .set(STORAGE_KEY_VISITOR_COUNT, &(SPECIAL_VISITOR_NUMBER - 1).to_string())
            .unwrap();
        let registry = VisitorRegistry::new(&store);

        let ticket = registry.register(form(), 0).unwrap();
        assert!(ticket.is_special);
        assert_eq!(ticket.forced_winner(), Some(TOP_PRIZE_ID));

        let next = registry.register(form(), 0).unwrap();
        assert!(!next.is_special);
        assert_eq!(next.forced_winner(), None);
    }

    #[test]
    fn test_corrupt_counter_restarts() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY_VISITOR_COUNT, "lots").unwrap();
        let registry = VisitorRegistry::new(&store);
        assert_eq!(registry.register(form(), 0).unwrap().visitor_number, 1);
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let registry = VisitorRegistry::new(MemoryStore::new());

        let err = registry
            .register(VisitorForm::new("", "maria@example.com", ""), 0)
            .unwrap_err();
        assert_eq!(err.user_message(), NAME_REQUIRED_ERROR);

        let err = registry
            .register(VisitorForm::new("Maria", "maria", ""), 0)
            .unwrap_err();
        assert_eq!(err.user_message(), INVALID_EMAIL_ERROR);

        let err = registry
            .register(VisitorForm::new("Maria", "maria@example.com", "12"), 0)
            .unwrap_err();
        assert_eq!(err.user_message(), INVALID_PHONE_ERROR);

        assert_eq!(registry.visitor_count().unwrap(), 0);
    }

    #[test]
    fn test_prize_won_locks_registration() {
        let registry = VisitorRegistry::new(MemoryStore::new());
        let ticket = registry.register(form(), 0).unwrap();
        assert!(!registry.has_won().unwrap());

        registry.mark_won("spa-day", &ticket).unwrap();
        assert!(registry.has_won().unwrap());
        assert_eq!(registry.won_prize().unwrap().unwrap().prize_id, "spa-day");
        assert!(matches!(registry.register(form(), 0), Err(VisitorError::AlreadyWon)));

        registry.reset().unwrap();
        assert!(!registry.has_won().unwrap());
    }

    #[test]
    fn test_storage_failure_surfaces() {
        let registry = VisitorRegistry::new(BrokenStore);
        let err = registry.register(form(), 0).unwrap_err();
        assert!(matches!(err, VisitorError::Store(StoreError::Unavailable)));
        assert_eq!(err.user_message(), STORAGE_ERROR);
    }

    #[test]
    fn test_corrupt_prize_flag_unlocks_registration() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY_PRIZE_WON, "{not json").unwrap();
        let registry = VisitorRegistry::new(&store);

        assert_eq!(registry.won_prize().unwrap(), None);
        assert!(!registry.has_won().unwrap());
        assert_eq!(registry.register(form(), 0).unwrap().visitor_number, 1);
    }

    #[test]
    fn test_failed_entry_write_keeps_counter() {
        let registry = VisitorRegistry::new(FailingKeyStore {
            inner: MemoryStore::new(),
            failing_key: STORAGE_KEY_VISITOR_ENTRY,
        });

        let err = registry.register(form(), 0).unwrap_err();
        assert!(matches!(err, VisitorError::Store(StoreError::Write { .. })));
        assert_eq!(registry.visitor_count().unwrap(), 0);
        assert_eq!(registry.last_entry().unwrap(), None);
    }
}
