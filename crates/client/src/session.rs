//! Session gate
//!
//! Sign-in against the account sheet, registration, and the persisted
//! identity. The account deployment is read like any other list; a login
//! succeeds when a row's email matches case-insensitively and its
//! password matches exactly. The signed-in identity is four values
//! (`id`, `name`, `email`, `phone`) kept in the local store so a restart
//! stays signed in.

use cafe_core::{ConsoleError, ConsoleResult};
use cafe_schema::EntityRecord;
use cafe_schema::validation::is_valid_email;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::http::HttpStore;
use crate::local_store::LocalStore;

const KEY_ID: &str = "id";
const KEY_NAME: &str = "name";
const KEY_EMAIL: &str = "email";
const KEY_PHONE: &str = "phone";

const MIN_PASSWORD_LEN: usize = 8;

// ============================================================================
// Session
// ============================================================================

/// The signed-in identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

// ============================================================================
// AccountSource
// ============================================================================

/// Where account rows come from
#[derive(Debug, Clone)]
pub enum AccountSource {
    /// The account deployment
    Http(HttpStore),
    /// A fixed in-process list, for tests
    Fixed(Arc<Mutex<Vec<EntityRecord>>>),
}

impl AccountSource {
    /// A fixed source over the given rows
    pub fn fixed(rows: Vec<EntityRecord>) -> Self {
        AccountSource::Fixed(Arc::new(Mutex::new(rows)))
    }

    async fn fetch(&self) -> ConsoleResult<Vec<EntityRecord>> {
        match self {
            AccountSource::Http(http) => http.read(None).await,
            AccountSource::Fixed(rows) => {
                Ok(rows.lock().unwrap_or_else(|e| e.into_inner()).clone())
            }
        }
    }

    async fn submit_registration(&self, account: EntityRecord) -> ConsoleResult<()> {
        match self {
            AccountSource::Http(http) => {
                let mut body = serde_json::Map::new();
                body.insert("action".to_string(), json!("insert"));
                for (key, value) in account.as_map() {
                    body.insert(key.clone(), value.clone());
                }
                http.mutate(serde_json::Value::Object(body)).await
            }
            AccountSource::Fixed(rows) => {
                rows.lock().unwrap_or_else(|e| e.into_inner()).push(account);
                Ok(())
            }
        }
    }
}

// ============================================================================
// SessionGate
// ============================================================================

/// Login, registration, and the persisted identity
#[derive(Debug, Clone)]
pub struct SessionGate {
    accounts: AccountSource,
    store: LocalStore,
    current: Option<Session>,
}

impl SessionGate {
    /// Create a gate, restoring any identity the local store holds
    pub fn new(accounts: AccountSource, store: LocalStore) -> Self {
        let current = restore(&store);
        Self {
            accounts,
            store,
            current,
        }
    }

    /// The signed-in identity, if any
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Sign in against the account sheet
    ///
    /// Email matching ignores case; the password must match exactly.
    pub async fn login(&mut self, email: &str, password: &str) -> ConsoleResult<Session> {
        let email = email.trim();
        let password = password.trim();

        if email.is_empty() || password.is_empty() {
            return Err(ConsoleError::validation(
                "Please enter both email and password",
            ));
        }
        if !is_valid_email(email) {
            return Err(ConsoleError::validation(
                "Please enter a valid email address",
            ));
        }

        let accounts = self.accounts.fetch().await?;
        let account = accounts
            .iter()
            .find(|row| {
                let row_email = row.get_str(KEY_EMAIL).unwrap_or_default();
                let row_password = row.get_str("password").unwrap_or_default();
                row_email.eq_ignore_ascii_case(email) && row_password == password
            })
            .ok_or(ConsoleError::InvalidCredentials)?;

        let session = Session {
            id: account.get_str(KEY_ID).unwrap_or_default(),
            name: account.get_str(KEY_NAME).unwrap_or_default(),
            email: account.get_str(KEY_EMAIL).unwrap_or_default(),
            phone: account.get_str(KEY_PHONE).unwrap_or_default(),
        };
        self.persist(&session)?;
        info!(user = %session.name, "signed in");
        self.current = Some(session.clone());
        Ok(session)
    }

    /// Register a new account and sign in as it
    pub async fn register(
        &mut self,
        id: &str,
        name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> ConsoleResult<Session> {
        let (id, name, email, password, phone) = (
            id.trim(),
            name.trim(),
            email.trim(),
            password.trim(),
            phone.trim(),
        );

        if id.is_empty() || name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ConsoleError::validation(
                "Please fill in all required fields",
            ));
        }
        if !is_valid_email(email) {
            return Err(ConsoleError::validation(
                "Please enter a valid email address",
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ConsoleError::validation(
                "Password must be at least 8 characters",
            ));
        }
        // The account sheet stores bare digits; separators are rejected here
        if !phone.is_empty()
            && (!(7..=15).contains(&phone.len()) || phone.chars().any(|c| !c.is_ascii_digit()))
        {
            return Err(ConsoleError::validation("Phone must be 7 to 15 digits"));
        }

        let account = EntityRecord::from_pairs([
            (KEY_ID, id),
            (KEY_NAME, name),
            (KEY_EMAIL, email),
            ("password", password),
            (KEY_PHONE, phone),
        ]);
        self.accounts.submit_registration(account).await?;

        let session = Session {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        };
        self.persist(&session)?;
        info!(user = %session.name, "registered");
        self.current = Some(session.clone());
        Ok(session)
    }

    /// Sign out, clearing the persisted identity but not the cart
    pub fn logout(&mut self) -> ConsoleResult<()> {
        for key in [KEY_ID, KEY_NAME, KEY_EMAIL, KEY_PHONE] {
            self.store.remove(key)?;
        }
        if let Some(session) = self.current.take() {
            info!(user = %session.name, "signed out");
        }
        Ok(())
    }

    fn persist(&mut self, session: &Session) -> ConsoleResult<()> {
        self.store.set_string(KEY_ID, &session.id)?;
        self.store.set_string(KEY_NAME, &session.name)?;
        self.store.set_string(KEY_EMAIL, &session.email)?;
        self.store.set_string(KEY_PHONE, &session.phone)?;
        Ok(())
    }
}

fn restore(store: &LocalStore) -> Option<Session> {
    let id = store.get_string(KEY_ID)?;
    if id.trim().is_empty() {
        return None;
    }
    Some(Session {
        id,
        name: store.get_string(KEY_NAME).unwrap_or_default(),
        email: store.get_string(KEY_EMAIL).unwrap_or_default(),
        phone: store.get_string(KEY_PHONE).unwrap_or_default(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn account_rows() -> Vec<EntityRecord> {
        vec![EntityRecord::from_pairs([
            ("id", "11"),
            ("name", "Maria"),
            ("email", "Maria@Example.com"),
            ("password", "secret-123"),
            ("phone", "5550100"),
        ])]
    }

    fn gate_in(dir: &std::path::Path) -> SessionGate {
        SessionGate::new(
            AccountSource::fixed(account_rows()),
            LocalStore::open(dir).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_login_matches_email_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let mut gate = gate_in(dir.path());

        let session = gate.login("maria@example.com", "secret-123").await.unwrap();
        assert_eq!(session.name, "Maria");
        assert!(gate.is_signed_in());
    }

    #[tokio::test]
    async fn test_login_password_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let mut gate = gate_in(dir.path());

        let err = gate.login("maria@example.com", "SECRET-123").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect email or password");
        assert!(!gate.is_signed_in());
    }

    #[tokio::test]
    async fn test_login_validates_before_fetching() {
        let dir = tempfile::tempdir().unwrap();
        let mut gate = gate_in(dir.path());

        let err = gate.login("", "secret-123").await.unwrap_err();
        assert!(err.is_validation());

        let err = gate.login("not-an-email", "secret-123").await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut gate = gate_in(dir.path());
            gate.login("maria@example.com", "secret-123").await.unwrap();
        }

        let gate = gate_in(dir.path());
        assert_eq!(gate.current().unwrap().id, "11");
    }

    #[tokio::test]
    async fn test_logout_clears_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut gate = gate_in(dir.path());
        gate.login("maria@example.com", "secret-123").await.unwrap();

        gate.logout().unwrap();
        assert!(!gate.is_signed_in());

        let reopened = gate_in(dir.path());
        assert!(reopened.current().is_none());
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut gate = gate_in(dir.path());

        let session = gate
            .register("12", "Leo", "leo@example.com", "longenough", "5550101")
            .await
            .unwrap();
        assert_eq!(session.id, "12");

        gate.logout().unwrap();
        let session = gate.login("LEO@example.com", "longenough").await.unwrap();
        assert_eq!(session.name, "Leo");
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let dir = tempfile::tempdir().unwrap();
        let mut gate = gate_in(dir.path());

        let err = gate
            .register("12", "Leo", "leo@example.com", "short", "")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Password must be at least 8 characters"
        );
    }

    #[tokio::test]
    async fn test_register_phone_must_be_bare_digits() {
        let dir = tempfile::tempdir().unwrap();
        let mut gate = gate_in(dir.path());

        let err = gate
            .register("12", "Leo", "leo@example.com", "longenough", "555-0101")
            .await
            .unwrap_err();
        assert!(err.is_validation());

        // Empty phone is allowed
        gate.register("13", "Ana", "ana@example.com", "longenough", "")
            .await
            .unwrap();
    }
}
