//! The MessageVault: add and retrieve messages by content digest.
//!
//! The vault owns the validation gate and the digest computation; the store
//! underneath only ever sees a digest that matches its paired text.

use std::sync::Arc;

use shabox_core::Sha256Digest;
use shabox_store::{InsertOutcome, MessageStore};

use crate::error::{Result, VaultError};

/// The main vault struct.
///
/// Generic over the storage backend so tests can substitute an in-memory
/// or failing store. Construct it once at process start from an explicit
/// store instance; there is no ambient global state.
pub struct MessageVault<S: MessageStore> {
    /// The storage backend.
    store: Arc<S>,
}

impl<S: MessageStore> MessageVault<S> {
    /// Create a new vault over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a message, returning its SHA-256 digest.
    ///
    /// `None` models a request whose message field is absent or null and is
    /// rejected before hashing or any storage access. The digest is returned
    /// whether or not the pair was already stored (idempotent upsert).
    pub async fn add_message(&self, message: Option<String>) -> Result<Sha256Digest> {
        let Some(message) = message else {
            return Err(VaultError::InvalidInput(
                "no message key found".to_string(),
            ));
        };

        let digest = Sha256Digest::of(&message);

        match self.store.insert(&digest, &message).await? {
            InsertOutcome::Inserted => {
                tracing::info!(digest = %digest, len = message.len(), "message stored");
            }
            InsertOutcome::AlreadyExists => {
                tracing::debug!(digest = %digest, "message already stored");
            }
        }

        Ok(digest)
    }

    /// Retrieve the message stored under a digest.
    ///
    /// The digest is matched case-insensitively against the canonical
    /// uppercase form. A string that cannot be a digest at all (wrong
    /// length, non-hex) can match nothing and reports `NotFound`. When
    /// several rows share a digest, the first-inserted message wins.
    pub async fn retrieve_message(&self, digest: &str) -> Result<String> {
        let digest = Sha256Digest::from_hex(digest).map_err(|_| VaultError::NotFound)?;

        match self.store.fetch(&digest).await? {
            Some(message) => Ok(message),
            None => Err(VaultError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use shabox_store::{MemoryStore, SqliteStore, StoreError};

    const FOOBAR_HEX: &str = "C3AB8FF13720E8AD9047DD39466B3C8974E592C2FA383D4A3960714CAEF0C4F2";

    /// Store double whose every operation fails, for exercising the
    /// storage-failure path.
    struct FailingStore;

    #[async_trait]
    impl MessageStore for FailingStore {
        async fn insert(&self, _: &Sha256Digest, _: &str) -> shabox_store::Result<InsertOutcome> {
            Err(StoreError::Migration("disk on fire".to_string()))
        }

        async fn fetch(&self, _: &Sha256Digest) -> shabox_store::Result<Option<String>> {
            Err(StoreError::Migration("disk on fire".to_string()))
        }

        async fn count(&self, _: &Sha256Digest) -> shabox_store::Result<u64> {
            Err(StoreError::Migration("disk on fire".to_string()))
        }
    }

    #[tokio::test]
    async fn test_add_returns_known_digest() {
        let vault = MessageVault::new(MemoryStore::new());
        let digest = vault.add_message(Some("foobar".into())).await.unwrap();
        assert_eq!(digest.to_hex(), FOOBAR_HEX);
    }

    #[tokio::test]
    async fn test_round_trip() {
        let vault = MessageVault::new(SqliteStore::open_memory().unwrap());
        let digest = vault.add_message(Some("hello world".into())).await.unwrap();

        let message = vault.retrieve_message(&digest.to_hex()).await.unwrap();
        assert_eq!(message, "hello world");
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let vault = MessageVault::new(SqliteStore::open_memory().unwrap());

        let d1 = vault.add_message(Some("foobar".into())).await.unwrap();
        let d2 = vault.add_message(Some("foobar".into())).await.unwrap();
        assert_eq!(d1, d2);

        // Exactly one record for the pair
        assert_eq!(vault.store().count(&d1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_retrieve_is_case_insensitive() {
        let vault = MessageVault::new(MemoryStore::new());
        vault.add_message(Some("foobar".into())).await.unwrap();

        let upper = vault.retrieve_message(FOOBAR_HEX).await.unwrap();
        let lower = vault
            .retrieve_message(&FOOBAR_HEX.to_lowercase())
            .await
            .unwrap();
        assert_eq!(upper, lower);
    }

    #[tokio::test]
    async fn test_retrieve_unknown_digest_is_not_found() {
        let vault = MessageVault::new(MemoryStore::new());
        let zeros = "0".repeat(64);

        let err = vault.retrieve_message(&zeros).await.unwrap_err();
        assert!(matches!(err, VaultError::NotFound));
    }

    #[tokio::test]
    async fn test_retrieve_malformed_digest_is_not_found() {
        let vault = MessageVault::new(MemoryStore::new());

        let err = vault.retrieve_message("not-a-digest").await.unwrap_err();
        assert!(matches!(err, VaultError::NotFound));
    }

    #[tokio::test]
    async fn test_absent_message_is_invalid_input() {
        let vault = MessageVault::new(MemoryStore::new());

        let err = vault.add_message(None).await.unwrap_err();
        assert!(matches!(err, VaultError::InvalidInput(_)));

        // Nothing was written
        let digest = Sha256Digest::of("");
        assert_eq!(vault.store().count(&digest).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_message_is_valid() {
        let vault = MessageVault::new(MemoryStore::new());

        let digest = vault.add_message(Some(String::new())).await.unwrap();
        let message = vault.retrieve_message(&digest.to_hex()).await.unwrap();
        assert_eq!(message, "");
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_storage() {
        let vault = MessageVault::new(FailingStore);

        let err = vault.add_message(Some("foobar".into())).await.unwrap_err();
        assert!(matches!(err, VaultError::Storage(_)));

        let err = vault
            .retrieve_message(FOOBAR_HEX)
            .await
            .unwrap_err();
        assert!(matches!(err, VaultError::Storage(_)));
    }

    #[tokio::test]
    async fn test_validation_precedes_storage() {
        // An absent message never reaches the (failing) store.
        let vault = MessageVault::new(FailingStore);

        let err = vault.add_message(None).await.unwrap_err();
        assert!(matches!(err, VaultError::InvalidInput(_)));
    }
}
