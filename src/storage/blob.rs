//! Blob Gateway
//!
//! `SchemaGateway` over a single JSON value in a key-value backend.

use async_trait::async_trait;

use super::{KeyValueBackend, LocalStorageBackend, SchemaGateway};
use crate::error::{AppError, AppResult};
use crate::models::{Schema, SchemaDraft, SchemaId, StoredSchemas};

#[derive(Debug, Clone)]
pub struct BlobGateway<B> {
    backend: B,
    key: String,
    seed_sample: bool,
}

impl BlobGateway<LocalStorageBackend> {
    pub fn local(key: impl Into<String>, seed_sample: bool) -> Self {
        Self::new(LocalStorageBackend, key, seed_sample)
    }
}

impl<B: KeyValueBackend> BlobGateway<B> {
    pub fn new(backend: B, key: impl Into<String>, seed_sample: bool) -> Self {
        Self {
            backend,
            key: key.into(),
            seed_sample,
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read(&self) -> AppResult<StoredSchemas> {
        match self.backend.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(StoredSchemas::bootstrap(self.seed_sample)),
        }
    }

    fn write(&self, stored: &StoredSchemas) -> AppResult<()> {
        let raw = serde_json::to_string(stored)?;
        self.backend.set(&self.key, &raw)
    }
}

#[async_trait(?Send)]
impl<B: KeyValueBackend> SchemaGateway for BlobGateway<B> {
    async fn load(&self) -> AppResult<StoredSchemas> {
        self.read()
    }

    async fn create(&self, draft: SchemaDraft) -> AppResult<Schema> {
        let mut stored = self.read()?;
        let schema = draft.with_id(stored.next_id());
        stored.schemas.push(schema.clone());
        self.write(&stored)?;
        Ok(schema)
    }

    async fn replace(&self, schema: Schema) -> AppResult<Schema> {
        let mut stored = self.read()?;
        let slot = stored
            .schemas
            .iter_mut()
            .find(|s| s.id == schema.id)
            .ok_or_else(|| AppError::NotFound(format!("schema {}", schema.id)))?;
        *slot = schema.clone();
        self.write(&stored)?;
        Ok(schema)
    }

    async fn delete(&self, id: &SchemaId) -> AppResult<SchemaId> {
        let mut stored = self.read()?;
        let before = stored.schemas.len();
        stored.schemas.retain(|s| &s.id != id);
        if stored.schemas.len() == before {
            return Err(AppError::NotFound(format!("schema {}", id)));
        }
        self.write(&stored)?;
        Ok(id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::storage::MemoryBackend;

    const KEY: &str = "schemas-test";

    fn gateway() -> BlobGateway<MemoryBackend> {
        BlobGateway::new(MemoryBackend::new(), KEY, false)
    }

    fn stored_blob(gateway: &BlobGateway<MemoryBackend>) -> StoredSchemas {
        let raw = gateway.backend().get(KEY).unwrap().expect("blob written");
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_load_returns_bootstrap_without_writing() {
        let seeded = BlobGateway::new(MemoryBackend::new(), KEY, true);
        let loaded = seeded.load().await.unwrap();
        assert_eq!(loaded, StoredSchemas::bootstrap(true));
        assert_eq!(seeded.backend().get(KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let gateway = gateway();
        let first = gateway.create(SchemaDraft::new("A")).await.unwrap();
        let second = gateway.create(SchemaDraft::new("B")).await.unwrap();

        assert_eq!(first.id, SchemaId::new("1"));
        assert_eq!(second.id, SchemaId::new("2"));
        assert_eq!(stored_blob(&gateway).schemas, vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_on_top_of_bootstrap() {
        let gateway = BlobGateway::new(MemoryBackend::new(), KEY, true);
        let created = gateway.create(SchemaDraft::new("Mine")).await.unwrap();
        assert_eq!(created.id, SchemaId::new("2"));
        assert_eq!(stored_blob(&gateway).schemas.len(), 2);
    }

    #[tokio::test]
    async fn test_replace_overwrites_whole_schema() {
        let gateway = gateway();
        let mut schema = gateway.create(SchemaDraft::new("Before")).await.unwrap();
        schema.name = "After".to_string();
        schema.items.push(Item::empty("1"));

        let replaced = gateway.replace(schema.clone()).await.unwrap();
        assert_eq!(replaced, schema);
        assert_eq!(gateway.load().await.unwrap().schemas, vec![schema]);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_fails() {
        let gateway = gateway();
        let ghost = SchemaDraft::new("Ghost").with_id(SchemaId::new("42"));
        let err = gateway.replace(ghost).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_returns_id() {
        let gateway = gateway();
        let keep = gateway.create(SchemaDraft::new("Keep")).await.unwrap();
        let gone = gateway.create(SchemaDraft::new("Drop")).await.unwrap();

        assert_eq!(gateway.delete(&gone.id).await.unwrap(), gone.id);
        assert_eq!(gateway.load().await.unwrap().schemas, vec![keep]);
        assert!(matches!(
            gateway.delete(&gone.id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reassigned() {
        let gateway = gateway();
        gateway.create(SchemaDraft::new("A")).await.unwrap();
        let last = gateway.create(SchemaDraft::new("B")).await.unwrap();
        gateway.delete(&last.id).await.unwrap();

        let next = gateway.create(SchemaDraft::new("C")).await.unwrap();
        assert_eq!(next.id, SchemaId::new("3"));
        assert_eq!(stored_blob(&gateway).last_id, 3);
    }

    #[tokio::test]
    async fn test_create_next_to_max_id_does_not_overflow() {
        let raw = format!(r#"{{"schemas":[{{"id":"{}","name":"Big"}}]}}"#, u64::MAX);
        let gateway = BlobGateway::new(MemoryBackend::with_entry(KEY, &raw), KEY, false);
        let created = gateway.create(SchemaDraft::new("Small")).await.unwrap();
        assert_eq!(created.id, SchemaId::new("1"));
        assert_eq!(stored_blob(&gateway).schemas.len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_reported() {
        let gateway = BlobGateway::new(MemoryBackend::with_entry(KEY, "{not json"), KEY, true);
        let err = gateway.load().await.unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
