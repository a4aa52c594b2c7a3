//! Persistence Gateway
//!
//! Schema storage behind an async interface. Every mutation is a full
//! read-modify-write of the `{ schemas: [...] }` blob.

mod backend;
mod blob;

pub use backend::{KeyValueBackend, LocalStorageBackend};
#[cfg(test)]
pub use backend::MemoryBackend;
pub use blob::BlobGateway;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Schema, SchemaDraft, SchemaId, StoredSchemas};

/// Gateway used by the CRUD orchestration.
///
/// Backends are synchronous today; the async surface lets a network-backed
/// store drop in without touching callers.
#[async_trait(?Send)]
pub trait SchemaGateway {
    /// Full collection, or the bootstrap payload when nothing is stored
    async fn load(&self) -> AppResult<StoredSchemas>;

    /// Store a new schema; the gateway assigns its id
    async fn create(&self, draft: SchemaDraft) -> AppResult<Schema>;

    /// Overwrite the schema with the same id
    async fn replace(&self, schema: Schema) -> AppResult<Schema>;

    /// Remove a schema, returning its id as confirmation
    async fn delete(&self, id: &SchemaId) -> AppResult<SchemaId>;
}

/// Gateway backed by `window.localStorage`
pub type LocalStorageGateway = BlobGateway<LocalStorageBackend>;
