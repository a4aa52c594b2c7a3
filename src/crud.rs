//! Schema CRUD Orchestration
//!
//! Validates input, calls the gateway, and reports what happened as a
//! [`CrudOutcome`]. Nothing here touches the store: the caller feeds the
//! outcome to the reducer, which updates the collection and the mode.

use crate::error::{AppError, AppResult, FieldError};
use crate::models::{Schema, SchemaDraft, SchemaId};
use crate::storage::SchemaGateway;

/// Result of a successful create/replace/remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrudOutcome {
    Created(Schema),
    Replaced(Schema),
    Removed(SchemaId),
}

pub async fn create_schema<G>(gateway: &G, draft: SchemaDraft) -> AppResult<CrudOutcome>
where
    G: SchemaGateway + ?Sized,
{
    draft.validate()?;
    let schema = gateway.create(draft).await.map_err(log_failure("create"))?;
    log::info!("created schema {} ({})", schema.id, schema.name);
    Ok(CrudOutcome::Created(schema))
}

pub async fn replace_schema<G>(gateway: &G, schema: Schema) -> AppResult<CrudOutcome>
where
    G: SchemaGateway + ?Sized,
{
    schema.validate()?;
    let schema = gateway.replace(schema).await.map_err(log_failure("replace"))?;
    log::info!("replaced schema {}", schema.id);
    Ok(CrudOutcome::Replaced(schema))
}

pub async fn remove_schema<G>(gateway: &G, id: SchemaId) -> AppResult<CrudOutcome>
where
    G: SchemaGateway + ?Sized,
{
    if id.as_str().trim().is_empty() {
        return Err(AppError::Validation(vec![FieldError::required("id")]));
    }
    let id = gateway.delete(&id).await.map_err(log_failure("delete"))?;
    log::info!("removed schema {}", id);
    Ok(CrudOutcome::Removed(id))
}

fn log_failure(op: &'static str) -> impl Fn(AppError) -> AppError {
    move |err| {
        log::error!("{} failed: {}", op, err);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::storage::{BlobGateway, MemoryBackend};

    fn gateway() -> BlobGateway<MemoryBackend> {
        BlobGateway::new(MemoryBackend::new(), "crud-test", false)
    }

    #[tokio::test]
    async fn test_create_reports_created_schema() {
        let gateway = gateway();
        let outcome = create_schema(&gateway, SchemaDraft::new("Test")).await.unwrap();
        match outcome {
            CrudOutcome::Created(schema) => {
                assert_eq!(schema.name, "Test");
                assert_eq!(schema.id, SchemaId::new("1"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_gateway() {
        let gateway = gateway();
        let mut draft = SchemaDraft::new("");
        draft.items.push(Item::empty("1"));

        let err = create_schema(&gateway, draft).await.unwrap_err();
        assert!(err.field_message("name").is_some());
        assert!(err.field_message("items[0].quantity").is_some());
        assert!(gateway.load().await.unwrap().schemas.is_empty());
    }

    #[tokio::test]
    async fn test_replace_validates_and_writes() {
        let gateway = gateway();
        let CrudOutcome::Created(mut schema) =
            create_schema(&gateway, SchemaDraft::new("Old")).await.unwrap()
        else {
            panic!("expected Created");
        };

        schema.name = String::new();
        assert!(matches!(
            replace_schema(&gateway, schema.clone()).await,
            Err(AppError::Validation(_))
        ));

        schema.name = "New".to_string();
        let outcome = replace_schema(&gateway, schema.clone()).await.unwrap();
        assert_eq!(outcome, CrudOutcome::Replaced(schema.clone()));
        assert_eq!(gateway.load().await.unwrap().schemas, vec![schema]);
    }

    #[tokio::test]
    async fn test_remove_propagates_gateway_failure() {
        let gateway = gateway();
        let err = remove_schema(&gateway, SchemaId::new("5")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = remove_schema(&gateway, SchemaId::new(" ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_remove_reports_id() {
        let gateway = gateway();
        create_schema(&gateway, SchemaDraft::new("Doomed")).await.unwrap();
        let outcome = remove_schema(&gateway, SchemaId::new("1")).await.unwrap();
        assert_eq!(outcome, CrudOutcome::Removed(SchemaId::new("1")));
    }
}
