use kennel_domain::{EntityKind, References, ID};
use kennel_infra::KennelContext;

#[derive(Debug)]
pub enum ReferenceError {
    /// The referenced entity is missing or marked as deleted
    Inactive(EntityKind, ID),
    StorageError,
}

/// Every foreign key of `record` has to point to an active entity
pub async fn ensure_references_active<R: References>(
    record: &R,
    ctx: &KennelContext,
) -> Result<(), ReferenceError> {
    for (kind, id) in record.foreign_keys() {
        let active = ctx
            .repos
            .is_active(kind, id)
            .await
            .map_err(|_| ReferenceError::StorageError)?;
        if !active {
            return Err(ReferenceError::Inactive(kind, id.clone()));
        }
    }
    Ok(())
}
