//! Repository port trait.
//!
//! Adapters (Postgres, SQLite) implement this over the `conversion`
//! document collection.

use crate::domain::{ConversionId, ConversionRecord, NewConversion};
use crate::error::RepoError;

/// Storage for conversion records.
#[async_trait::async_trait]
pub trait ConversionRepository: Send + Sync + 'static {
    /// Stores a new conversion and returns it with its assigned id.
    async fn insert(&self, conversion: NewConversion) -> Result<ConversionRecord, RepoError>;

    /// Lists all conversions, oldest first.
    async fn find_all(&self) -> Result<Vec<ConversionRecord>, RepoError>;

    /// Gets a conversion by ID. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: ConversionId) -> Result<Option<ConversionRecord>, RepoError>;

    /// Deletes a conversion by ID. Deleting an unknown id succeeds.
    async fn delete_by_id(&self, id: ConversionId) -> Result<(), RepoError>;
}
