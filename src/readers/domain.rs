pub mod model;
pub mod service;

use async_trait::async_trait;

use crate::core::ledger::LedgerResult;
use crate::readers::dto::ReaderDto;

// ReaderService is the reader directory: identity storage plus resolution of
// free-form reader references.
#[async_trait]
pub trait ReaderService: Sync + Send {
    async fn add_reader(&self, name: &str) -> LedgerResult<ReaderDto>;
    // ordered chain: numeric id, library alias, case-insensitive exact name
    async fn resolve_reader_reference(&self, input: &str) -> LedgerResult<i64>;
    async fn list_readers(&self, include_library_reader: bool) -> LedgerResult<Vec<ReaderDto>>;
    async fn find_reader_by_id(&self, id: i64) -> LedgerResult<ReaderDto>;
    async fn rename_reader(&self, id: i64, new_name: &str) -> LedgerResult<ReaderDto>;
    async fn remove_reader(&self, id: i64) -> LedgerResult<()>;
}
