pub mod service;

use async_trait::async_trait;

use crate::books::dto::BookDto;
use crate::core::ledger::LedgerResult;

// CatalogService is the read side of the ledger: book listings enriched with
// holder display names. All business validation happens in the lending engine.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LedgerResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: i64) -> LedgerResult<BookDto>;
    async fn list_available_books(&self) -> LedgerResult<Vec<BookDto>>;
    async fn list_books_held_by(&self, reader_id: i64) -> LedgerResult<Vec<BookDto>>;
}
