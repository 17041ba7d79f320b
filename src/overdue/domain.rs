pub mod service;

use async_trait::async_trait;

use crate::books::dto::BookDto;
use crate::core::ledger::LedgerResult;
use crate::readers::dto::ReaderDto;

// OverdueService derives overdue status from loan start dates at query time;
// nothing is persisted, so the answer is never stale.
#[async_trait]
pub trait OverdueService: Sync + Send {
    async fn readers_with_overdue_books(&self) -> LedgerResult<Vec<ReaderDto>>;
    async fn overdue_books_of(&self, reader_id: i64) -> LedgerResult<Vec<BookDto>>;
}
