pub mod service;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::books::dto::BookDto;
use crate::core::ledger::LedgerResult;

// LendingService is the sole writer of holder/date state. It enforces the
// central invariant: a book is held by the library pseudo-reader exactly when
// it carries no loan start date.
#[async_trait]
pub trait LendingService: Sync + Send {
    async fn create_book(&self, title: &str, author: &str, reader_input: &str,
                         loan_start: Option<NaiveDate>) -> LedgerResult<BookDto>;
    async fn update_book(&self, book_id: i64, title: &str, author: &str, reader_input: &str,
                         loan_start: Option<NaiveDate>) -> LedgerResult<BookDto>;
    async fn remove_book(&self, book_id: i64) -> LedgerResult<()>;
    // assigns one reader to every book in the set under one unit of work
    async fn borrow_books(&self, book_ids: &[i64], reader_id: i64) -> LedgerResult<Vec<BookDto>>;
    // puts every book in the set back on the shelf, unconditionally
    async fn return_books(&self, book_ids: &[i64]) -> LedgerResult<Vec<BookDto>>;
}
