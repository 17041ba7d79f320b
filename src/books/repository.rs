pub mod memory_book_repository;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::books::domain::model::BookEntity;
use crate::core::ledger::LedgerResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_by_holder(&self, holder_id: i64) -> LedgerResult<Vec<BookEntity>>;

    async fn count_by_holder(&self, holder_id: i64) -> LedgerResult<usize>;

    // multi-row holder/date write used by borrow and return batches; applied
    // all-or-nothing, an unknown id fails the whole batch
    async fn assign_holder(&self, book_ids: &[i64], holder_id: i64,
                           loan_start_date: Option<NaiveDate>) -> LedgerResult<usize>;
}
