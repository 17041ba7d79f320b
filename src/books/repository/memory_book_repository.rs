use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::ledger::{LedgerError, LedgerResult};
use crate::core::repository::Repository;
use crate::gateway::memory::Datastore;

#[derive(Debug)]
pub struct MemoryBookRepository {
    store: Arc<Datastore>,
}

impl MemoryBookRepository {
    pub fn new(store: Arc<Datastore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LedgerResult<BookEntity> {
        let row = entity.clone();
        self.store
            .transact(move |tables| {
                let mut row = row;
                row.book_id = tables.next_book_id();
                tables.books.insert(row.book_id, row.clone());
                Ok(row)
            })
            .await
    }

    async fn update(&self, entity: &BookEntity) -> LedgerResult<usize> {
        let row = entity.clone();
        self.store
            .transact(move |tables| {
                if !tables.books.contains_key(&row.book_id) {
                    return Err(LedgerError::not_found(
                        format!("book not found for {}", row.book_id).as_str()));
                }
                tables.books.insert(row.book_id, row);
                Ok(1)
            })
            .await
    }

    async fn get(&self, id: i64) -> LedgerResult<BookEntity> {
        self.store
            .read(|tables| {
                tables.books.get(&id).cloned().ok_or_else(|| {
                    LedgerError::not_found(format!("book not found for {}", id).as_str())
                })
            })
            .await
    }

    async fn delete(&self, id: i64) -> LedgerResult<usize> {
        self.store
            .transact(|tables| {
                tables.books.remove(&id).map(|_| 1).ok_or_else(|| {
                    LedgerError::not_found(format!("book not found for {}", id).as_str())
                })
            })
            .await
    }

    async fn find_all(&self) -> LedgerResult<Vec<BookEntity>> {
        self.store
            .read(|tables| Ok(tables.books.values().cloned().collect()))
            .await
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_holder(&self, holder_id: i64) -> LedgerResult<Vec<BookEntity>> {
        self.store
            .read(|tables| {
                Ok(tables
                    .books
                    .values()
                    .filter(|b| b.holder_id == holder_id)
                    .cloned()
                    .collect())
            })
            .await
    }

    async fn count_by_holder(&self, holder_id: i64) -> LedgerResult<usize> {
        self.store
            .read(|tables| Ok(tables.books.values().filter(|b| b.holder_id == holder_id).count()))
            .await
    }

    async fn assign_holder(&self, book_ids: &[i64], holder_id: i64,
                           loan_start_date: Option<NaiveDate>) -> LedgerResult<usize> {
        let ids = book_ids.to_vec();
        self.store
            .transact(move |tables| {
                for id in &ids {
                    match tables.books.get_mut(id) {
                        Some(book) => {
                            book.holder_id = holder_id;
                            book.loan_start_date = loan_start_date;
                        }
                        None => {
                            return Err(LedgerError::not_found(
                                format!("book not found for {}", id).as_str()));
                        }
                    }
                }
                Ok(ids.len())
            })
            .await
    }
}
