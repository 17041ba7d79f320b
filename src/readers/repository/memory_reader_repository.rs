use std::sync::Arc;

use async_trait::async_trait;

use crate::core::ledger::{LedgerError, LedgerResult};
use crate::core::repository::Repository;
use crate::gateway::memory::Datastore;
use crate::readers::domain::model::ReaderEntity;
use crate::readers::repository::ReaderRepository;

#[derive(Debug)]
pub struct MemoryReaderRepository {
    store: Arc<Datastore>,
    // id allocation must never reissue this reserved id
    library_reader_id: i64,
}

impl MemoryReaderRepository {
    pub fn new(store: Arc<Datastore>, library_reader_id: i64) -> Self {
        Self { store, library_reader_id }
    }
}

#[async_trait]
impl Repository<ReaderEntity> for MemoryReaderRepository {
    async fn create(&self, entity: &ReaderEntity) -> LedgerResult<ReaderEntity> {
        let row = entity.clone();
        let reserved = self.library_reader_id;
        self.store
            .transact(move |tables| {
                let mut row = row;
                row.reader_id = tables.next_reader_id(reserved);
                tables.readers.insert(row.reader_id, row.clone());
                Ok(row)
            })
            .await
    }

    async fn update(&self, entity: &ReaderEntity) -> LedgerResult<usize> {
        let row = entity.clone();
        self.store
            .transact(move |tables| {
                if !tables.readers.contains_key(&row.reader_id) {
                    return Err(LedgerError::not_found(
                        format!("reader not found for {}", row.reader_id).as_str()));
                }
                tables.readers.insert(row.reader_id, row);
                Ok(1)
            })
            .await
    }

    async fn get(&self, id: i64) -> LedgerResult<ReaderEntity> {
        self.store
            .read(|tables| {
                tables.readers.get(&id).cloned().ok_or_else(|| {
                    LedgerError::not_found(format!("reader not found for {}", id).as_str())
                })
            })
            .await
    }

    async fn delete(&self, id: i64) -> LedgerResult<usize> {
        self.store
            .transact(|tables| {
                tables.readers.remove(&id).map(|_| 1).ok_or_else(|| {
                    LedgerError::not_found(format!("reader not found for {}", id).as_str())
                })
            })
            .await
    }

    async fn find_all(&self) -> LedgerResult<Vec<ReaderEntity>> {
        self.store
            .read(|tables| Ok(tables.readers.values().cloned().collect()))
            .await
    }
}

impl ReaderRepository for MemoryReaderRepository {}
