use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::core::domain::Configuration;
use crate::core::ledger::LedgerResult;
use crate::readers::domain::model::ReaderEntity;

// Tables holds the two logical tables of the ledger schema. Cloning is the
// unit of work: a transaction mutates a clone and the clone replaces the
// shared state only on commit.
#[derive(Debug, Default, Clone)]
pub struct Tables {
    pub books: BTreeMap<i64, BookEntity>,
    pub readers: BTreeMap<i64, ReaderEntity>,
}

impl Tables {
    // rowid-style allocation: one past the largest existing id
    pub fn next_book_id(&self) -> i64 {
        self.books.keys().max().copied().unwrap_or(0) + 1
    }

    // same allocation for readers, except the reserved library pseudo-reader
    // id is never handed out to a real reader
    pub fn next_reader_id(&self, reserved_id: i64) -> i64 {
        let mut next = self.readers.keys().max().copied().unwrap_or(0) + 1;
        if next == reserved_id {
            next += 1;
        }
        next
    }
}

// Datastore is the persistence gateway: the only component touching durable
// state. Repositories consume it through two scopes, a shared read and a
// committed-or-rolled-back write.
#[derive(Debug)]
pub struct Datastore {
    tables: RwLock<Tables>,
}

impl Datastore {
    // seeds the library pseudo-reader row once; the schema is assumed to
    // exist from here on
    pub fn new(config: &Configuration) -> Self {
        let mut tables = Tables::default();
        tables.readers.insert(
            config.library_reader_id,
            ReaderEntity {
                reader_id: config.library_reader_id,
                name: config.library_reader_name.to_string(),
            },
        );
        Self { tables: RwLock::new(tables) }
    }

    pub async fn read<T>(&self, f: impl FnOnce(&Tables) -> LedgerResult<T>) -> LedgerResult<T> {
        let guard = self.tables.read().await;
        f(&guard)
    }

    // applies f to a working copy and commits it only when f succeeds, so a
    // failure partway through a multi-row write leaves storage unchanged
    pub async fn transact<T>(&self, f: impl FnOnce(&mut Tables) -> LedgerResult<T>) -> LedgerResult<T> {
        let mut guard = self.tables.write().await;
        let mut working = guard.clone();
        let out = f(&mut working)?;
        *guard = working;
        Ok(out)
    }
}
