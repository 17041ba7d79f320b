use async_trait::async_trait;

use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::ledger::{LedgerError, LedgerResult};
use crate::readers::domain::model::ReaderEntity;
use crate::readers::domain::ReaderService;
use crate::readers::dto::ReaderDto;
use crate::readers::repository::ReaderRepository;

// Resolution chain over a reader snapshot plus the alias set. A numeric
// reference that misses never falls through to the name scan; a duplicate
// name resolves to the first match.
pub(crate) fn resolve_reader_id(input: &str, readers: &[ReaderEntity],
                                config: &Configuration) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(numeric_id) = input.parse::<i64>() {
        return readers.iter().find(|r| r.reader_id == numeric_id).map(|r| r.reader_id);
    }
    let lowered = input.to_lowercase();
    if config.library_aliases.iter().any(|alias| alias.to_lowercase() == lowered) {
        return Some(config.library_reader_id);
    }
    readers.iter().find(|r| r.name.to_lowercase() == lowered).map(|r| r.reader_id)
}

pub struct ReaderServiceImpl {
    config: Configuration,
    reader_repository: Box<dyn ReaderRepository>,
    book_repository: Box<dyn BookRepository>,
}

impl ReaderServiceImpl {
    pub fn new(config: &Configuration, reader_repository: Box<dyn ReaderRepository>,
               book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            config: config.clone(),
            reader_repository,
            book_repository,
        }
    }
}

#[async_trait]
impl ReaderService for ReaderServiceImpl {
    async fn add_reader(&self, name: &str) -> LedgerResult<ReaderDto> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::validation(
                "reader name must not be empty", Some("400".to_string())));
        }
        let created = self.reader_repository.create(&ReaderEntity::new(name)).await?;
        Ok(ReaderDto::from(&created))
    }

    async fn resolve_reader_reference(&self, input: &str) -> LedgerResult<i64> {
        let readers = self.reader_repository.find_all().await?;
        resolve_reader_id(input, &readers, &self.config).ok_or_else(|| {
            LedgerError::reader_unresolved(
                format!("no reader matches reference '{}'", input.trim()).as_str())
        })
    }

    async fn list_readers(&self, include_library_reader: bool) -> LedgerResult<Vec<ReaderDto>> {
        let mut readers: Vec<ReaderDto> = self
            .reader_repository
            .find_all()
            .await?
            .iter()
            .filter(|r| include_library_reader || r.reader_id != self.config.library_reader_id)
            .map(ReaderDto::from)
            .collect();
        readers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(readers)
    }

    async fn find_reader_by_id(&self, id: i64) -> LedgerResult<ReaderDto> {
        self.reader_repository.get(id).await.map(|r| ReaderDto::from(&r))
    }

    async fn rename_reader(&self, id: i64, new_name: &str) -> LedgerResult<ReaderDto> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(LedgerError::validation(
                "reader name must not be empty", Some("400".to_string())));
        }
        let mut reader = self.reader_repository.get(id).await?;
        reader.name = new_name.to_string();
        let _ = self.reader_repository.update(&reader).await?;
        Ok(ReaderDto::from(&reader))
    }

    async fn remove_reader(&self, id: i64) -> LedgerResult<()> {
        if id == self.config.library_reader_id {
            return Err(LedgerError::forbidden(
                format!("the library reader ({}) cannot be deleted", id).as_str()));
        }
        let held = self.book_repository.count_by_holder(id).await?;
        if held > 0 {
            return Err(LedgerError::has_active_loans(
                format!("reader {} still holds {} borrowed book(s)", id, held).as_str()));
        }
        self.reader_repository.delete(id).await.map(|_| ())
    }
}

impl From<&ReaderEntity> for ReaderDto {
    fn from(other: &ReaderEntity) -> ReaderDto {
        ReaderDto {
            reader_id: other.reader_id,
            name: other.name.to_string(),
        }
    }
}

impl From<&ReaderDto> for ReaderEntity {
    fn from(other: &ReaderDto) -> ReaderEntity {
        ReaderEntity {
            reader_id: other.reader_id,
            name: other.name.to_string(),
        }
    }
}
