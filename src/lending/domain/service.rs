use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tracing::info;

use crate::books::domain::model::BookEntity;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::ledger::{LedgerError, LedgerResult};
use crate::lending::domain::LendingService;
use crate::readers::domain::ReaderService;

pub struct LendingServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
    reader_service: Box<dyn ReaderService>,
}

impl LendingServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               reader_service: Box<dyn ReaderService>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
            reader_service,
        }
    }

    // shared validation for create and modify: all fields required, the
    // reader reference must resolve, and the holder/date pairing must hold.
    // A date supplied together with the library pseudo-reader is discarded.
    async fn validated_fields(&self, title: &str, author: &str, reader_input: &str,
                              loan_start: Option<NaiveDate>)
                              -> LedgerResult<(String, String, i64, Option<NaiveDate>)> {
        let title = title.trim();
        let author = author.trim();
        let reader_input = reader_input.trim();
        if title.is_empty() || author.is_empty() || reader_input.is_empty() {
            return Err(LedgerError::validation(
                "title, author and holder are all required", Some("400".to_string())));
        }
        let holder_id = self.reader_service.resolve_reader_reference(reader_input).await?;
        let loan_start = if holder_id == self.config.library_reader_id {
            None
        } else if loan_start.is_some() {
            loan_start
        } else {
            return Err(LedgerError::validation(
                "loan start date is required when the book is lent out",
                Some("400".to_string())));
        };
        Ok((title.to_string(), author.to_string(), holder_id, loan_start))
    }

    async fn holder_name(&self, holder_id: i64) -> LedgerResult<String> {
        if holder_id == self.config.library_reader_id {
            return Ok(self.config.library_reader_name.to_string());
        }
        self.reader_service.find_reader_by_id(holder_id).await.map(|r| r.name)
    }
}

#[async_trait]
impl LendingService for LendingServiceImpl {
    async fn create_book(&self, title: &str, author: &str, reader_input: &str,
                         loan_start: Option<NaiveDate>) -> LedgerResult<BookDto> {
        let (title, author, holder_id, loan_start) =
            self.validated_fields(title, author, reader_input, loan_start).await?;
        let created = self
            .book_repository
            .create(&BookEntity::new(title.as_str(), author.as_str(), holder_id, loan_start))
            .await?;
        let holder_name = self.holder_name(holder_id).await?;
        Ok(BookDto::from_entity(&created, holder_name.as_str()))
    }

    async fn update_book(&self, book_id: i64, title: &str, author: &str, reader_input: &str,
                         loan_start: Option<NaiveDate>) -> LedgerResult<BookDto> {
        let existing = self.book_repository.get(book_id).await?;
        let (title, author, holder_id, loan_start) =
            self.validated_fields(title, author, reader_input, loan_start).await?;
        let mut entity = existing;
        entity.title = title;
        entity.author = author;
        entity.holder_id = holder_id;
        entity.loan_start_date = loan_start;
        let _ = self.book_repository.update(&entity).await?;
        let holder_name = self.holder_name(holder_id).await?;
        Ok(BookDto::from_entity(&entity, holder_name.as_str()))
    }

    async fn remove_book(&self, book_id: i64) -> LedgerResult<()> {
        self.book_repository.delete(book_id).await.map(|_| ())
    }

    async fn borrow_books(&self, book_ids: &[i64], reader_id: i64) -> LedgerResult<Vec<BookDto>> {
        if book_ids.is_empty() {
            return Err(LedgerError::validation(
                "select at least one book to borrow", Some("400".to_string())));
        }
        if reader_id == self.config.library_reader_id {
            return Err(LedgerError::validation(
                "borrow target must be a reader, not the library", Some("400".to_string())));
        }
        let reader = self.reader_service.find_reader_by_id(reader_id).await?;
        for id in book_ids {
            let book = self.book_repository.get(*id).await?;
            if !book.is_on_shelf(self.config.library_reader_id) {
                return Err(LedgerError::validation(
                    format!("book {} is not on the shelf", id).as_str(),
                    Some("400".to_string())));
            }
        }
        // one date for the whole batch, local calendar day
        let today = Local::now().date_naive();
        let n = self
            .book_repository
            .assign_holder(book_ids, reader_id, Some(today))
            .await?;
        info!("borrowed {} book(s) for reader {}", n, reader_id);
        let mut dtos = Vec::with_capacity(book_ids.len());
        for id in book_ids {
            let book = self.book_repository.get(*id).await?;
            dtos.push(BookDto::from_entity(&book, reader.name.as_str()));
        }
        Ok(dtos)
    }

    async fn return_books(&self, book_ids: &[i64]) -> LedgerResult<Vec<BookDto>> {
        if book_ids.is_empty() {
            return Err(LedgerError::validation(
                "select at least one book to return", Some("400".to_string())));
        }
        let n = self
            .book_repository
            .assign_holder(book_ids, self.config.library_reader_id, None)
            .await?;
        info!("returned {} book(s) to the shelf", n);
        let mut dtos = Vec::with_capacity(book_ids.len());
        for id in book_ids {
            let book = self.book_repository.get(*id).await?;
            dtos.push(BookDto::from_entity(&book, self.config.library_reader_name.as_str()));
        }
        Ok(dtos)
    }
}
