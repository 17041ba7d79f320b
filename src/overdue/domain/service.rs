use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{Local, Months, NaiveDate};

use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::service::sort_by_title_author;
use crate::core::domain::Configuration;
use crate::core::ledger::{LedgerError, LedgerResult};
use crate::overdue::domain::OverdueService;
use crate::readers::dto::ReaderDto;
use crate::readers::repository::ReaderRepository;

// A loan is overdue once the start date plus the loan period, as calendar
// months, lies strictly before today. Month-end overflow clamps to the last
// day of the target month (Jan 31 + 1 month is Feb 28/29).
pub(crate) fn is_overdue(loan_start: NaiveDate, loan_period_months: u32,
                         today: NaiveDate) -> bool {
    match loan_start.checked_add_months(Months::new(loan_period_months)) {
        Some(due) => due < today,
        None => false,
    }
}

pub struct OverdueServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
    reader_repository: Box<dyn ReaderRepository>,
}

impl OverdueServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               reader_repository: Box<dyn ReaderRepository>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
            reader_repository,
        }
    }

    fn book_overdue(&self, loan_start: Option<NaiveDate>, today: NaiveDate) -> bool {
        loan_start
            .map(|d| is_overdue(d, self.config.loan_period_months, today))
            .unwrap_or(false)
    }
}

#[async_trait]
impl OverdueService for OverdueServiceImpl {
    async fn readers_with_overdue_books(&self) -> LedgerResult<Vec<ReaderDto>> {
        let today = Local::now().date_naive();
        let books = self.book_repository.find_all().await?;
        let overdue_holders: BTreeSet<i64> = books
            .iter()
            .filter(|b| b.holder_id != self.config.library_reader_id)
            .filter(|b| self.book_overdue(b.loan_start_date, today))
            .map(|b| b.holder_id)
            .collect();
        // dangling holder ids have no reader row and drop out here
        let mut readers: Vec<ReaderDto> = self
            .reader_repository
            .find_all()
            .await?
            .iter()
            .filter(|r| overdue_holders.contains(&r.reader_id))
            .map(ReaderDto::from)
            .collect();
        readers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(readers)
    }

    async fn overdue_books_of(&self, reader_id: i64) -> LedgerResult<Vec<BookDto>> {
        let reader = match self.reader_repository.get(reader_id).await {
            Ok(reader) => reader,
            Err(LedgerError::NotFound { .. }) => return Ok(vec![]),
            Err(err) => return Err(err),
        };
        let today = Local::now().date_naive();
        let mut books: Vec<BookDto> = self
            .book_repository
            .find_by_holder(reader_id)
            .await?
            .iter()
            .filter(|b| self.book_overdue(b.loan_start_date, today))
            .map(|b| BookDto::from_entity(b, reader.name.as_str()))
            .collect();
        sort_by_title_author(&mut books);
        Ok(books)
    }
}
