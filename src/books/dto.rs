use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::books::domain::model::BookEntity;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::ledger::LoanState;
use crate::utils::date::opt_serializer;

// BookDto is a data transfer object for the catalog and lending services,
// enriched with the holder display name for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub holder_id: i64,
    pub holder_name: String,
    #[serde(with = "opt_serializer")]
    pub loan_start_date: Option<NaiveDate>,
}

impl BookDto {
    pub fn from_entity(entity: &BookEntity, holder_name: &str) -> BookDto {
        BookDto {
            book_id: entity.book_id,
            title: entity.title.to_string(),
            author: entity.author.to_string(),
            holder_id: entity.holder_id,
            holder_name: holder_name.to_string(),
            loan_start_date: entity.loan_start_date,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl Book for BookDto {
    fn state(&self, library_reader_id: i64) -> LoanState {
        if self.holder_id == library_reader_id {
            LoanState::OnShelf
        } else {
            LoanState::OnLoan
        }
    }
}
