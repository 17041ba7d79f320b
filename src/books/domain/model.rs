use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::ledger::LoanState;
use crate::utils::date::opt_serializer;

// BookEntity abstracts a physical book in the lending ledger. The holder id
// points at the reader currently holding the book; the reserved library
// pseudo-reader id means the book sits on the shelf. Invariant: the holder is
// the library pseudo-reader exactly when loan_start_date is absent.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub holder_id: i64,
    #[serde(with = "opt_serializer")]
    pub loan_start_date: Option<NaiveDate>,
}

impl BookEntity {
    // the store assigns book_id on create
    pub fn new(title: &str, author: &str, holder_id: i64, loan_start_date: Option<NaiveDate>) -> Self {
        Self {
            book_id: 0,
            title: title.to_string(),
            author: author.to_string(),
            holder_id,
            loan_start_date,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl Book for BookEntity {
    fn state(&self, library_reader_id: i64) -> LoanState {
        if self.holder_id == library_reader_id {
            LoanState::OnShelf
        } else {
            LoanState::OnLoan
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::books::domain::model::BookEntity;
    use crate::books::domain::Book;
    use crate::core::ledger::LoanState;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("title", "author", 9999, None);
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(LoanState::OnShelf, book.state(9999));
        assert!(book.is_on_shelf(9999));
    }

    #[tokio::test]
    async fn test_should_derive_on_loan_state() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1);
        let book = BookEntity::new("title", "author", 12, date);
        assert_eq!(LoanState::OnLoan, book.state(9999));
        assert!(!book.is_on_shelf(9999));
    }
}
