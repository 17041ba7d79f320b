use serde::{Deserialize, Serialize};

use crate::core::domain::Identifiable;

// ReaderDto is a data transfer object for the reader directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderDto {
    pub reader_id: i64,
    pub name: String,
}

impl Identifiable for ReaderDto {
    fn id(&self) -> i64 {
        self.reader_id
    }
}
