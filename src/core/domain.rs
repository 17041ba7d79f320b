use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the lending ledger
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    // reserved reader id meaning "on the shelf, not lent out"
    pub library_reader_id: i64,
    pub library_reader_name: String,
    // free-text inputs that resolve to the library pseudo-reader
    pub library_aliases: Vec<String>,
    pub loan_period_months: u32,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            library_reader_id: 9999,
            library_reader_name: "könyvtár".to_string(),
            library_aliases: vec![
                "könyvtár".to_string(),
                "konyvtar".to_string(),
                "library".to_string(),
            ],
            loan_period_months: 1,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
