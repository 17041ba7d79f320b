use serde::{Deserialize, Serialize};

use crate::core::domain::Identifiable;

// ReaderEntity abstracts a reader identity. One seeded row is the library
// pseudo-reader, a reserved identity meaning "not currently lent"; it is
// never deletable.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ReaderEntity {
    pub reader_id: i64,
    pub name: String,
}

impl ReaderEntity {
    // the store assigns reader_id on create
    pub fn new(name: &str) -> Self {
        Self {
            reader_id: 0,
            name: name.to_string(),
        }
    }
}

impl Identifiable for ReaderEntity {
    fn id(&self) -> i64 {
        self.reader_id
    }
}

#[cfg(test)]
mod tests {
    use crate::readers::domain::model::ReaderEntity;

    #[tokio::test]
    async fn test_should_build_readers() {
        let reader = ReaderEntity::new("Ada");
        assert_eq!("Ada", reader.name.as_str());
        assert_eq!(0, reader.reader_id);
    }
}
