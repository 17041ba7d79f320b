pub mod memory_reader_repository;

use crate::core::repository::Repository;
use crate::readers::domain::model::ReaderEntity;

// storage seam of the reader directory; the resolution chain itself works on
// an in-memory snapshot from find_all
pub trait ReaderRepository: Repository<ReaderEntity> {}
