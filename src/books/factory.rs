use std::sync::Arc;

use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::books::repository::BookRepository;
use crate::gateway::memory::Datastore;

pub async fn create_book_repository(store: &Arc<Datastore>) -> Box<dyn BookRepository> {
    Box::new(MemoryBookRepository::new(store.clone()))
}
