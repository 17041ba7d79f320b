use std::sync::Arc;

use crate::books;
use crate::core::domain::Configuration;
use crate::gateway::memory::Datastore;
use crate::readers::domain::service::ReaderServiceImpl;
use crate::readers::domain::ReaderService;
use crate::readers::repository::memory_reader_repository::MemoryReaderRepository;
use crate::readers::repository::ReaderRepository;

pub async fn create_reader_repository(config: &Configuration,
                                      store: &Arc<Datastore>) -> Box<dyn ReaderRepository> {
    Box::new(MemoryReaderRepository::new(store.clone(), config.library_reader_id))
}

pub async fn create_reader_service(config: &Configuration,
                                   store: &Arc<Datastore>) -> Box<dyn ReaderService> {
    let reader_repo = create_reader_repository(config, store).await;
    let book_repo = books::factory::create_book_repository(store).await;
    Box::new(ReaderServiceImpl::new(config, reader_repo, book_repo))
}
