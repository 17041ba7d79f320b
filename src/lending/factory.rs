use std::sync::Arc;

use crate::books;
use crate::core::domain::Configuration;
use crate::gateway::memory::Datastore;
use crate::lending::domain::service::LendingServiceImpl;
use crate::lending::domain::LendingService;
use crate::readers;

pub async fn create_lending_service(config: &Configuration,
                                    store: &Arc<Datastore>) -> Box<dyn LendingService> {
    let book_repo = books::factory::create_book_repository(store).await;
    let reader_svc = readers::factory::create_reader_service(config, store).await;
    Box::new(LendingServiceImpl::new(config, book_repo, reader_svc))
}
