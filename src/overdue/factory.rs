use std::sync::Arc;

use crate::books;
use crate::core::domain::Configuration;
use crate::gateway::memory::Datastore;
use crate::overdue::domain::service::OverdueServiceImpl;
use crate::overdue::domain::OverdueService;
use crate::readers;

pub async fn create_overdue_service(config: &Configuration,
                                    store: &Arc<Datastore>) -> Box<dyn OverdueService> {
    let book_repo = books::factory::create_book_repository(store).await;
    let reader_repo = readers::factory::create_reader_repository(config, store).await;
    Box::new(OverdueServiceImpl::new(config, book_repo, reader_repo))
}
