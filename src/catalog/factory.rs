use std::sync::Arc;

use crate::books;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::gateway::memory::Datastore;
use crate::readers;

pub async fn create_catalog_service(config: &Configuration,
                                    store: &Arc<Datastore>) -> Box<dyn CatalogService> {
    let book_repo = books::factory::create_book_repository(store).await;
    let reader_repo = readers::factory::create_reader_repository(config, store).await;
    Box::new(CatalogServiceImpl::new(config, book_repo, reader_repo))
}
