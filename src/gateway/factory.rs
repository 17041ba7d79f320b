use std::sync::Arc;

use crate::core::domain::Configuration;
use crate::gateway::memory::Datastore;

pub async fn create_datastore(config: &Configuration) -> Arc<Datastore> {
    Arc::new(Datastore::new(config))
}
