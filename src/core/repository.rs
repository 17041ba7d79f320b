use async_trait::async_trait;

use crate::core::ledger::LedgerResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity; the store assigns the id and returns the stored row
    async fn create(&self, entity: &Entity) -> LedgerResult<Entity>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LedgerResult<usize>;

    // get an entity
    async fn get(&self, id: i64) -> LedgerResult<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> LedgerResult<usize>;

    // all rows of the logical table
    async fn find_all(&self) -> LedgerResult<Vec<Entity>>;
}
