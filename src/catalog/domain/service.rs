use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::ledger::LedgerResult;
use crate::readers::repository::ReaderRepository;

// display label for a holder id with no matching reader row; dangling
// references are tolerated, not treated as errors
pub(crate) fn holder_display_name(names: &BTreeMap<i64, String>, holder_id: i64) -> String {
    names
        .get(&holder_id)
        .cloned()
        .unwrap_or_else(|| format!("[ID: {}]", holder_id))
}

pub(crate) fn sort_by_title_author(books: &mut [BookDto]) {
    books.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.author.cmp(&b.author)));
}

pub struct CatalogServiceImpl {
    library_reader_id: i64,
    book_repository: Box<dyn BookRepository>,
    reader_repository: Box<dyn ReaderRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               reader_repository: Box<dyn ReaderRepository>) -> Self {
        Self {
            library_reader_id: config.library_reader_id,
            book_repository,
            reader_repository,
        }
    }

    async fn holder_names(&self) -> LedgerResult<BTreeMap<i64, String>> {
        let readers = self.reader_repository.find_all().await?;
        Ok(readers.iter().map(|r| (r.reader_id, r.name.to_string())).collect())
    }

    async fn enrich(&self, books: Vec<BookEntity>) -> LedgerResult<Vec<BookDto>> {
        let names = self.holder_names().await?;
        let mut dtos: Vec<BookDto> = books
            .iter()
            .map(|b| BookDto::from_entity(b, holder_display_name(&names, b.holder_id).as_str()))
            .collect();
        sort_by_title_author(&mut dtos);
        Ok(dtos)
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LedgerResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        self.enrich(books).await
    }

    async fn find_book_by_id(&self, id: i64) -> LedgerResult<BookDto> {
        let book = self.book_repository.get(id).await?;
        let names = self.holder_names().await?;
        Ok(BookDto::from_entity(&book, holder_display_name(&names, book.holder_id).as_str()))
    }

    async fn list_available_books(&self) -> LedgerResult<Vec<BookDto>> {
        let books = self.book_repository.find_by_holder(self.library_reader_id).await?;
        self.enrich(books).await
    }

    async fn list_books_held_by(&self, reader_id: i64) -> LedgerResult<Vec<BookDto>> {
        let books = self.book_repository.find_by_holder(reader_id).await?;
        self.enrich(books).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::books::domain::model::BookEntity;
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::ledger::LedgerError;
    use crate::gateway::factory::create_datastore;
    use crate::readers::domain::model::ReaderEntity;
    use crate::readers::factory::create_reader_repository;

    #[tokio::test]
    async fn test_should_list_books_sorted_and_enriched() {
        let config = Configuration::new();
        let store = create_datastore(&config).await;
        let catalog_svc = factory::create_catalog_service(&config, &store).await;
        let book_repo = create_book_repository(&store).await;
        let reader_repo = create_reader_repository(&config, &store).await;

        let ada = reader_repo.create(&ReaderEntity::new("Ada")).await.expect("should add reader");
        let date = NaiveDate::from_ymd_opt(2024, 3, 1);
        let _ = book_repo
            .create(&BookEntity::new("Dune", "Herbert", config.library_reader_id, None))
            .await
            .expect("should create book");
        let _ = book_repo
            .create(&BookEntity::new("Dune", "Anderson", ada.reader_id, date))
            .await
            .expect("should create book");
        let _ = book_repo
            .create(&BookEntity::new("Amber", "Zelazny", ada.reader_id, date))
            .await
            .expect("should create book");

        let books = catalog_svc.list_books().await.expect("should list books");
        let keys: Vec<(&str, &str)> = books
            .iter()
            .map(|b| (b.title.as_str(), b.author.as_str()))
            .collect();
        assert_eq!(vec![("Amber", "Zelazny"), ("Dune", "Anderson"), ("Dune", "Herbert")], keys);
        assert_eq!("Ada", books[0].holder_name.as_str());
        assert_eq!(config.library_reader_name, books[2].holder_name);
    }

    #[tokio::test]
    async fn test_should_render_placeholder_for_dangling_holder() {
        let config = Configuration::new();
        let store = create_datastore(&config).await;
        let catalog_svc = factory::create_catalog_service(&config, &store).await;
        let book_repo = create_book_repository(&store).await;
        let reader_repo = create_reader_repository(&config, &store).await;

        let ghost = reader_repo.create(&ReaderEntity::new("Ghost")).await.expect("should add reader");
        let date = NaiveDate::from_ymd_opt(2024, 3, 1);
        let book = book_repo
            .create(&BookEntity::new("title", "author", ghost.reader_id, date))
            .await
            .expect("should create book");
        // storage tolerates the dangling reference once the reader row is gone
        let _ = reader_repo.delete(ghost.reader_id).await.expect("should delete reader");

        let loaded = catalog_svc.find_book_by_id(book.book_id).await.expect("should get book");
        assert_eq!(format!("[ID: {}]", ghost.reader_id), loaded.holder_name);
    }

    #[tokio::test]
    async fn test_should_list_available_and_held_books() {
        let config = Configuration::new();
        let store = create_datastore(&config).await;
        let catalog_svc = factory::create_catalog_service(&config, &store).await;
        let book_repo = create_book_repository(&store).await;
        let reader_repo = create_reader_repository(&config, &store).await;

        let ada = reader_repo.create(&ReaderEntity::new("Ada")).await.expect("should add reader");
        let date = NaiveDate::from_ymd_opt(2024, 3, 1);
        let shelf = book_repo
            .create(&BookEntity::new("Dune", "Herbert", config.library_reader_id, None))
            .await
            .expect("should create book");
        let lent = book_repo
            .create(&BookEntity::new("Amber", "Zelazny", ada.reader_id, date))
            .await
            .expect("should create book");

        let available = catalog_svc.list_available_books().await.expect("should list available");
        assert_eq!(1, available.len());
        assert_eq!(shelf.book_id, available[0].book_id);

        let held = catalog_svc
            .list_books_held_by(ada.reader_id)
            .await
            .expect("should list held books");
        assert_eq!(1, held.len());
        assert_eq!(lent.book_id, held[0].book_id);
    }

    #[tokio::test]
    async fn test_should_fail_for_unknown_book() {
        let config = Configuration::new();
        let store = create_datastore(&config).await;
        let catalog_svc = factory::create_catalog_service(&config, &store).await;

        let res = catalog_svc.find_book_by_id(404).await;
        assert!(matches!(res, Err(LedgerError::NotFound { message: _ })));
    }
}
