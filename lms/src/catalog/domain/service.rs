use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookKey;
use crate::catalog::domain::{AddBookOutcome, CatalogService};
use crate::core::circulation::Library;
use crate::core::events::{DomainEvent, EventName};
use crate::core::library::LibraryResult;

impl Library {
    fn book_dto(&self, key: BookKey) -> Option<BookDto> {
        self.book_repository.get(&key).map(BookDto::from)
    }

    // restocks when the ISBN is already catalogued under the same title and author
    fn restock(&mut self, title: &str, author: &str, isbn: &str, copies: i32) -> Option<BookDto> {
        let key = self.book_repository.find_by_isbn(isbn)?;
        let existing = self.book_repository.get_mut(&key)?;
        if !existing.matches(title, author) {
            return None;
        }
        existing.add_copies(copies);
        Some(BookDto::from(&*existing))
    }
}

impl CatalogService for Library {
    fn add_book(&mut self, title: &str, author: &str, isbn: &str, copies: i32) -> LibraryResult<AddBookOutcome> {
        if let Some(book) = self.restock(title, author, isbn, copies) {
            info!(isbn, available = book.available_copies, "book restocked");
            let metadata = self.metadata();
            self.publish(DomainEvent::new(EventName::BookRestocked, isbn, &metadata, &book));
            return Ok(AddBookOutcome::Restocked(book));
        }

        let entity = BookEntity::new(title, author, isbn, copies);
        let book = BookDto::from(&entity);
        let _ = self.book_repository.create(entity)?;
        info!(isbn, title, author, copies, "book added");
        let metadata = self.metadata();
        self.publish(DomainEvent::new(EventName::BookAdded, isbn, &metadata, &book));
        Ok(AddBookOutcome::Created(book))
    }

    fn search_by_title(&self, title: &str) -> Option<BookDto> {
        self.book_repository.find_by_title(title).and_then(|key| self.book_dto(key))
    }

    fn search_by_isbn(&self, isbn: &str) -> Option<BookDto> {
        self.book_repository.find_by_isbn(isbn).and_then(|key| self.book_dto(key))
    }

    fn search_by_author(&self, author: &str) -> Vec<BookDto> {
        self.book_repository.find_by_author(author).into_iter()
            .filter_map(|key| self.book_dto(key))
            .collect()
    }
}
