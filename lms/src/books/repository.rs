pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

// BookKey is the arena slot of a book; indexes hold keys, the repository owns the books.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct BookKey(pub(crate) usize);

pub(crate) trait BookRepository: Repository<BookKey, BookEntity> {
    fn find_by_isbn(&self, isbn: &str) -> Option<BookKey>;

    // title match ignores case
    fn find_by_title(&self, title: &str) -> Option<BookKey>;

    // author match ignores case, books come back in the order they were catalogued
    fn find_by_author(&self, author: &str) -> Vec<BookKey>;
}
