pub mod service;

use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// AddBookOutcome tells whether add_book catalogued a new book or restocked an existing one.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) enum AddBookOutcome {
    Created(BookDto),
    Restocked(BookDto),
}

impl AddBookOutcome {
    pub fn book(&self) -> &BookDto {
        match self {
            AddBookOutcome::Created(book) => { book }
            AddBookOutcome::Restocked(book) => { book }
        }
    }
}

pub(crate) trait CatalogService {
    fn add_book(&mut self, title: &str, author: &str, isbn: &str, copies: i32) -> LibraryResult<AddBookOutcome>;
    fn search_by_title(&self, title: &str) -> Option<BookDto>;
    fn search_by_isbn(&self, isbn: &str) -> Option<BookDto>;
    fn search_by_author(&self, author: &str) -> Vec<BookDto>;
}
