use std::collections::HashMap;
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::repository::{BookKey, BookRepository};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository owns every book ever catalogued in an append-only arena. The ISBN
// and title indexes are last-write-wins, so a superseded book stays reachable through the
// indexes that still point at it.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
    by_isbn: HashMap<String, BookKey>,
    by_title: HashMap<String, BookKey>,
    by_author: HashMap<String, Vec<BookKey>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: vec![],
            by_isbn: HashMap::new(),
            by_title: HashMap::new(),
            by_author: HashMap::new(),
        }
    }
}

fn index_key(value: &str) -> String {
    value.to_lowercase()
}

impl Repository<BookKey, BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: BookEntity) -> LibraryResult<BookKey> {
        let key = BookKey(self.books.len());
        self.by_isbn.insert(entity.isbn.to_string(), key);
        if let Some(previous) = self.by_title.insert(index_key(entity.title.as_str()), key) {
            debug!(title = entity.title.as_str(), previous = previous.0, "title index now points to a newer book");
        }
        self.by_author.entry(index_key(entity.author.as_str())).or_default().push(key);
        self.books.push(entity);
        Ok(key)
    }

    fn get(&self, key: &BookKey) -> Option<&BookEntity> {
        self.books.get(key.0)
    }

    fn get_mut(&mut self, key: &BookKey) -> Option<&mut BookEntity> {
        self.books.get_mut(key.0)
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_isbn(&self, isbn: &str) -> Option<BookKey> {
        self.by_isbn.get(isbn).copied()
    }

    fn find_by_title(&self, title: &str) -> Option<BookKey> {
        self.by_title.get(index_key(title).as_str()).copied()
    }

    fn find_by_author(&self, author: &str) -> Vec<BookKey> {
        self.by_author.get(index_key(author).as_str()).cloned().unwrap_or_default()
    }
}
