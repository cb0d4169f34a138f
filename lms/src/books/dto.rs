use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: i32,
    pub available_copies: i32,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, copies: i32) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            total_copies: copies,
            available_copies: copies,
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            total_copies: other.total_copies,
            available_copies: other.available_copies,
        }
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {}). Copies available for borrowing: {}",
               self.title, self.author, self.isbn, self.available_copies)
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn available_copies(&self) -> i32 {
        self.available_copies
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::core::domain::Identifiable;

    #[test]
    fn test_should_build_books() {
        let book = BookDto::new("Dune", "Frank Herbert", "111", 2);
        assert_eq!("111", book.isbn.as_str());
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("111", book.id().as_str());
    }

    #[test]
    fn test_should_copy_counts_from_entity() {
        let mut entity = BookEntity::new("Dune", "Frank Herbert", "111", 2);
        entity.borrow_copy();
        let book = BookDto::from(&entity);
        assert_eq!(2, book.total_copies);
        assert_eq!(1, book.available_copies);
        assert_eq!(entity.to_string(), book.to_string());
    }
}
