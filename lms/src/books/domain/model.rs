use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity abstracts a catalogued edition together with the number of physical copies
// the library owns and how many of them are on the shelf.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: i32,
    pub available_copies: i32,
}

impl BookEntity {
    // copies is taken as given, a zero or negative count yields a book that can never be issued
    pub fn new(title: &str, author: &str, isbn: &str, copies: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            total_copies: copies,
            available_copies: copies,
        }
    }

    pub fn add_copies(&mut self, extra: i32) {
        if extra > 0 {
            self.total_copies = self.total_copies.saturating_add(extra);
            self.available_copies = self.available_copies.saturating_add(extra);
        }
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    pub fn borrow_copy(&mut self) -> bool {
        if self.available_copies > 0 {
            self.available_copies -= 1;
            true
        } else {
            false
        }
    }

    pub fn return_copy(&mut self) {
        if self.available_copies < self.total_copies {
            self.available_copies += 1;
        }
    }

    pub fn matches(&self, title: &str, author: &str) -> bool {
        self.title == title && self.author == author
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {}). Copies available for borrowing: {}",
               self.title, self.author, self.isbn, self.available_copies)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
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
