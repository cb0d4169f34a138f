use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Clone)]
pub enum LibraryError {
    // The member id does not resolve to a registered member.
    MemberNotFound {
        member_id: String,
    },
    // No book is indexed under the (case-insensitive) title.
    BookNotFound {
        title: String,
    },
    // The member already holds a copy of the book resolved from the title, so a
    // second copy is not issued.
    AlreadyBorrowed {
        member_id: String,
        title: String,
    },
    // Every copy of the book is checked out.
    Unavailable {
        title: String,
    },
    // The member tried to return a book it does not hold.
    NotBorrowed {
        member_id: String,
        title: String,
        author: String,
    },
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn member_not_found(member_id: &str) -> LibraryError {
        LibraryError::MemberNotFound { member_id: member_id.to_string() }
    }

    pub fn book_not_found(title: &str) -> LibraryError {
        LibraryError::BookNotFound { title: title.to_string() }
    }

    pub fn already_borrowed(member_id: &str, title: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { member_id: member_id.to_string(), title: title.to_string() }
    }

    pub fn unavailable(title: &str) -> LibraryError {
        LibraryError::Unavailable { title: title.to_string() }
    }

    pub fn not_borrowed(member_id: &str, title: &str, author: &str) -> LibraryError {
        LibraryError::NotBorrowed {
            member_id: member_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // circulation errors are expected outcomes of a request, the rest indicate a broken
    // environment or a bug in the caller
    pub fn is_circulation(&self) -> bool {
        match self {
            LibraryError::MemberNotFound { .. } => { true }
            LibraryError::BookNotFound { .. } => { true }
            LibraryError::AlreadyBorrowed { .. } => { true }
            LibraryError::Unavailable { .. } => { true }
            LibraryError::NotBorrowed { .. } => { true }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl std::error::Error for LibraryError {}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::MemberNotFound { member_id } => {
                write!(f, "member {} not found", member_id)
            }
            LibraryError::BookNotFound { title } => {
                write!(f, "book with title {} not found", title)
            }
            LibraryError::AlreadyBorrowed { member_id, title } => {
                write!(f, "member {} already borrowed {}", member_id, title)
            }
            LibraryError::Unavailable { title } => {
                write!(f, "no copies of {} are available", title)
            }
            LibraryError::NotBorrowed { member_id, title, author } => {
                write!(f, "member {} has not borrowed {} by {}", member_id, title, author)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
