use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::AddBookCommandResponse;
use crate::catalog::command::search_book_cmd::SearchBy;
use crate::checkout::dto::{BorrowedBooksDto, CheckoutDto};
use crate::core::controller::Transcript;
use crate::core::library::LibraryError;
use crate::members::dto::MemberDto;

pub(crate) fn added_book(res: &AddBookCommandResponse) -> Transcript {
    let book = &res.book;
    if res.restocked {
        vec![format!("Book already exists. Updated the number of copies in the library. \
                      Copies available for borrowing: {}", book.available_copies)]
    } else {
        vec![
            format!("Book added: {} by {} (ISBN: {}).", book.title, book.author, book.isbn),
            format!("Copies available for borrowing: {}", book.available_copies),
        ]
    }
}

pub(crate) fn added_member(member: &MemberDto) -> Transcript {
    vec![format!("Member added: {} (Member ID: {})", member.name, member.member_id)]
}

pub(crate) fn search_results(by: SearchBy, query: &str, books: &[BookDto]) -> Transcript {
    match by {
        SearchBy::Title | SearchBy::Isbn => {
            match (books.first(), by) {
                (Some(book), _) => { vec![format!("Book found: {}", book)] }
                (None, SearchBy::Title) => { vec![format!("No book found with the title: {}", query)] }
                (None, _) => { vec![format!("No book found with the ISBN: {}", query)] }
            }
        }
        SearchBy::Author => {
            if books.is_empty() {
                return vec![format!("No books found by {}", query)];
            }
            let mut lines = vec![format!("Books by {}:", query)];
            lines.extend(books.iter().map(|book| format!(
                "{} (ISBN: {}). Copies available for borrowing: {}",
                book.title, book.isbn, book.available_copies)));
            lines
        }
    }
}

pub(crate) fn issued_book(checkout: &CheckoutDto) -> Transcript {
    vec![format!("Book issued: {} to {}.", checkout.title, checkout.member_id)]
}

pub(crate) fn returned_book(checkout: &CheckoutDto) -> Transcript {
    vec![format!("Book returned: {} by {} (ISBN: {}).", checkout.title, checkout.author, checkout.isbn)]
}

pub(crate) fn borrowed_books(borrowed: &BorrowedBooksDto) -> Transcript {
    let mut lines = vec![format!("{} borrowed books:", borrowed.member_id)];
    if borrowed.books.is_empty() {
        lines.push("No books borrowed.".to_string());
    }
    lines.extend(borrowed.books.iter().map(|book| format!("{} (ISBN: {}).", book.title, book.isbn)));
    lines
}

pub(crate) fn circulation_error(err: &LibraryError) -> Transcript {
    match err {
        LibraryError::MemberNotFound { .. } => {
            vec!["Member ID not found.".to_string()]
        }
        LibraryError::BookNotFound { title } => {
            vec![format!("Book not found with title: {}", title)]
        }
        LibraryError::AlreadyBorrowed { member_id, title } => {
            vec![
                format!("{} have already borrowed this book: {}", member_id, title),
                "Could not issue the book.".to_string(),
            ]
        }
        LibraryError::Unavailable { .. } => {
            vec!["This book is currently unavailable. Could not issue the book.".to_string()]
        }
        LibraryError::NotBorrowed { member_id, title, author } => {
            vec![format!("{} has not borrowed this book: {} by {}.", member_id, title, author)]
        }
        other => { vec![other.to_string()] }
    }
}
