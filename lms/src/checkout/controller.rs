use crate::checkout::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::checkout::command::list_borrowed_cmd::{ListBorrowedBooksCommand, ListBorrowedBooksCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::console::view;
use crate::core::command::Command;
use crate::core::controller::{AppState, error_to_transcript, Transcript};
use crate::core::library::LibraryResult;

pub(crate) fn issue_book(state: &mut AppState, req: IssueBookCommandRequest) -> LibraryResult<Transcript> {
    IssueBookCommand::new(&mut state.library).execute(req)
        .map(|res| view::issued_book(&res.checkout))
        .or_else(error_to_transcript)
}

pub(crate) fn return_book(state: &mut AppState, req: ReturnBookCommandRequest) -> LibraryResult<Transcript> {
    ReturnBookCommand::new(&mut state.library).execute(req)
        .map(|res| view::returned_book(&res.checkout))
        .or_else(error_to_transcript)
}

pub(crate) fn list_borrowed_books(state: &AppState, req: ListBorrowedBooksCommandRequest) -> LibraryResult<Transcript> {
    ListBorrowedBooksCommand::new(&state.library).execute(req)
        .map(|res| view::borrowed_books(&res.borrowed))
        .or_else(error_to_transcript)
}
