use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest};
use crate::console::view;
use crate::core::command::Command;
use crate::core::controller::{AppState, Transcript};
use crate::core::library::LibraryResult;

pub(crate) fn add_book(state: &mut AppState, req: AddBookCommandRequest) -> LibraryResult<Transcript> {
    let res = AddBookCommand::new(&mut state.library).execute(req)?;
    Ok(view::added_book(&res))
}

pub(crate) fn search_book(state: &AppState, req: SearchBookCommandRequest) -> LibraryResult<Transcript> {
    let by = req.by;
    let query = req.query.to_string();
    let res = SearchBookCommand::new(&state.library).execute(req)?;
    Ok(view::search_results(by, query.as_str(), &res.books))
}
