use std::io::{BufRead, Write};
use tracing::debug;
use crate::catalog::command::add_book_cmd::AddBookCommandRequest;
use crate::catalog::command::search_book_cmd::{SearchBookCommandRequest, SearchBy};
use crate::catalog::controller as catalog;
use crate::checkout::command::issue_book_cmd::IssueBookCommandRequest;
use crate::checkout::command::list_borrowed_cmd::ListBorrowedBooksCommandRequest;
use crate::checkout::command::return_book_cmd::ReturnBookCommandRequest;
use crate::checkout::controller as checkout;
use crate::console::prompt::Console;
use crate::core::controller::{AppState, Transcript};
use crate::core::library::LibraryResult;
use crate::members::command::add_member_cmd::AddMemberCommandRequest;
use crate::members::controller as members;

const MAIN_MENU: [&str; 8] = [
    "Library Management System",
    "1. Add Book",
    "2. Add Member",
    "3. Search Book",
    "4. Issue Book",
    "5. Return Book",
    "6. List Borrowed Books",
    "7. Exit",
];

const SEARCH_MENU: [&str; 4] = [
    "Search Book",
    "1. By Title",
    "2. By ISBN",
    "3. By Author",
];

const CHOOSE: &str = "Choose an option: ";

// reads every answer of a form in order, returning None from the enclosing handler on end of input
macro_rules! answer {
    ($console:expr, $prompt:expr) => {
        match $console.ask($prompt)? {
            Some(line) => line,
            None => return Ok(None),
        }
    };
}

// runs the menu until the user exits or input ends
pub(crate) fn run<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> LibraryResult<()> {
    debug!(branch = state.config.branch_id.as_str(), "console session started");
    loop {
        for line in MAIN_MENU {
            console.say(line)?;
        }
        let Some(line) = console.ask(CHOOSE)? else {
            debug!("input closed at main menu");
            return Ok(());
        };
        let choice = match line.parse::<i32>() {
            Ok(choice) => choice,
            Err(_) => {
                console.say("Invalid choice. Please enter a number.")?;
                continue;
            }
        };
        debug!(choice, "menu choice");
        let transcript = match choice {
            1 => add_book(state, console)?,
            2 => add_member(state, console)?,
            3 => search_book(state, console)?,
            4 => issue_book(state, console)?,
            5 => return_book(state, console)?,
            6 => list_borrowed_books(state, console)?,
            7 => {
                console.say("Exiting. . .")?;
                return Ok(());
            }
            _ => Some(vec!["Invalid choice. Please try again.".to_string()]),
        };
        match transcript {
            Some(lines) => console.say_all(&lines)?,
            None => {
                debug!(choice, "input closed while reading a form");
                return Ok(());
            }
        }
    }
}

fn add_book<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> LibraryResult<Option<Transcript>> {
    let title = answer!(console, "Enter book title: ");
    let author = answer!(console, "Enter book author: ");
    let isbn = answer!(console, "Enter book ISBN: ");
    let copies = answer!(console, "Enter number of copies: ");
    let Ok(copies) = copies.parse::<i32>() else {
        return Ok(Some(vec!["Invalid number of copies.".to_string()]));
    };
    let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str(), copies);
    catalog::add_book(state, req).map(Some)
}

fn add_member<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> LibraryResult<Option<Transcript>> {
    let name = answer!(console, "Enter member name: ");
    members::add_member(state, AddMemberCommandRequest::new(name.as_str())).map(Some)
}

fn search_book<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> LibraryResult<Option<Transcript>> {
    for line in SEARCH_MENU {
        console.say(line)?;
    }
    let choice = answer!(console, CHOOSE);
    let (by, prompt) = match choice.parse::<i32>() {
        Ok(1) => (SearchBy::Title, "Enter title: "),
        Ok(2) => (SearchBy::Isbn, "Enter ISBN: "),
        Ok(3) => (SearchBy::Author, "Enter author: "),
        _ => return Ok(Some(vec!["Invalid choice.".to_string()])),
    };
    let query = answer!(console, prompt);
    catalog::search_book(state, SearchBookCommandRequest::new(by, query.as_str())).map(Some)
}

fn issue_book<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> LibraryResult<Option<Transcript>> {
    let member_id = answer!(console, "Enter member ID: ");
    let title = answer!(console, "Enter book title: ");
    checkout::issue_book(state, IssueBookCommandRequest::new(member_id.as_str(), title.as_str())).map(Some)
}

fn return_book<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> LibraryResult<Option<Transcript>> {
    let member_id = answer!(console, "Enter member ID: ");
    let title = answer!(console, "Enter book title: ");
    checkout::return_book(state, ReturnBookCommandRequest::new(member_id.as_str(), title.as_str())).map(Some)
}

fn list_borrowed_books<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> LibraryResult<Option<Transcript>> {
    let member_id = answer!(console, "Enter member ID: ");
    checkout::list_borrowed_books(state, ListBorrowedBooksCommandRequest::new(member_id.as_str())).map(Some)
}
