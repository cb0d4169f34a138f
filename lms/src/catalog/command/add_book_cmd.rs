use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::{AddBookOutcome, CatalogService};
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub(crate) struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    pub(crate) copies: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, copies: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            copies,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
    pub restocked: bool,
}

impl AddBookCommandResponse {
    pub fn new(outcome: AddBookOutcome) -> Self {
        match outcome {
            AddBookOutcome::Created(book) => { Self { book, restocked: false } }
            AddBookOutcome::Restocked(book) => { Self { book, restocked: true } }
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> LibraryResult<AddBookCommandResponse> {
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.isbn.as_str(), req.copies)
            .map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::core::circulation::create_library;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_add_book() {
        let mut library = create_library(&Configuration::new("test"));
        let mut cmd = AddBookCommand::new(&mut library);
        let res = cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "111", 2))
            .expect("should add book");
        assert!(!res.restocked);
        assert_eq!(2, res.book.available_copies);

        let res = cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "111", 3))
            .expect("should add book");
        assert!(res.restocked);
        assert_eq!(5, res.book.total_copies);
    }

    #[test]
    fn test_should_parse_add_book_request() {
        let req: AddBookCommandRequest = serde_json::from_str(
            r#"{"title":"Dune","author":"Frank Herbert","isbn":"111","copies":2}"#).expect("should parse");
        assert_eq!("Frank Herbert", req.author.as_str());
        assert_eq!(2, req.copies);
    }
}
