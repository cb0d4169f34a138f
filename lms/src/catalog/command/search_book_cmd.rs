use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

// SearchBy selects the catalog index a search runs against.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SearchBy {
    Title,
    Isbn,
    Author,
}

pub(crate) struct SearchBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBookCommandRequest {
    pub(crate) by: SearchBy,
    pub(crate) query: String,
}

impl SearchBookCommandRequest {
    pub fn new(by: SearchBy, query: &str) -> Self {
        Self {
            by,
            query: query.to_string(),
        }
    }
}


// title and isbn searches return at most one book
#[derive(Debug, Serialize)]
pub(crate) struct SearchBookCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBookCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl<'a> Command<SearchBookCommandRequest, SearchBookCommandResponse> for SearchBookCommand<'a> {
    fn execute(&mut self, req: SearchBookCommandRequest) -> LibraryResult<SearchBookCommandResponse> {
        let query = req.query.as_str();
        let books: Vec<BookDto> = match req.by {
            SearchBy::Title => { self.catalog_service.search_by_title(query).into_iter().collect() }
            SearchBy::Isbn => { self.catalog_service.search_by_isbn(query).into_iter().collect() }
            SearchBy::Author => { self.catalog_service.search_by_author(query) }
        };
        Ok(SearchBookCommandResponse::new(books))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest, SearchBy};
    use crate::catalog::domain::CatalogService;
    use crate::core::circulation::create_library;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_search_book() {
        let mut library = create_library(&Configuration::new("test"));
        let _ = library.add_book("Dune", "Frank Herbert", "111", 2).expect("should add book");
        let _ = library.add_book("Children of Dune", "Frank Herbert", "222", 1).expect("should add book");

        let mut cmd = SearchBookCommand::new(&library);
        let res = cmd.execute(SearchBookCommandRequest::new(SearchBy::Title, "DUNE")).expect("should search");
        assert_eq!(1, res.books.len());
        assert_eq!("111", res.books[0].isbn.as_str());

        let res = cmd.execute(SearchBookCommandRequest::new(SearchBy::Isbn, "222")).expect("should search");
        assert_eq!("Children of Dune", res.books[0].title.as_str());

        let res = cmd.execute(SearchBookCommandRequest::new(SearchBy::Author, "frank herbert")).expect("should search");
        assert_eq!(2, res.books.len());

        let res = cmd.execute(SearchBookCommandRequest::new(SearchBy::Isbn, "999")).expect("should search");
        assert!(res.books.is_empty());
    }

    #[test]
    fn test_should_parse_search_request() {
        let req: SearchBookCommandRequest = serde_json::from_str(r#"{"by":"author","query":"Austen"}"#)
            .expect("should parse");
        assert_eq!(SearchBy::Author, req.by);
    }
}
