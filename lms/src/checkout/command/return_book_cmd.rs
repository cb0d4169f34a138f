use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub(crate) struct ReturnBookCommand<'a> {
    checkout_service: &'a mut dyn CheckoutService,
}

impl<'a> ReturnBookCommand<'a> {
    pub(crate) fn new(checkout_service: &'a mut dyn CheckoutService) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    member_id: String,
    title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(member_id: &str, title: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub checkout: CheckoutDto,
}

impl ReturnBookCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

impl<'a> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'a> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> LibraryResult<ReturnBookCommandResponse> {
        self.checkout_service.return_book(req.member_id.as_str(), req.title.as_str())
            .map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::CatalogService;
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::checkout::domain::CheckoutService;
    use crate::core::circulation::create_library;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::members::domain::MemberService;

    #[test]
    fn test_should_run_return_book() {
        let mut library = create_library(&Configuration::new("test"));
        let _ = library.add_book("Dune", "Frank Herbert", "111", 2).expect("should add book");
        let _ = library.add_member("Alice").expect("should add member");
        let _ = library.issue_book("M1", "Dune").expect("should issue book");

        let mut cmd = ReturnBookCommand::new(&mut library);
        let res = cmd.execute(ReturnBookCommandRequest::new("M1", "Dune")).expect("should return book");
        assert_eq!(2, res.checkout.available_copies);

        let err = cmd.execute(ReturnBookCommandRequest::new("M1", "Dune")).expect_err("should fail");
        assert_eq!(LibraryError::not_borrowed("M1", "Dune", "Frank Herbert"), err);
    }
}
