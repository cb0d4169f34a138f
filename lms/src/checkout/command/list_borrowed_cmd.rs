use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::BorrowedBooksDto;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub(crate) struct ListBorrowedBooksCommand<'a> {
    checkout_service: &'a dyn CheckoutService,
}

impl<'a> ListBorrowedBooksCommand<'a> {
    pub(crate) fn new(checkout_service: &'a dyn CheckoutService) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBorrowedBooksCommandRequest {
    member_id: String,
}

impl ListBorrowedBooksCommandRequest {
    pub fn new(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBorrowedBooksCommandResponse {
    pub borrowed: BorrowedBooksDto,
}

impl ListBorrowedBooksCommandResponse {
    pub fn new(borrowed: BorrowedBooksDto) -> Self {
        Self {
            borrowed,
        }
    }
}

impl<'a> Command<ListBorrowedBooksCommandRequest, ListBorrowedBooksCommandResponse> for ListBorrowedBooksCommand<'a> {
    fn execute(&mut self, req: ListBorrowedBooksCommandRequest) -> LibraryResult<ListBorrowedBooksCommandResponse> {
        self.checkout_service.list_borrowed_books(req.member_id.as_str())
            .map(ListBorrowedBooksCommandResponse::new)
    }
}
