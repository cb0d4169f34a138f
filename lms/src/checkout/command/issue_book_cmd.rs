use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub(crate) struct IssueBookCommand<'a> {
    checkout_service: &'a mut dyn CheckoutService,
}

impl<'a> IssueBookCommand<'a> {
    pub(crate) fn new(checkout_service: &'a mut dyn CheckoutService) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueBookCommandRequest {
    member_id: String,
    title: String,
}

impl IssueBookCommandRequest {
    pub fn new(member_id: &str, title: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct IssueBookCommandResponse {
    pub checkout: CheckoutDto,
}

impl IssueBookCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

impl<'a> Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand<'a> {
    fn execute(&mut self, req: IssueBookCommandRequest) -> LibraryResult<IssueBookCommandResponse> {
        self.checkout_service.issue_book(req.member_id.as_str(), req.title.as_str())
            .map(IssueBookCommandResponse::new)
    }
}
