use serde::{Deserialize, Serialize};
use crate::core::command::Command;
use crate::core::library::LibraryResult;
use crate::members::domain::MemberService;
use crate::members::dto::MemberDto;

pub(crate) struct AddMemberCommand<'a> {
    member_service: &'a mut dyn MemberService,
}

impl<'a> AddMemberCommand<'a> {
    pub(crate) fn new(member_service: &'a mut dyn MemberService) -> Self {
        Self {
            member_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddMemberCommandRequest {
    pub(crate) name: String,
}

impl AddMemberCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddMemberCommandResponse {
    pub member: MemberDto,
}

impl AddMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

impl<'a> Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand<'a> {
    fn execute(&mut self, req: AddMemberCommandRequest) -> LibraryResult<AddMemberCommandResponse> {
        self.member_service.add_member(req.name.as_str()).map(AddMemberCommandResponse::new)
    }
}
