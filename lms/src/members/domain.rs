pub mod model;
pub mod service;

use crate::core::library::LibraryResult;
use crate::members::dto::MemberDto;

pub(crate) trait MemberService {
    fn add_member(&mut self, name: &str) -> LibraryResult<MemberDto>;
    fn find_member_by_id(&self, member_id: &str) -> Option<MemberDto>;
}
