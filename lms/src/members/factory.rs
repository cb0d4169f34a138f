use crate::members::repository::MemberRepository;
use crate::members::repository::memory_member_repository::MemoryMemberRepository;

pub(crate) fn create_member_repository() -> Box<dyn MemberRepository> {
    Box::new(MemoryMemberRepository::new())
}
