pub mod memory_member_repository;

use crate::core::repository::Repository;
use crate::members::domain::model::MemberEntity;

pub(crate) trait MemberRepository: Repository<String, MemberEntity> {
    fn find_by_id(&self, member_id: &str) -> Option<&MemberEntity>;
    fn find_by_id_mut(&mut self, member_id: &str) -> Option<&mut MemberEntity>;
}
