use tracing::info;
use crate::core::circulation::Library;
use crate::core::events::{DomainEvent, EventName};
use crate::core::library::LibraryResult;
use crate::members::domain::MemberService;
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberDto;

impl MemberService for Library {
    fn add_member(&mut self, name: &str) -> LibraryResult<MemberDto> {
        let member_id = self.member_sequence.next_id();
        let entity = MemberEntity::new(member_id.as_str(), name);
        let member = MemberDto::from(&entity);
        let _ = self.member_repository.create(entity)?;
        info!(member_id = member_id.as_str(), name, "member added");
        let metadata = self.metadata();
        self.publish(DomainEvent::new(EventName::MemberAdded, member_id.as_str(), &metadata, &member));
        Ok(member)
    }

    fn find_member_by_id(&self, member_id: &str) -> Option<MemberDto> {
        self.member_repository.find_by_id(member_id).map(MemberDto::from)
    }
}
