use std::collections::HashMap;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::members::domain::model::MemberEntity;
use crate::members::repository::MemberRepository;

#[derive(Debug, Default)]
pub struct MemoryMemberRepository {
    members: HashMap<String, MemberEntity>,
}

impl MemoryMemberRepository {
    pub(crate) fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }
}

impl Repository<String, MemberEntity> for MemoryMemberRepository {
    fn create(&mut self, entity: MemberEntity) -> LibraryResult<String> {
        if self.members.contains_key(entity.member_id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("member with id {} already exists", entity.member_id).as_str()));
        }
        let member_id = entity.member_id.to_string();
        self.members.insert(member_id.to_string(), entity);
        Ok(member_id)
    }

    fn get(&self, key: &String) -> Option<&MemberEntity> {
        self.members.get(key)
    }

    fn get_mut(&mut self, key: &String) -> Option<&mut MemberEntity> {
        self.members.get_mut(key)
    }

    fn count(&self) -> usize {
        self.members.len()
    }
}

impl MemberRepository for MemoryMemberRepository {
    fn find_by_id(&self, member_id: &str) -> Option<&MemberEntity> {
        self.members.get(member_id)
    }

    fn find_by_id_mut(&mut self, member_id: &str) -> Option<&mut MemberEntity> {
        self.members.get_mut(member_id)
    }
}


#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;
    use crate::members::domain::model::MemberEntity;
    use crate::members::repository::MemberRepository;
    use crate::members::repository::memory_member_repository::MemoryMemberRepository;

    #[test]
    fn test_should_create_get_member() {
        let mut repo = MemoryMemberRepository::new();
        let key = repo.create(MemberEntity::new("M1", "Alice")).expect("should create member");
        assert_eq!("M1", key.as_str());
        let loaded = repo.get(&key).expect("should return member");
        assert_eq!("Alice", loaded.name.as_str());
        assert_eq!(1, repo.count());
    }

    #[test]
    fn test_should_reject_duplicate_member() {
        let mut repo = MemoryMemberRepository::new();
        let _ = repo.create(MemberEntity::new("M1", "Alice")).expect("should create member");
        let res = repo.create(MemberEntity::new("M1", "Bob"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey{ message: _ })));
        assert_eq!("Alice", repo.find_by_id("M1").expect("should return member").name.as_str());
    }

    #[test]
    fn test_should_find_member_by_id() {
        let mut repo = MemoryMemberRepository::new();
        let _ = repo.create(MemberEntity::new("M1", "Alice")).expect("should create member");
        assert!(repo.find_by_id("M1").is_some());
        assert!(repo.find_by_id("m1").is_none());
        repo.find_by_id_mut("M1").expect("should return member").borrow_book("111");
        assert!(repo.find_by_id("M1").expect("should return member").has_borrowed("111"));
    }
}
