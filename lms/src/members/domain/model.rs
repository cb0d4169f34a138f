use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::Member;

// MemberEntity abstracts a registered borrower and the ISBNs it currently holds. The
// borrowed ISBNs keep the order in which they were issued.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct MemberEntity {
    pub member_id: String,
    pub name: String,
    borrowed_isbns: Vec<String>,
}

impl MemberEntity {
    pub fn new(member_id: &str, name: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
            borrowed_isbns: vec![],
        }
    }

    pub fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed_isbns.iter().any(|held| held == isbn)
    }

    pub fn borrow_book(&mut self, isbn: &str) {
        if !self.has_borrowed(isbn) {
            self.borrowed_isbns.push(isbn.to_string());
        }
    }

    pub fn return_book(&mut self, isbn: &str) {
        self.borrowed_isbns.retain(|held| held != isbn);
    }

    pub fn borrowed_isbns(&self) -> &[String] {
        &self.borrowed_isbns
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

impl Member for MemberEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn has_borrowed(&self, isbn: &str) -> bool {
        MemberEntity::has_borrowed(self, isbn)
    }
}

// MemberSequence hands out member ids; numbers only move forward and are never reused.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct MemberSequence {
    prefix: String,
    next_number: u64,
}

impl MemberSequence {
    pub fn new(prefix: &str, first_number: u64) -> Self {
        Self {
            prefix: prefix.to_string(),
            next_number: first_number,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next_number);
        self.next_number = self.next_number.saturating_add(1);
        id
    }

    #[cfg(test)]
    pub fn peek(&self) -> u64 {
        self.next_number
    }
}


#[cfg(test)]
mod tests {
    use crate::members::domain::model::{MemberEntity, MemberSequence};

    #[test]
    fn test_should_build_member() {
        let member = MemberEntity::new("M1", "Alice");
        assert_eq!("M1", member.member_id.as_str());
        assert_eq!("Alice", member.name.as_str());
        assert!(member.borrowed_isbns().is_empty());
    }

    #[test]
    fn test_should_borrow_and_return() {
        let mut member = MemberEntity::new("M1", "Alice");
        member.borrow_book("111");
        assert!(member.has_borrowed("111"));
        assert!(!member.has_borrowed("222"));
        member.return_book("111");
        assert!(!member.has_borrowed("111"));
    }

    #[test]
    fn test_should_ignore_duplicate_borrow() {
        let mut member = MemberEntity::new("M1", "Alice");
        member.borrow_book("111");
        member.borrow_book("111");
        assert_eq!(1, member.borrowed_isbns().len());
    }

    #[test]
    fn test_should_ignore_return_of_unknown_isbn() {
        let mut member = MemberEntity::new("M1", "Alice");
        member.borrow_book("111");
        member.return_book("999");
        assert_eq!(vec!["111".to_string()], member.borrowed_isbns().to_vec());
    }

    #[test]
    fn test_should_keep_borrow_order() {
        let mut member = MemberEntity::new("M1", "Alice");
        member.borrow_book("333");
        member.borrow_book("111");
        member.borrow_book("222");
        member.return_book("111");
        member.borrow_book("111");
        assert_eq!(vec!["333", "222", "111"], member.borrowed_isbns().to_vec());
    }

    #[test]
    fn test_should_generate_sequential_ids() {
        let mut sequence = MemberSequence::new("M", 1);
        assert_eq!("M1", sequence.next_id().as_str());
        assert_eq!("M2", sequence.next_id().as_str());
        assert_eq!("M3", sequence.next_id().as_str());
        assert_eq!(4, sequence.peek());
    }

    #[test]
    fn test_should_honor_prefix_and_start() {
        let mut sequence = MemberSequence::new("LIB-", 100);
        assert_eq!("LIB-100", sequence.next_id().as_str());
        assert_eq!("LIB-101", sequence.next_id().as_str());
    }
}
