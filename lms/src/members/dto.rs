use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::domain::model::MemberEntity;
use crate::members::Member;


// MemberDto abstracts library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct MemberDto {
    pub member_id: String,
    pub name: String,
    pub borrowed_isbns: Vec<String>,
}

impl MemberDto {
    pub(crate) fn new(member_id: &str, name: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
            borrowed_isbns: vec![],
        }
    }
}

impl From<&MemberEntity> for MemberDto {
    fn from(other: &MemberEntity) -> Self {
        Self {
            member_id: other.member_id.to_string(),
            name: other.name.to_string(),
            borrowed_isbns: other.borrowed_isbns().to_vec(),
        }
    }
}

impl Identifiable for MemberDto {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

impl Member for MemberDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed_isbns.iter().any(|held| held == isbn)
    }
}
