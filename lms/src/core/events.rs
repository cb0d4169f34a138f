use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::{serializer};

// DomainEventType tells whether a record was created or changed in place
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
}

// EventName lists every state change the library publishes
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum EventName {
    BookAdded,
    BookRestocked,
    MemberAdded,
    BookIssued,
    BookReturned,
}

impl EventName {
    pub fn group(&self) -> &'static str {
        match self {
            EventName::BookAdded | EventName::BookRestocked => { "books" }
            EventName::MemberAdded => { "members" }
            EventName::BookIssued | EventName::BookReturned => { "checkout" }
        }
    }

    pub fn kind(&self) -> DomainEventType {
        match self {
            EventName::BookAdded | EventName::MemberAdded | EventName::BookIssued => { DomainEventType::Added }
            EventName::BookRestocked | EventName::BookReturned => { DomainEventType::Updated }
        }
    }
}

impl Display for EventName {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            EventName::BookAdded => write!(f, "book_added"),
            EventName::BookRestocked => write!(f, "book_restocked"),
            EventName::MemberAdded => write!(f, "member_added"),
            EventName::BookIssued => write!(f, "book_issued"),
            EventName::BookReturned => write!(f, "book_returned"),
        }
    }
}

// DomainEvent records one catalog or circulation change; the changed record travels as json_data
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn new<T: Serialize>(name: EventName, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: name.group().to_string(),
            key: key.to_string(),
            kind: name.kind(),
            metadata: metadata.clone(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }

    pub fn payload<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.json_data.as_str())
    }

    pub fn branch_id(&self) -> Option<&str> {
        self.metadata.get("branch_id").map(String::as_str)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
