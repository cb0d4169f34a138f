use std::collections::HashMap;
use std::fmt;
use tracing::warn;
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::members::domain::model::MemberSequence;
use crate::members::factory::create_member_repository;
use crate::members::repository::MemberRepository;

// Library is the catalog and circulation manager. It owns every book and member record, the
// member id sequence and the event publisher; the catalog, member and checkout services are
// all implemented on it so that each operation sees one consistent state.
pub(crate) struct Library {
    pub(crate) branch_id: String,
    pub(crate) book_repository: Box<dyn BookRepository>,
    pub(crate) member_repository: Box<dyn MemberRepository>,
    pub(crate) member_sequence: MemberSequence,
    pub(crate) events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      member_repository: Box<dyn MemberRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            member_repository,
            member_sequence: MemberSequence::new(config.member_id_prefix.as_str(), config.first_member_number),
            events_publisher,
        }
    }

    pub(crate) fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // the state change has already happened when an event is published, so a failure here is
    // reported and otherwise ignored
    pub(crate) fn publish(&mut self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(Into::into)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!(error = %err, "failed to publish domain event");
        }
    }

    #[cfg(test)]
    pub(crate) fn get_topics(&self) -> Vec<String> {
        self.events_publisher.get_topics().unwrap_or_default()
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("branch_id", &self.branch_id)
            .field("books", &self.book_repository.count())
            .field("members", &self.member_repository.count())
            .field("member_sequence", &self.member_sequence)
            .finish()
    }
}

pub(crate) fn create_library(config: &Configuration) -> Library {
    Library::new(config, create_book_repository(), create_member_repository(),
                 create_publisher(config.publisher))
}
