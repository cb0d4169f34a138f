use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps every published event for the lifetime of the process. It backs
// Configuration::new and is meant for tests and inspection; sessions built from the environment
// log events instead unless LMS_EVENTS=memory.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: Vec<DomainEvent>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self {
            events: vec![],
        }
    }

    #[cfg(test)]
    pub(crate) fn events(&self) -> &[DomainEvent] {
        &self.events
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.push(event.clone());
        Ok(())
    }

    // topics are the distinct event names in publication order
    fn get_topics(&self) -> Result<Vec<String>, LibraryError> {
        let mut topics: Vec<String> = vec![];
        for event in &self.events {
            if !topics.contains(&event.name) {
                topics.push(event.name.to_string());
            }
        }
        Ok(topics)
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, EventName};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_publish_to_memory() {
        let mut publisher = MemoryPublisher::new();
        let issued = DomainEvent::new(EventName::BookIssued, "M1", &HashMap::new(), &"111").expect("build event");
        let returned = DomainEvent::new(EventName::BookReturned, "M1", &HashMap::new(), &"111").expect("build event");
        publisher.publish(&issued).expect("should publish");
        publisher.publish(&returned).expect("should publish");
        publisher.publish(&issued).expect("should publish");
        assert_eq!(3, publisher.events().len());
        let topics = publisher.get_topics().expect("should get topics");
        assert_eq!(vec!["book_issued".to_string(), "book_returned".to_string()], topics);
    }

    #[test]
    fn test_should_start_empty() {
        let publisher = MemoryPublisher::default();
        assert!(publisher.events().is_empty());
        assert_eq!(0, publisher.get_topics().expect("should get topics").len());
    }
}
