use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

pub(crate) trait EventPublisher {
    fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError>;
    fn get_topics(&self) -> Result<Vec<String>, LibraryError>;
}
