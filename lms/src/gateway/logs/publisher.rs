use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher forwards events to the tracing subscriber instead of keeping them.
#[derive(Debug, Default)]
pub struct LogPublisher {
    published: usize,
}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self {
            published: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn published(&self) -> usize {
        self.published
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = event.to_json()?;
        info!(event = event.name.as_str(), key = event.key.as_str(), branch = event.branch_id().unwrap_or("-"), "{}", json);
        self.published = self.published.saturating_add(1);
        Ok(())
    }

    fn get_topics(&self) -> Result<Vec<String>, LibraryError> {
        Ok(vec![])
    }
}
