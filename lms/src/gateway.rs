pub mod events;
pub mod logs;
pub mod memory;
pub mod factory;

use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum GatewayPublisherVia {
    Memory,
    Logs,
}

impl From<String> for GatewayPublisherVia {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "logs" => GatewayPublisherVia::Logs,
            _ => GatewayPublisherVia::Memory,
        }
    }
}

impl Display for GatewayPublisherVia {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            GatewayPublisherVia::Memory => write!(f, "memory"),
            GatewayPublisherVia::Logs => write!(f, "logs"),
        }
    }
}
