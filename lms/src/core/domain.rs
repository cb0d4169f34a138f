use std::env;
use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by library records
pub trait Identifiable {
    fn id(&self) -> String;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub member_id_prefix: String,
    pub first_member_number: u64,
    pub log_level: String,
    pub log_json: bool,
    pub publisher: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            member_id_prefix: "M".to_string(),
            first_member_number: 1,
            log_level: "warn".to_string(),
            log_json: false,
            publisher: GatewayPublisherVia::Memory,
        }
    }

    // defaults overlaid with LMS_* environment variables; events go to the log unless LMS_EVENTS says otherwise
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup("LMS_BRANCH_ID").unwrap_or_else(|| "main".to_string()).as_str());
        config.publisher = GatewayPublisherVia::Logs;
        if let Some(prefix) = lookup("LMS_MEMBER_PREFIX") {
            config.member_id_prefix = prefix;
        }
        if let Some(level) = lookup("LMS_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(json) = lookup("LMS_LOG_JSON") {
            config.log_json = matches!(json.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(via) = lookup("LMS_EVENTS") {
            config.publisher = GatewayPublisherVia::from(via);
        }
        config
    }
}
