//! Update request and change batch model
//!
//! An [`UpdateRequest`] is built once per run from the validated
//! [`UpdateConfig`] and the resolved IP. It renders into a provider-neutral
//! [`ChangeBatch`] that providers translate into their own API shapes.

use crate::config::UpdateConfig;
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// A single DNS update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRequest {
    /// Fully-qualified record name
    pub name: String,
    /// TTL in seconds
    pub ttl: u32,
    /// Hosted zone to modify
    pub hosted_zone_id: String,
    /// Resolved public IP
    pub ip: IpAddr,
}

impl UpdateRequest {
    /// Build a request from validated configuration and the resolved IP
    pub fn new(config: &UpdateConfig, ip: IpAddr) -> Self {
        Self {
            name: config.name.clone(),
            ttl: config.ttl,
            hosted_zone_id: config.hosted_zone_id.clone(),
            ip,
        }
    }

    /// Comment attached to the change batch
    pub fn comment(&self) -> String {
        format!("DDNS Update for {}", self.name)
    }

    /// Render the single-change UPSERT batch for this request
    pub fn change_batch(&self) -> ChangeBatch {
        ChangeBatch {
            comment: self.comment(),
            changes: vec![Change {
                action: ChangeAction::Upsert,
                record_set: RecordSet {
                    name: self.name.clone(),
                    record_type: RecordType::A,
                    ttl: self.ttl,
                    values: vec![self.ip.to_string()],
                },
            }],
        }
    }
}

/// A batch of record changes applied atomically by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeBatch {
    /// Human-readable comment
    pub comment: String,
    /// Changes in the batch
    pub changes: Vec<Change>,
}

/// One record change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    /// What to do with the record set
    pub action: ChangeAction,
    /// Target record set
    pub record_set: RecordSet,
}

/// Change action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Create the record, or overwrite it if it exists
    Upsert,
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeAction::Upsert => write!(f, "UPSERT"),
        }
    }
}

/// DNS record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordType {
    /// A record (IPv4)
    A,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
        }
    }
}

/// A resource record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    /// Record name
    pub name: String,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// TTL in seconds
    pub ttl: u32,
    /// Resource record values
    pub values: Vec<String>,
}
