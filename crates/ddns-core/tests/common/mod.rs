//! Test doubles and common utilities for contract tests
//!
//! This module provides minimal test doubles that count calls, so tests
//! can verify which collaborators were (or were not) contacted.

#![allow(dead_code)]

use ddns_core::error::{Error, Result};
use ddns_core::record::UpdateRequest;
use ddns_core::traits::{DnsProvider, IpSource, UpdateResult};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What a [`CountingIpSource`] answers with
#[derive(Debug, Clone)]
pub enum Answer {
    /// Return this address
    Ip(IpAddr),
    /// Behave like a timed-out request
    Timeout,
    /// Behave like an endpoint returning garbage
    Garbage(&'static str),
}

/// An IpSource with a canned answer and a call counter
pub struct CountingIpSource {
    url: String,
    answer: Answer,
    calls: Arc<AtomicUsize>,
}

impl CountingIpSource {
    pub fn new(url: &str, answer: Answer) -> Self {
        Self {
            url: url.to_string(),
            answer,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle to the call counter, usable after the source is boxed
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait::async_trait]
impl IpSource for CountingIpSource {
    async fn current(&self) -> Result<IpAddr> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.answer {
            Answer::Ip(ip) => Ok(*ip),
            Answer::Timeout => Err(Error::http(format!(
                "http.Get() url:{} error:operation timed out",
                self.url
            ))),
            Answer::Garbage(body) => Err(Error::ip_source(format!("invalid IP:{}", body))),
        }
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

/// A mock DnsProvider that records requests
pub struct MockDnsProvider {
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<UpdateRequest>>>,
    failure: Option<String>,
}

impl MockDnsProvider {
    /// A provider that accepts every change
    pub fn accepting() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// A provider that rejects every change with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::accepting()
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn requests(&self) -> Arc<Mutex<Vec<UpdateRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait::async_trait]
impl DnsProvider for MockDnsProvider {
    async fn upsert(&self, request: &UpdateRequest) -> Result<UpdateResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match &self.failure {
            Some(message) => Err(Error::provider("mock", message.clone())),
            None => Ok(UpdateResult::Submitted {
                description: format!("ChangeInfo for {}", request.name),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Read a shared counter
pub fn count(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
