//! Test doubles shared by the poller contract tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::IpAddr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use dyndns_core::error::{Error, Result};
use dyndns_core::traits::{ExternalIpSource, IpVersion};

/// An IP source that always reports the same address
pub struct FixedIpSource {
    ip: IpAddr,
    call_count: AtomicUsize,
}

impl FixedIpSource {
    pub fn new(ip: IpAddr) -> Self {
        Self {
            ip,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Number of times external_ip() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ExternalIpSource for FixedIpSource {
    async fn external_ip(&self, _version: IpVersion) -> Result<IpAddr> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.ip)
    }
}

/// An IP source that always fails
pub struct FailingIpSource {
    call_count: AtomicUsize,
}

impl FailingIpSource {
    pub fn new() -> Self {
        Self {
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ExternalIpSource for FailingIpSource {
    async fn external_ip(&self, _version: IpVersion) -> Result<IpAddr> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Err(Error::ip_source("no consensus among sources"))
    }
}

/// An IP source that plays back a scripted sequence of outcomes.
///
/// Once the script is exhausted the last scripted outcome repeats, so a
/// free-running poll loop keeps getting a stable answer.
pub struct ScriptedIpSource {
    script: Mutex<VecDeque<std::result::Result<IpAddr, String>>>,
    last: Mutex<Option<std::result::Result<IpAddr, String>>>,
    call_count: AtomicUsize,
}

impl ScriptedIpSource {
    pub fn new(script: Vec<std::result::Result<IpAddr, String>>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script: Mutex::new(script.into_iter().collect()),
            last: Mutex::new(None),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Convenience: a script of successful detections
    pub fn from_ips(ips: &[&str]) -> Self {
        Self::new(
            ips.iter()
                .map(|ip| Ok(ip.parse().expect("valid test IP")))
                .collect(),
        )
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ExternalIpSource for ScriptedIpSource {
    async fn external_ip(&self, _version: IpVersion) -> Result<IpAddr> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let next = self.script.lock().unwrap().pop_front();
        let outcome = match next {
            Some(outcome) => {
                *self.last.lock().unwrap() = Some(outcome.clone());
                outcome
            }
            None => self
                .last
                .lock()
                .unwrap()
                .clone()
                .expect("script was non-empty"),
        };

        outcome.map_err(Error::ip_source)
    }
}
