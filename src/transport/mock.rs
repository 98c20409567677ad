//! Scripted binding and runner for unit tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::version::Version;

use super::{Binding, CommandRunner, Operation, Session};

/// What the mock binding answers for an OID.
#[derive(Debug, Clone)]
pub(crate) enum MockReply {
    Value(String),
    Timeout,
    Fail(String),
}

/// A recorded binding call.
#[derive(Debug, Clone)]
pub(crate) struct MockCall {
    pub op: Operation,
    pub oid: String,
    pub timeout_micros: u64,
    pub retries: u32,
}

#[derive(Debug, Default)]
pub(crate) struct MockBinding {
    versions: HashSet<Version>,
    trusts_walk: bool,
    replies: HashMap<String, MockReply>,
    records: Vec<(String, String)>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockBinding {
    pub(crate) fn new(versions: &[Version]) -> Self {
        Self {
            versions: versions.iter().copied().collect(),
            trusts_walk: true,
            ..Default::default()
        }
    }

    pub(crate) fn reply(mut self, oid: &str, reply: MockReply) -> Self {
        self.replies.insert(oid.to_string(), reply);
        self
    }

    pub(crate) fn walk_records(mut self, records: &[(&str, &str)]) -> Self {
        self.records = records
            .iter()
            .map(|(oid, value)| (oid.to_string(), value.to_string()))
            .collect();
        self
    }

    pub(crate) fn untrusted_walk(mut self) -> Self {
        self.trusts_walk = false;
        self
    }

    pub(crate) fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, op: Operation, session: &Session<'_>) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(MockCall {
                op,
                oid: session.oid.to_string(),
                timeout_micros: session.timeout_micros(),
                retries: session.retries(),
            });
        }
    }

    fn answer(&self, session: &Session<'_>) -> Result<String> {
        match self.replies.get(session.oid) {
            Some(MockReply::Value(value)) => Ok(value.clone()),
            Some(MockReply::Timeout) => Err(Error::Timeout {
                target: session.target.to_string(),
                oid: session.oid.to_string(),
            }),
            Some(MockReply::Fail(message)) => {
                Err(Error::binding(session.target.to_string(), message.clone()))
            }
            None => Ok(String::new()),
        }
    }
}

impl Binding for MockBinding {
    fn supports(&self, version: Version) -> bool {
        self.versions.contains(&version)
    }

    fn trusts_walk(&self) -> bool {
        self.trusts_walk
    }

    async fn get(&self, session: &Session<'_>) -> Result<String> {
        self.record(Operation::Get, session);
        self.answer(session)
    }

    async fn get_next(&self, session: &Session<'_>) -> Result<String> {
        self.record(Operation::GetNext, session);
        self.answer(session)
    }

    async fn walk(&self, session: &Session<'_>) -> Result<Vec<(String, String)>> {
        self.record(Operation::Walk, session);
        Ok(self.records.clone())
    }
}

/// A runner that records command lines and returns canned output.
#[derive(Debug, Default)]
pub(crate) struct MockRunner {
    binaries: HashSet<PathBuf>,
    output: Vec<String>,
    fail: bool,
    commands: Mutex<Vec<String>>,
}

impl MockRunner {
    pub(crate) fn with_binaries(paths: &[&str]) -> Self {
        Self {
            binaries: paths.iter().map(PathBuf::from).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn output(mut self, lines: &[&str]) -> Self {
        self.output = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    pub(crate) fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.commands.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandRunner for MockRunner {
    fn binary_exists(&self, path: &Path) -> bool {
        self.binaries.contains(path)
    }

    async fn run(&self, command_line: &str) -> Result<Vec<String>> {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command_line.to_string());
        }
        if self.fail {
            return Err(Error::Io {
                target: None,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "sh: not found"),
            });
        }
        Ok(self.output.clone())
    }
}
