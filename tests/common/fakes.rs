//! Fake binding and command runner built on the public traits.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use snmp_query::{Binding, CommandRunner, Error, Result, Session, Version};

/// A call seen by [`FakeBinding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingCall {
    pub op: &'static str,
    pub host: String,
    pub oid: String,
    pub timeout_micros: u64,
    pub retries: u32,
    pub security_level: Option<String>,
}

/// An in-process binding backed by a fixed OID table.
///
/// Clones share the call log.
#[derive(Clone, Default)]
pub struct FakeBinding {
    versions: HashSet<Version>,
    values: HashMap<String, String>,
    subtree: Vec<(String, String)>,
    unresponsive: bool,
    trusts_walk: bool,
    calls: Arc<Mutex<Vec<BindingCall>>>,
}

impl FakeBinding {
    pub fn new(versions: &[Version]) -> Self {
        Self {
            versions: versions.iter().copied().collect(),
            trusts_walk: true,
            ..Default::default()
        }
    }

    pub fn value(mut self, oid: &str, value: &str) -> Self {
        self.values.insert(oid.to_string(), value.to_string());
        self
    }

    pub fn subtree(mut self, records: &[(&str, &str)]) -> Self {
        self.subtree = records
            .iter()
            .map(|(oid, value)| (oid.to_string(), value.to_string()))
            .collect();
        self
    }

    pub fn unresponsive(mut self) -> Self {
        self.unresponsive = true;
        self
    }

    pub fn distrust_walk(mut self) -> Self {
        self.trusts_walk = false;
        self
    }

    pub fn calls(&self) -> Vec<BindingCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, session: &Session<'_>) -> Result<()> {
        self.calls.lock().unwrap().push(BindingCall {
            op,
            host: session.target.host.clone(),
            oid: session.oid.to_string(),
            timeout_micros: session.timeout_micros(),
            retries: session.retries(),
            security_level: session.auth.security_level().map(|l| l.to_string()),
        });
        if self.unresponsive {
            return Err(Error::Timeout {
                target: session.target.to_string(),
                oid: session.oid.to_string(),
            });
        }
        Ok(())
    }
}

impl Binding for FakeBinding {
    fn supports(&self, version: Version) -> bool {
        self.versions.contains(&version)
    }

    fn trusts_walk(&self) -> bool {
        self.trusts_walk
    }

    async fn get(&self, session: &Session<'_>) -> Result<String> {
        self.record("get", session)?;
        Ok(self.values.get(session.oid).cloned().unwrap_or_else(|| {
            "No Such Object available on this agent at this OID".to_string()
        }))
    }

    async fn get_next(&self, session: &Session<'_>) -> Result<String> {
        self.record("getnext", session)?;
        let next = self
            .subtree
            .iter()
            .find(|(oid, _)| oid.as_str() > session.oid)
            .map(|(_, value)| value.clone());
        Ok(next.unwrap_or_default())
    }

    async fn walk(&self, session: &Session<'_>) -> Result<Vec<(String, String)>> {
        self.record("walk", session)?;
        Ok(self.subtree.clone())
    }
}

/// A command runner that records command lines and replays canned stdout.
///
/// Output is chosen by the first registered binary path the command line
/// starts with. Clones share the command log.
#[derive(Clone, Default)]
pub struct FakeRunner {
    installed: HashSet<PathBuf>,
    outputs: Vec<(String, Vec<String>)>,
    commands: Arc<Mutex<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a binary as installed.
    pub fn install(mut self, path: &str) -> Self {
        self.installed.insert(PathBuf::from(path));
        self
    }

    /// Mark a binary as installed and set what it prints.
    pub fn install_with_output(mut self, path: &str, lines: &[&str]) -> Self {
        self.installed.insert(PathBuf::from(path));
        self.outputs.push((
            path.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        ));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn binary_exists(&self, path: &Path) -> bool {
        self.installed.contains(path)
    }

    async fn run(&self, command_line: &str) -> Result<Vec<String>> {
        self.commands.lock().unwrap().push(command_line.to_string());
        Ok(self
            .outputs
            .iter()
            .find(|(path, _)| command_line.starts_with(&format!("{} ", path)))
            .map(|(_, lines)| lines.clone())
            .unwrap_or_default())
    }
}
