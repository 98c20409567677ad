//! Host process primitives for the external tools.
//!
//! Everything the external strategy needs from the operating system goes
//! through [`CommandRunner`]: quoting, the binary presence check, and running
//! a command line. Tests substitute a runner that records command lines
//! instead of spawning anything.

use std::future::Future;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::{Error, Result};

/// Characters `escape_cmd` prefixes with a backslash.
const SHELL_METACHARACTERS: &str = "#&;`|*?~<>^()[]{}$\\\n\"'";

/// Access to the host shell.
pub trait CommandRunner: Send + Sync {
    /// Quote one argument so the shell passes it through verbatim.
    ///
    /// POSIX single quoting: the argument is wrapped in `'…'` and embedded
    /// single quotes become `'\''`.
    fn escape_arg(&self, arg: &str) -> String {
        let mut out = String::with_capacity(arg.len() + 2);
        out.push('\'');
        for c in arg.chars() {
            if c == '\'' {
                out.push_str("'\\''");
            } else {
                out.push(c);
            }
        }
        out.push('\'');
        out
    }

    /// Escape shell metacharacters in a command path.
    fn escape_cmd(&self, cmd: &str) -> String {
        let mut out = String::with_capacity(cmd.len());
        for c in cmd.chars() {
            if SHELL_METACHARACTERS.contains(c) {
                out.push('\\');
            }
            out.push(c);
        }
        out
    }

    /// Whether an executable exists at `path`.
    fn binary_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Run a complete command line and return its stdout, one entry per line.
    fn run(&self, command_line: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Runs command lines through `sh -c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    async fn run(&self, command_line: &str) -> Result<Vec<String>> {
        let child = Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Io {
                target: None,
                source,
            })?;

        let output = child.wait_with_output().await.map_err(|source| Error::Io {
            target: None,
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::debug!(target: "snmp_query::transport", stderr = %stderr.trim(), "external tool wrote to stderr");
        }

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        tracing::trace!(target: "snmp_query::transport", status = %output.status, lines = lines.len(), "external tool finished");

        Ok(lines)
    }
}
