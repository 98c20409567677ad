//! Execution through the net-snmp command-line tools.

use crate::client::{AuthContext, Target};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::version::Version;

use super::{CommandRunner, Operation, RawResult, Strategy};

/// Output options for get and get-next: numeric OIDs, full values, no units.
const SINGLE_VALUE_FLAGS: &str = "-O fntevU";

/// Output options for walks: `OID = value` lines without type prefixes.
const WALK_FLAGS: &str = "-O Qn";

/// Stop the tools from aborting when an agent returns non-increasing OIDs.
const INCREASING_CHECK_FLAG: &str = "-Cc";

/// Runs one of the configured net-snmp binaries for a call.
pub(crate) struct ExternalProcess<'a, R> {
    runner: &'a R,
    config: &'a Config,
}

impl<'a, R: CommandRunner> ExternalProcess<'a, R> {
    pub(crate) fn new(runner: &'a R, config: &'a Config) -> Self {
        Self { runner, config }
    }

    /// Build the shell command line for `op`.
    ///
    /// Returns `None` when `auth` does not fit the target's version, in which
    /// case nothing should be run.
    pub(crate) fn command_line(
        &self,
        op: Operation,
        auth: &AuthContext,
        target: &Target,
        oid: &str,
    ) -> Option<CommandLine> {
        let flags = auth_flags(target.version, auth);
        if flags.is_empty() {
            return None;
        }

        let mut line = CommandLine::default();
        match op {
            Operation::Get => {
                line.plain(self.runner.escape_cmd(&path_str(&self.config.path_snmpget)));
                line.plain(SINGLE_VALUE_FLAGS);
            }
            Operation::GetNext => {
                line.plain(self.runner.escape_cmd(&path_str(&self.config.path_snmpgetnext)));
                line.plain(SINGLE_VALUE_FLAGS);
                if self.config.oid_increasing_check_disable {
                    line.plain(INCREASING_CHECK_FLAG);
                }
            }
            Operation::Walk => {
                let binary = if self.use_bulk_walk(target) {
                    &self.config.path_snmpbulkwalk
                } else {
                    &self.config.path_snmpwalk
                };
                line.plain(self.runner.escape_cmd(&path_str(binary)));
                line.plain(WALK_FLAGS);
                if self.config.oid_increasing_check_disable {
                    line.plain(INCREASING_CHECK_FLAG);
                }
            }
        }

        for flag in flags {
            line.plain(flag.name);
            let quoted = self.runner.escape_arg(&flag.value);
            if flag.secret {
                line.secret(quoted);
            } else {
                line.plain(quoted);
            }
        }

        line.plain(format!("-v {}", target.version.cli_token()));
        line.plain(format!("-t {}", target.timeout_secs_ceil()));
        line.plain(format!("-r {}", target.retries));
        if op == Operation::Walk && self.use_bulk_walk(target) {
            line.plain(format!("-Cr{}", target.max_oids));
        }
        line.plain(format!(
            "{}:{}",
            self.runner.escape_arg(&target.host),
            target.port
        ));
        line.plain(self.runner.escape_arg(oid));

        Some(line)
    }

    /// Bulk walks need the binary, GETBULK support (v2c+), and more than one
    /// OID per request.
    fn use_bulk_walk(&self, target: &Target) -> bool {
        target.version != Version::V1
            && target.max_oids > 1
            && self.runner.binary_exists(&self.config.path_snmpbulkwalk)
    }
}

impl<R: CommandRunner> Strategy for ExternalProcess<'_, R> {
    async fn execute(
        &self,
        op: Operation,
        auth: &AuthContext,
        target: &Target,
        oid: &str,
    ) -> Result<RawResult> {
        let Some(line) = self.command_line(op, auth, target, oid) else {
            tracing::debug!(
                target: "snmp_query::transport",
                host = %target.host,
                version = %target.version,
                "no usable authentication for version, skipping external tool"
            );
            return Ok(RawResult::Lines(Vec::new()));
        };

        tracing::debug!(target: "snmp_query::transport", %op, command = %line.redacted(), "running external tool");

        let lines = self
            .runner
            .run(line.as_str())
            .await
            .map_err(|err| match err {
                Error::Io {
                    target: None,
                    source,
                } => Error::Io {
                    target: Some(target.to_string()),
                    source,
                },
                other => other,
            })?;

        Ok(RawResult::Lines(lines))
    }
}

/// A rendered command line, with a copy safe to log.
#[derive(Debug, Default)]
pub(crate) struct CommandLine {
    line: String,
    redacted: String,
}

impl CommandLine {
    fn plain(&mut self, token: impl AsRef<str>) {
        self.push(token.as_ref(), token.as_ref());
    }

    fn secret(&mut self, token: impl AsRef<str>) {
        self.push(token.as_ref(), "'***'");
    }

    fn push(&mut self, token: &str, shown: &str) {
        if !self.line.is_empty() {
            self.line.push(' ');
            self.redacted.push(' ');
        }
        self.line.push_str(token);
        self.redacted.push_str(shown);
    }

    /// The command line passed to the shell.
    pub(crate) fn as_str(&self) -> &str {
        &self.line
    }

    /// The command line with credentials masked.
    pub(crate) fn redacted(&self) -> &str {
        &self.redacted
    }
}

impl Drop for CommandLine {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.line);
    }
}

struct AuthFlag {
    name: &'static str,
    value: String,
    secret: bool,
}

impl AuthFlag {
    fn new(name: &'static str, value: impl ToString, secret: bool) -> Self {
        Self {
            name,
            value: value.to_string(),
            secret,
        }
    }
}

/// Authentication flags for `version`.
///
/// Protocol names go out exactly as the caller stored them; the tools do
/// their own matching. The result is empty when `auth` was built for a
/// different version than the target's. A `Target` and an `AuthContext` are
/// resolved separately, so a caller driving the strategy directly can pair
/// them wrongly; an empty result makes the strategy return no output instead
/// of running a tool with the wrong credentials.
fn auth_flags(version: Version, auth: &AuthContext) -> Vec<AuthFlag> {
    match (version, auth) {
        (Version::V1 | Version::V2c, AuthContext::Community { community }) => {
            vec![AuthFlag::new("-c", community, true)]
        }
        (
            Version::V3,
            AuthContext::UserAuth {
                username,
                auth_protocol,
                auth_password,
                privacy,
                context,
            },
        ) => {
            let level = auth
                .security_level()
                .map(|l| l.as_str())
                .unwrap_or_default();
            let mut flags = vec![
                AuthFlag::new("-u", username, false),
                AuthFlag::new("-l", level, false),
                AuthFlag::new("-a", auth_protocol, false),
                AuthFlag::new("-A", auth_password, true),
            ];
            if let Some(privacy) = privacy {
                flags.push(AuthFlag::new("-X", &privacy.password, true));
                flags.push(AuthFlag::new("-x", &privacy.protocol, false));
            }
            if !context.is_empty() {
                flags.push(AuthFlag::new("-n", context, false));
            }
            flags
        }
        _ => Vec::new(),
    }
}

/// A binary path as shell text. Non-UTF-8 bytes are replaced, which makes the
/// command fail to find the tool rather than run something else.
fn path_str(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}
