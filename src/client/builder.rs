//! Typestate builder for query clients.
//!
//! The binding and runner are type parameters of [`Client`], so swapping one
//! in changes the builder's type. A client built without calling
//! [`binding`](ClientBuilder::binding) has no in-process capability and always
//! shells out; one built without [`runner`](ClientBuilder::runner) spawns the
//! tools through `sh -c`.
//!
//! # Examples
//!
//! ```rust
//! use snmp_query::{Client, Config};
//!
//! // External tools only, custom binary locations
//! let client = Client::builder()
//!     .config(Config {
//!         path_snmpget: "/opt/net-snmp/bin/snmpget".into(),
//!         path_snmpbulkwalk: "/opt/net-snmp/bin/snmpbulkwalk".into(),
//!         ..Config::default()
//!     })
//!     .build();
//! assert!(client.config().snmp_logging);
//! ```

use std::sync::Arc;

use crate::config::Config;
use crate::transport::{Binding, CommandRunner, NoBinding, ShellRunner};

use super::{Client, ClientInner};

/// Builder for [`Client`].
///
/// Created via [`Client::builder()`].
pub struct ClientBuilder<B = NoBinding, R = ShellRunner> {
    config: Config,
    binding: B,
    runner: R,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            config: Config::default(),
            binding: NoBinding,
            runner: ShellRunner,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, R> ClientBuilder<B, R> {
    /// Replace the configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the banned-substring list.
    pub fn banned_strings<I, S>(mut self, banned: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.banned_snmp_strings = banned.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable timeout warnings.
    pub fn snmp_logging(mut self, enabled: bool) -> Self {
        self.config.snmp_logging = enabled;
        self
    }

    /// Use an in-process protocol binding.
    pub fn binding<B2: Binding>(self, binding: B2) -> ClientBuilder<B2, R> {
        ClientBuilder {
            config: self.config,
            binding,
            runner: self.runner,
        }
    }

    /// Use a different command runner for the external tools.
    pub fn runner<R2: CommandRunner>(self, runner: R2) -> ClientBuilder<B, R2> {
        ClientBuilder {
            config: self.config,
            binding: self.binding,
            runner,
        }
    }
}

impl<B: Binding, R: CommandRunner> ClientBuilder<B, R> {
    /// Build the client.
    pub fn build(self) -> Client<B, R> {
        Client {
            inner: Arc::new(ClientInner {
                config: self.config,
                binding: self.binding,
                runner: self.runner,
            }),
        }
    }
}
