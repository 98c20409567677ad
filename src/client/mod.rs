//! Query execution.
//!
//! [`Client`] is the poller-facing entry point. Every call resolves its
//! [`Request`], builds a fresh [`AuthContext`], picks a transport, and
//! normalizes the result. Failures never escape [`Client::get`],
//! [`Client::get_next`] or [`Client::walk`]: an unusable request yields `"U"`
//! (or an empty walk), and anything else yields an empty value after being
//! logged. The `try_*` variants return the underlying [`Error`] instead.

mod auth;
mod builder;
mod request;
mod walk;

pub use auth::{AuthContext, Credentials, Privacy, SecurityLevel};
pub use builder::ClientBuilder;
pub use request::{DEFAULT_PORT, DEFAULT_TIMEOUT_MS, Request, Target};
pub use walk::WalkRecord;

use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, ParamErrorKind, Result};
use crate::format::normalize;
use crate::transport::{
    Binding, CommandRunner, ExternalProcess, InProcess, Method, NoBinding, Operation, RawResult,
    ShellRunner, Strategy, select,
};
use crate::version::Version;

/// Value returned by scalar queries whose request is unusable.
pub const UNAVAILABLE: &str = "U";

/// Marker the net-snmp tools print when an agent does not answer.
const TIMEOUT_MARKER: &str = "Timeout:";

/// SNMP query client.
///
/// Cheap to clone: clones share the configuration, binding and runner.
/// Calls keep no state between them, so one client can serve any number of
/// concurrent queries against different devices.
pub struct Client<B = NoBinding, R = ShellRunner> {
    inner: Arc<ClientInner<B, R>>,
}

struct ClientInner<B, R> {
    config: Config,
    binding: B,
    runner: R,
}

impl<B, R> Clone for Client<B, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Client {
    /// Start building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// A client that always uses the external tools with `config`.
    pub fn new(config: Config) -> Self {
        ClientBuilder::new().config(config).build()
    }
}

impl<B: Binding, R: CommandRunner> Client<B, R> {
    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// The transport a call for `version` would use right now.
    pub fn select(&self, version: Version) -> Method {
        select(
            version,
            &self.inner.binding,
            &self.inner.runner,
            &self.inner.config,
        )
    }

    /// Fetch one value.
    ///
    /// Returns `"U"` when the request is unusable and an empty string when
    /// the agent has no such object, did not answer, or returned only banned
    /// content.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use snmp_query::{Client, Config, Request};
    ///
    /// # async fn example() {
    /// let client = Client::new(Config::default());
    /// let request = Request::new("192.0.2.1", 2).community("public");
    /// let uptime = client.get(&request, ".1.3.6.1.2.1.1.3.0").await;
    /// # }
    /// ```
    pub async fn get(&self, request: &Request, oid: &str) -> String {
        scalar_or_sentinel(self.try_get(request, oid).await, request, oid)
    }

    /// Fetch the value following `oid`.
    pub async fn get_next(&self, request: &Request, oid: &str) -> String {
        scalar_or_sentinel(self.try_get_next(request, oid).await, request, oid)
    }

    /// Fetch several values from one device, one request at a time.
    ///
    /// Results are in the order of `oids`.
    pub async fn get_many<S: AsRef<str>>(&self, request: &Request, oids: &[S]) -> Vec<String> {
        let mut values = Vec::with_capacity(oids.len());
        for oid in oids {
            values.push(self.get(request, oid.as_ref()).await);
        }
        values
    }

    /// Fetch every value below `oid`.
    ///
    /// Returns an empty list when the request is unusable or the transport
    /// failed outright. A walk that timed out part-way returns whatever was
    /// received.
    pub async fn walk(&self, request: &Request, oid: &str) -> Vec<WalkRecord> {
        match self.try_walk(request, oid).await {
            Ok(records) => records,
            Err(err) => {
                log_failure(&err, request, oid);
                Vec::new()
            }
        }
    }

    /// Like [`get`](Self::get), but reports failures as errors.
    pub async fn try_get(&self, request: &Request, oid: &str) -> Result<String> {
        self.single(Operation::Get, request, oid).await
    }

    /// Like [`get_next`](Self::get_next), but reports failures as errors.
    pub async fn try_get_next(&self, request: &Request, oid: &str) -> Result<String> {
        self.single(Operation::GetNext, request, oid).await
    }

    /// Like [`walk`](Self::walk), but reports failures as errors.
    pub async fn try_walk(&self, request: &Request, oid: &str) -> Result<Vec<WalkRecord>> {
        let (target, auth) = self.prepare(request, oid)?;
        let method = self.walk_method(&target, &auth);
        let raw = self.execute(method, Operation::Walk, &auth, &target, oid).await?;

        if raw.joined().contains(TIMEOUT_MARKER) {
            self.warn_timeout(Operation::Walk, &target, oid);
        }

        let records = walk::shape(&raw, &self.inner.config);
        tracing::debug!(
            target: "snmp_query::client",
            host = %target.host,
            %oid,
            records = records.len(),
            "walk complete"
        );
        Ok(records)
    }

    async fn single(&self, op: Operation, request: &Request, oid: &str) -> Result<String> {
        let (target, auth) = self.prepare(request, oid)?;
        let method = self.method(&target, &auth);
        let raw = self.execute(method, op, &auth, &target, oid).await?.joined();

        if raw.contains(TIMEOUT_MARKER) {
            self.warn_timeout(op, &target, oid);
        }

        Ok(normalize(&raw, false, &self.inner.config))
    }

    fn prepare(&self, request: &Request, oid: &str) -> Result<(Target, AuthContext)> {
        if oid.trim().is_empty() {
            return Err(Error::param(ParamErrorKind::EmptyOid));
        }
        let target = request.resolve(&self.inner.config)?;
        let auth = AuthContext::build(target.version, request.creds())?;
        Ok((target, auth))
    }

    /// Transport for get and get-next.
    ///
    /// Bindings cannot carry a v3 context name, so such requests always go
    /// to the external tools.
    fn method(&self, target: &Target, auth: &AuthContext) -> Method {
        let method = self.select(target.version);
        if method == Method::InProcess
            && target.version == Version::V3
            && !auth.context().is_empty()
        {
            return Method::External;
        }
        method
    }

    /// Transport for walks.
    ///
    /// The bulk-walk tool is preferred over a binding that is not trusted
    /// for walks, except on v1 where it brings nothing.
    fn walk_method(&self, target: &Target, auth: &AuthContext) -> Method {
        let method = self.method(target, auth);
        if method == Method::InProcess
            && target.version != Version::V1
            && !self.inner.binding.trusts_walk()
            && self
                .inner
                .runner
                .binary_exists(&self.inner.config.path_snmpbulkwalk)
        {
            return Method::External;
        }
        method
    }

    async fn execute(
        &self,
        method: Method,
        op: Operation,
        auth: &AuthContext,
        target: &Target,
        oid: &str,
    ) -> Result<RawResult> {
        tracing::debug!(
            target: "snmp_query::client",
            host = %target.host,
            version = %target.version,
            %oid,
            %op,
            %method,
            "executing query"
        );

        let result = match method {
            Method::InProcess => {
                InProcess::new(&self.inner.binding)
                    .execute(op, auth, target, oid)
                    .await
            }
            Method::External => {
                ExternalProcess::new(&self.inner.runner, &self.inner.config)
                    .execute(op, auth, target, oid)
                    .await
            }
        };

        if let Err(err) = &result
            && err.is_timeout()
        {
            self.warn_timeout(op, target, oid);
        }
        result
    }

    fn warn_timeout(&self, op: Operation, target: &Target, oid: &str) {
        if self.inner.config.snmp_logging {
            tracing::warn!(
                target: "snmp_query::client",
                host = %target.host,
                %oid,
                %op,
                "SNMP {} timeout for device '{}' and OID '{}'",
                op,
                target.host,
                oid
            );
        }
    }
}

fn scalar_or_sentinel(result: Result<String>, request: &Request, oid: &str) -> String {
    match result {
        Ok(value) => value,
        Err(err) if err.is_invalid_request() => {
            tracing::debug!(target: "snmp_query::client", host = %request.host(), %oid, error = %err, "request rejected");
            UNAVAILABLE.to_string()
        }
        Err(err) => {
            log_failure(&err, request, oid);
            String::new()
        }
    }
}

fn log_failure(err: &Error, request: &Request, oid: &str) {
    tracing::debug!(target: "snmp_query::client", host = %request.host(), %oid, error = %err, "query failed");
}
