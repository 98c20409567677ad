//! In-process execution through a host [`Binding`].

use crate::client::{AuthContext, Target};
use crate::error::Result;

use super::{Binding, Operation, RawResult, Session, Strategy};

/// Drives a [`Binding`] for one call.
pub(crate) struct InProcess<'a, B> {
    binding: &'a B,
}

impl<'a, B: Binding> InProcess<'a, B> {
    pub(crate) fn new(binding: &'a B) -> Self {
        Self { binding }
    }
}

impl<B: Binding> Strategy for InProcess<'_, B> {
    async fn execute(
        &self,
        op: Operation,
        auth: &AuthContext,
        target: &Target,
        oid: &str,
    ) -> Result<RawResult> {
        let session = Session { target, auth, oid };
        tracing::debug!(
            target: "snmp_query::transport",
            host = %target.host,
            port = target.port,
            version = %target.version,
            %oid,
            %op,
            timeout_us = session.timeout_micros(),
            retries = session.retries(),
            "in-process request"
        );

        match op {
            Operation::Get => self.binding.get(&session).await.map(RawResult::Text),
            Operation::GetNext => self.binding.get_next(&session).await.map(RawResult::Text),
            Operation::Walk => self.binding.walk(&session).await.map(RawResult::Records),
        }
    }
}
