//! Timeout warnings emitted through `tracing`.

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::*;
use snmp_query::{Client, Version};
use tracing::subscriber::DefaultGuard;

/// Log output collected from a thread-local subscriber.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn warnings(&self) -> Vec<String> {
        self.text()
            .lines()
            .filter(|l| l.contains("WARN"))
            .map(str::to_string)
            .collect()
    }
}

/// Install a capturing subscriber for the current thread.
///
/// `#[tokio::test]` runs on a current-thread runtime, so the whole test body
/// sees it.
fn capture() -> (Captured, DefaultGuard) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (captured, guard)
}

/// A binding timeout is reported once with the device and OID.
#[tokio::test]
async fn test_binding_timeout_warns() {
    let (logs, _guard) = capture();
    let client = Client::builder()
        .binding(FakeBinding::new(&[Version::V2c]).unresponsive())
        .runner(FakeRunner::new())
        .build();

    assert_eq!(client.get(&v2c_request(), SYS_DESCR).await, "");

    let warnings = logs.warnings();
    assert_eq!(warnings.len(), 1, "{:?}", warnings);
    assert!(warnings[0].contains(&format!(
        "SNMP get timeout for device '{}' and OID '{}'",
        HOST, SYS_DESCR
    )));
    assert!(warnings[0].contains(&format!("host={}", HOST)));
    assert!(warnings[0].contains(&format!("oid={}", SYS_DESCR)));
    assert!(warnings[0].contains("snmp_query::client"));
}

/// Timeout text printed by snmpget is reported as a timeout.
#[tokio::test]
async fn test_external_get_timeout_warns() {
    let (logs, _guard) = capture();
    let runner = FakeRunner::new()
        .install_with_output("/usr/bin/snmpget", &["Timeout: No Response from 192.0.2.10"]);
    let client = Client::builder().runner(runner).build();

    client.get(&v2c_request(), SYS_NAME).await;

    let warnings = logs.warnings();
    assert_eq!(warnings.len(), 1, "{:?}", warnings);
    assert!(warnings[0].contains(&format!(
        "SNMP get timeout for device '{}' and OID '{}'",
        HOST, SYS_NAME
    )));
}

/// A walk cut short by a timeout warns once and keeps its records.
#[tokio::test]
async fn test_external_walk_timeout_warns() {
    let (logs, _guard) = capture();
    let runner = FakeRunner::new().install_with_output(
        "/usr/bin/snmpwalk",
        &[
            ".1.3.6.1.2.1.1.3.0 = 8642",
            "Timeout: No Response from 192.0.2.10",
        ],
    );
    let client = Client::builder().runner(runner).build();

    let records = client.walk(&v1_request(), SYSTEM_SUBTREE).await;
    assert_eq!(records.len(), 1);

    let warnings = logs.warnings();
    assert_eq!(warnings.len(), 1, "{:?}", warnings);
    assert!(warnings[0].contains(&format!(
        "SNMP walk timeout for device '{}' and OID '{}'",
        HOST, SYSTEM_SUBTREE
    )));
    assert!(warnings[0].contains("op=walk"));
}

/// With SNMP logging off, timeouts are silent on every path.
#[tokio::test]
async fn test_timeout_warnings_disabled() {
    let (logs, _guard) = capture();

    let in_process = Client::builder()
        .binding(FakeBinding::new(&[Version::V2c]).unresponsive())
        .runner(FakeRunner::new())
        .snmp_logging(false)
        .build();
    in_process.get(&v2c_request(), SYS_DESCR).await;

    let runner = FakeRunner::new()
        .install_with_output("/usr/bin/snmpget", &["Timeout: No Response from 192.0.2.10"])
        .install_with_output("/usr/bin/snmpwalk", &["Timeout: No Response from 192.0.2.10"]);
    let external = Client::builder()
        .runner(runner)
        .snmp_logging(false)
        .build();
    external.get(&v2c_request(), SYS_NAME).await;
    external.walk(&v1_request(), SYSTEM_SUBTREE).await;

    assert_eq!(logs.text(), "");
}
