//! Per-call transport selection.

use crate::config::Config;
use crate::version::Version;

use super::{Binding, CommandRunner};

/// How a call reaches the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Through the host's in-process [`Binding`].
    InProcess,
    /// Through the net-snmp command-line tools.
    External,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProcess => write!(f, "in-process"),
            Self::External => write!(f, "external"),
        }
    }
}

/// Pick the transport for `version`.
///
/// A binding that speaks the exact version wins. Otherwise v2c/v3 go to the
/// external tools when `snmpget` is installed, since bindings have a history
/// of mangling 64-bit counters on those versions. A binding for some other
/// version is the next fallback, and with nothing else available the external
/// path is used anyway so its failure surfaces as an empty result.
///
/// Capabilities are checked again on every call.
pub fn select<B, R>(version: Version, binding: &B, runner: &R, config: &Config) -> Method
where
    B: Binding,
    R: CommandRunner,
{
    if binding.supports(version) {
        return Method::InProcess;
    }
    if version != Version::V1 && runner.binary_exists(&config.path_snmpget) {
        return Method::External;
    }
    if Version::ALL.iter().any(|v| binding.supports(*v)) {
        return Method::InProcess;
    }
    Method::External
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::NoBinding;
    use crate::transport::mock::{MockBinding, MockRunner};

    #[test]
    fn test_exact_binding_wins() {
        let binding = MockBinding::new(&[Version::V2c]);
        let runner = MockRunner::with_binaries(&["/usr/bin/snmpget"]);
        assert_eq!(
            select(Version::V2c, &binding, &runner, &Config::default()),
            Method::InProcess
        );
    }

    #[test]
    fn test_external_preferred_over_mismatched_binding() {
        let binding = MockBinding::new(&[Version::V1]);
        let runner = MockRunner::with_binaries(&["/usr/bin/snmpget"]);
        for version in [Version::V2c, Version::V3] {
            assert_eq!(
                select(version, &binding, &runner, &Config::default()),
                Method::External
            );
        }
    }

    #[test]
    fn test_any_binding_as_last_resort() {
        let binding = MockBinding::new(&[Version::V1]);
        let runner = MockRunner::with_binaries(&[]);
        assert_eq!(
            select(Version::V3, &binding, &runner, &Config::default()),
            Method::InProcess
        );
    }

    #[test]
    fn test_v1_without_binding_goes_external() {
        let runner = MockRunner::with_binaries(&["/usr/bin/snmpget"]);
        assert_eq!(
            select(Version::V1, &NoBinding, &runner, &Config::default()),
            Method::External
        );
    }

    #[test]
    fn test_nothing_available_goes_external() {
        let runner = MockRunner::with_binaries(&[]);
        for version in Version::ALL {
            assert_eq!(
                select(version, &NoBinding, &runner, &Config::default()),
                Method::External
            );
        }
    }

    #[test]
    fn test_checks_configured_path() {
        let config = Config {
            path_snmpget: "/opt/net-snmp/bin/snmpget".into(),
            ..Config::default()
        };
        let binding = MockBinding::new(&[Version::V1]);
        let runner = MockRunner::with_binaries(&["/usr/bin/snmpget"]);
        assert_eq!(
            select(Version::V2c, &binding, &runner, &config),
            Method::InProcess
        );
    }
}
