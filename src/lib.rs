//! # snmp-query
//!
//! SNMP v1/v2c/v3 query client for network pollers.
//!
//! Values are fetched either through an in-process protocol [`Binding`]
//! supplied by the host or by running the net-snmp command-line tools, and
//! every result is normalized into the plain string a poller stores.
//!
//! ## Features
//!
//! - `get`, `get_next` and `walk` against SNMPv1, v2c and v3 agents
//! - Per-call transport selection that prefers the external tools for
//!   v2c/v3 counters and the bulk-walk tool for large subtrees
//! - Value normalization: type tags, quoting, Hex-STRINGs, MAC addresses,
//!   Timeticks and vendor banners
//! - Failures folded into sentinel values, so a poller keeps going across
//!   thousands of unreliable devices
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snmp_query::{Client, Config, Request};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let client = Client::new(Config::default());
//!
//!     let request = Request::new("192.168.1.1", 2)
//!         .community("public")
//!         .timeout_ms(1000);
//!
//!     let descr = client.get(&request, ".1.3.6.1.2.1.1.1.0").await;
//!     println!("sysDescr: {descr}");
//!
//!     for record in client.walk(&request, ".1.3.6.1.2.1.2.2.1.2").await {
//!         println!("{} = {}", record.oid, record.value);
//!     }
//! }
//! ```
//!
//! ## SNMPv3 Example
//!
//! ```rust,no_run
//! use snmp_query::{Client, Config, Request};
//!
//! # async fn example() {
//! let client = Client::new(Config::default());
//! let request = Request::new("192.168.1.1", 3)
//!     .username("poller")
//!     .auth_protocol("SHA")
//!     .auth_password("authpass123")
//!     .priv_protocol("AES")
//!     .priv_password("privpass123");
//!
//! let name = client.get(&request, ".1.3.6.1.2.1.1.5.0").await;
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod prelude;
pub mod transport;
pub mod v3;
pub mod version;

#[cfg(feature = "cli")]
pub mod cli;

pub(crate) mod util;

pub use client::{
    AuthContext, Client, ClientBuilder, Credentials, Privacy, Request, SecurityLevel, Target,
    UNAVAILABLE, WalkRecord,
};
pub use config::Config;
pub use error::{CredentialErrorKind, Error, ParamErrorKind, Result};
pub use format::normalize;
pub use transport::{Binding, CommandRunner, Method, NoBinding, Session, ShellRunner, select};
pub use v3::{AuthProtocol, PrivProtocol};
pub use version::Version;
