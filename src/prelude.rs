//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust,no_run
//! use snmp_query::prelude::*;
//! ```
//!
//! This imports:
//! - Core types: [`Client`], [`Request`], [`WalkRecord`], [`Config`]
//! - Error handling: [`Error`], [`Result`]
//! - Transport seams: [`Binding`], [`CommandRunner`]

pub use crate::client::{Client, Credentials, Request, WalkRecord};
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::transport::{Binding, CommandRunner};
pub use crate::version::Version;
