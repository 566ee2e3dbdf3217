//! Library crate root re-exporting endpoint derivation, server, and web modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod endpoint;
pub mod server;
pub mod tools;
pub mod web;

pub use endpoint::{derive, derive_from, AddressContext, EndpointUrl, Scheme};
