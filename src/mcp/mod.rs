//! MCP (Model Context Protocol) server and tool types.
//!
//! This module provides an MCP server for Freshservice custom object records,
//! allowing AI assistants to create, list, update, and delete records.
//!
//! # Example
//!
//! ```no_run
//! use freshservice::mcp::RecordServer;
//!
//! # fn main() -> freshservice::Result<()> {
//! let server = RecordServer::from_env()?;
//! // Server can now be used with rmcp transport
//! # Ok(())
//! # }
//! ```

mod params;
mod server;

pub use params::*;
pub use server::RecordServer;
