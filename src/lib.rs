//! uthoctl: command line client for the Utho cloud API
//!
//! Layers, outermost first:
//! - `cli`: argument parsing, dispatch, table output
//! - `infrastructure`: HTTP transport, terminal prompts, service container
//! - `application`: API client and one service per resource family
//! - `domain`: resource entities and request parameters

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
