//! Interactive explorer for US bike-share trip data.
//!
//! Layers, innermost first:
//! - [`domain`]: trip table, filters, statistics (no I/O)
//! - [`application`]: services for loading, selecting, reporting, paging
//! - [`infrastructure`]: file and console implementations, service wiring
//! - [`cli`]: argument parsing, command dispatch, rendering

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
