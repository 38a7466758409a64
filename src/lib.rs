// SPDX-License-Identifier: PMPL-1.0-or-later

//! Modpack-Probe: startup diagnostics for modded game clients.
//!
//! Reads a client's `latest.log`, classifies each line against a fixed
//! table of known failure signatures, and produces a startup report.
//!
//! PIPELINE:
//! 1. **Signatures**: immutable table of named patterns, compiled once.
//! 2. **Classify**: pure pass over the log text yielding ordered issues and
//!    a "reached the main menu" flag.
//! 3. **Report**: severity counts, console summary, and a timestamped JSON
//!    snapshot written beside the instance.

pub mod classify;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod signatures;
pub mod storage;
pub mod types;
