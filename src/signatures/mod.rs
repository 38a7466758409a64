// SPDX-License-Identifier: PMPL-1.0-or-later

//! Failure signature detection for game client logs

pub mod engine;
pub mod rules;

pub use engine::{Signature, SignatureTable};
