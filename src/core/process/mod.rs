// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution module.
//!
//! ```text
//! ProcessBuilder (builder.rs)
//!       |
//!       v
//! run()/run_with_cancellation() (runner.rs)
//!       |
//!       v
//! stdout/stderr streaming (io.rs)
//! ```

pub mod builder;
mod io;
mod runner;

#[cfg(test)]
mod tests;

pub use builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
