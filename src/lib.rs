// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          setup / submodules / generate
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '------+-------------+-----'
//!                     |             |
//!                     v             v
//!                   tools          git
//!                git / cmake    gix queries,
//!                     |         .gitmodules
//!                     v
//!   +-----------------------------------------+
//!   |  core    process builder + runner       |
//!   +-----------------------------------------+
//!   |  foundation    error, logging           |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod tools;
