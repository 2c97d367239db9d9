// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Setup | Submodules | Generate | Options | Configs | Version
//! ```

use std::process::ExitCode;

use vkn_setup::cli::global::GlobalOptions;
use vkn_setup::cli::{self, Command};
use vkn_setup::cmd::config::{run_configs_command, run_options_command};
use vkn_setup::cmd::generate::run_generate_command;
use vkn_setup::cmd::setup::run_setup_command;
use vkn_setup::cmd::submodules::run_submodules_command;
use vkn_setup::config::Config;
use vkn_setup::config::loader::ConfigLoader;
use vkn_setup::error::Result;
use vkn_setup::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    // Version and configs need no merged configuration
    match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            match loader {
                Ok(loader) => {
                    run_configs_command(&loader.format_loaded_files());
                    return ExitCode::SUCCESS;
                }
                Err(e) => {
                    eprintln!("Failed to load config: {e:#}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => {}
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

/// Console/file levels come from the config file, overridden by CLI flags.
fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.output_log_level);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.file_log_level);

    let log_file = global
        .log_file
        .clone()
        .or_else(|| {
            if config.global.log_file.as_os_str().is_empty() {
                None
            } else {
                Some(config.global.log_file.clone())
            }
        })
        .map(|p| p.display().to_string());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let dry_run = cli.global.dry || config.global.dry;

    let result = match &cli.command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Setup(args)) => run_setup_command(args, config, dry_run).await,
        Some(Command::Submodules(args)) => run_submodules_command(args, config, dry_run).await,
        Some(Command::Generate(args)) => run_generate_command(args, config, dry_run).await,
        Some(Command::Version | Command::Configs) | None => {
            // Version and Configs returned early in main
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_configs {
        loader = loader.add_default_file();
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }

    if let Some(ref root) = global.root {
        loader = loader.set("paths.root", root.display().to_string())?;
    }
    if global.dry {
        loader = loader.set("global.dry", true)?;
    }

    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?.build()
}
