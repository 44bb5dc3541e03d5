//! Command-line entry: one lookup, or one per stdin line.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::lookup::{ReqwestTransport, UserLookupService};
use crate::ui::{render_lookup, UserLookupViewModel};

#[derive(Debug, Parser)]
#[command(name = "gitpeek", version, about = "Look up a public GitHub profile")]
pub struct Cli {
    /// Username to look up. Reads one username per line from stdin when omitted.
    pub username: Option<String>,

    /// Path to config file (default: ~/.config/gitpeek/config.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the user endpoint base URL.
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Resolve the effective configuration: file, then CLI overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .context("Failed to load configuration")?;

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn build_view_model(config: &Config) -> Result<UserLookupViewModel> {
    let transport =
        ReqwestTransport::new(&config.api).context("Failed to build HTTP client")?;
    let service = UserLookupService::new(Arc::new(transport), config.base_url()?);
    Ok(UserLookupViewModel::new(service))
}

pub async fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.load_config()?;
    let view_model = build_view_model(&config)?;

    if let Some(username) = &cli.username {
        let ok = lookup_and_print(&view_model, username).await;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let username = line.trim();
        if username.is_empty() {
            continue;
        }
        lookup_and_print(&view_model, username).await;
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

/// Returns `false` when the lookup ended in an error.
async fn lookup_and_print(view_model: &UserLookupViewModel, username: &str) -> bool {
    view_model.set_query_text(username);
    view_model.fetch().await;

    let state = view_model.state();
    let text = render_lookup(&state);
    if state.has_error() {
        eprintln!("{}", text);
        false
    } else {
        println!("{}", text);
        true
    }
}
