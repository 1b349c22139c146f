use crate::{
    client::MiClient,
    config::{config_path, RemoteConfig},
    output::OutputFormat,
};
use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;

pub mod completions;
pub mod log_level;
pub mod remote;
pub mod show;
pub mod state;

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "List artifacts of a kind, or show one by name, on the current remote")]
    Show {
        #[command(subcommand)]
        resource: show::ShowCommands,
    },
    #[command(about = "Manage remote servers: add/update/remove/select/show, login/logout")]
    Remote {
        #[command(subcommand)]
        cmd: remote::RemoteCommands,
    },
    #[command(about = "Inspect or change the level of a logger on the current remote")]
    LogLevel {
        #[command(subcommand)]
        cmd: log_level::LogLevelCommands,
    },
    #[command(about = "Activate an endpoint, proxy service or message processor")]
    Activate {
        #[command(subcommand)]
        target: state::StateTarget,
    },
    #[command(about = "Deactivate an endpoint, proxy service or message processor")]
    Deactivate {
        #[command(subcommand)]
        target: state::StateTarget,
    },
    #[command(about = "Emit shell completion scripts (bash/zsh/fish)")]
    Completions { shell: String },
}

/// Process-wide flags that commands need besides their own arguments
#[derive(Debug, Clone, Copy)]
pub struct GlobalOpts {
    pub verify_tls: bool,
    pub output: OutputFormat,
}

/// State shared by command handlers for one invocation
///
/// The remote registry is loaded once here and handed to each command by
/// reference; commands that change it call [`AppContext::save`].
pub struct AppContext {
    pub config: RemoteConfig,
    pub config_path: PathBuf,
    pub opts: GlobalOpts,
    /// Replaces the URL derived from the current remote when set
    pub base_url: Option<String>,
}

impl AppContext {
    pub fn load(config_path: PathBuf, opts: GlobalOpts) -> Result<Self> {
        let config = RemoteConfig::open(&config_path)
            .with_context(|| format!("loading config {}", config_path.display()))?;
        Ok(AppContext {
            config,
            config_path,
            opts,
            base_url: None,
        })
    }

    /// HTTP client bound to the current remote
    pub fn client(&self) -> Result<MiClient> {
        match &self.base_url {
            Some(url) => {
                let token = &self.config.current_remote()?.access_token;
                Ok(MiClient::new(url.clone(), token.clone(), self.opts.verify_tls)?)
            }
            None => MiClient::for_current(&self.config, self.opts.verify_tls),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.config
            .persist(&self.config_path)
            .with_context(|| format!("saving config {}", self.config_path.display()))
    }
}

pub async fn run(cmd: Commands, opts: GlobalOpts) -> Result<()> {
    if let Commands::Completions { shell } = &cmd {
        return completions::run(shell);
    }

    let mut ctx = AppContext::load(config_path(), opts)?;
    match cmd {
        Commands::Show { resource } => show::run(resource, &ctx).await,
        Commands::Remote { cmd } => remote::run(cmd, &mut ctx).await,
        Commands::LogLevel { cmd } => log_level::run(cmd, &ctx).await,
        Commands::Activate { target } => state::run(target, true, &ctx).await,
        Commands::Deactivate { target } => state::run(target, false, &ctx).await,
        Commands::Completions { .. } => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use httpmock::MockServer;
    use tempfile::TempDir;

    /// Context backed by a fresh config file in `dir`, sending requests to `server`
    pub(crate) fn context_for(server: &MockServer, dir: &TempDir) -> AppContext {
        let opts = GlobalOpts {
            verify_tls: false,
            output: OutputFormat::Table,
        };
        let mut ctx = AppContext::load(dir.path().join("mi_cli_config.yaml"), opts).unwrap();
        ctx.base_url = Some(server.url("/management/"));
        ctx
    }
}
