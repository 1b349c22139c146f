use crate::{
    client::ClientError,
    commands::AppContext,
    constants::{PREFIX_LOGIN, PREFIX_LOGOUT},
    models::{LoginResponse, MessageResponse},
    output::{print_list, Tabular},
};
use anyhow::{Context, Result};
use clap::Subcommand;
use dialoguer::{Input, Password};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use tracing::debug;

const LOGIN_FAILED_HINT: &str = "Login failed. Check the username and password and try again.";

#[derive(Subcommand, Debug)]
pub enum RemoteCommands {
    /// Add a new remote server
    Add {
        name: String,
        host: String,
        port: String,
    },
    /// Change the host and port of a remote
    Update {
        name: String,
        host: String,
        port: String,
    },
    /// Remove a remote (the default remote cannot be removed)
    Remove { name: String },
    /// Make a remote the target of all other commands
    Select { name: String },
    /// List configured remotes
    Show,
    /// Obtain an access token for the current remote
    Login {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Revoke and forget the current remote's access token
    Logout,
}

/// One line of `remote show`; the token itself is never printed
#[derive(Serialize, Debug)]
struct RemoteRow {
    name: String,
    host: String,
    port: String,
    current: bool,
    logged_in: bool,
}

impl Tabular for RemoteRow {
    const HEADERS: &'static [&'static str] = &["", "NAME", "HOST", "PORT", "LOGGED IN"];

    fn row(&self) -> Vec<String> {
        vec![
            if self.current { "*" } else { "" }.to_string(),
            self.name.clone(),
            self.host.clone(),
            self.port.clone(),
            if self.logged_in { "yes" } else { "no" }.to_string(),
        ]
    }
}

pub async fn run(cmd: RemoteCommands, ctx: &mut AppContext) -> Result<()> {
    match cmd {
        RemoteCommands::Add { name, host, port } => {
            ctx.config.add(&name, &host, &port)?;
            ctx.save()?;
            println!("✅ Added remote '{name}' → {host}:{port}");
        }
        RemoteCommands::Update { name, host, port } => {
            ctx.config.update(&name, &host, &port)?;
            ctx.save()?;
            println!("✅ Updated remote '{name}' → {host}:{port}");
        }
        RemoteCommands::Remove { name } => {
            ctx.config.remove(&name)?;
            ctx.save()?;
            println!(
                "✅ Removed remote '{name}' (current remote: '{}')",
                ctx.config.current
            );
        }
        RemoteCommands::Select { name } => {
            ctx.config.select(&name)?;
            ctx.save()?;
            println!("✅ Selected remote '{name}'");
        }
        RemoteCommands::Show => {
            let rows: Vec<RemoteRow> = ctx
                .config
                .remotes
                .iter()
                .map(|(name, remote)| RemoteRow {
                    name: name.clone(),
                    host: remote.host.clone(),
                    port: remote.port.clone(),
                    current: *name == ctx.config.current,
                    logged_in: remote.has_token(),
                })
                .collect();
            print_list(ctx.opts.output, &rows)?;
        }
        RemoteCommands::Login { username, password } => login(ctx, username, password).await?,
        RemoteCommands::Logout => logout(ctx).await?,
    }
    Ok(())
}

async fn login(
    ctx: &mut AppContext,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let current = ctx.config.current.clone();
    let username = match username {
        Some(u) => u,
        None => Input::<String>::new()
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, basic_auth(&username, &password)?);
    let reply: LoginResponse = ctx
        .client()?
        .with_unauthorized_hint(LOGIN_FAILED_HINT)
        .fetch_with_headers(PREFIX_LOGIN, headers, &[])
        .await
        .with_context(|| format!("logging in to remote '{current}'"))?;

    ctx.config.set_token(&current, &reply.access_token);
    ctx.save()?;
    println!("✅ Logged in to remote '{current}' as '{username}'");
    Ok(())
}

async fn logout(ctx: &mut AppContext) -> Result<()> {
    let current = ctx.config.current.clone();
    if !ctx.config.current_remote()?.has_token() {
        println!("Not logged in to remote '{current}'");
        return Ok(());
    }

    match ctx
        .client()?
        .fetch::<MessageResponse>(PREFIX_LOGOUT, &[])
        .await
    {
        Ok(_) => {}
        // the stored token is already useless, drop it anyway
        Err(ClientError::Unauthorized) => debug!(remote = %current, "token already rejected"),
        Err(e) => return Err(e).with_context(|| format!("logging out of remote '{current}'")),
    }

    ctx.config.set_token(&current, "");
    ctx.save()?;
    println!("✅ Logged out of remote '{current}'");
    Ok(())
}

fn basic_auth(username: &str, password: &str) -> Result<HeaderValue> {
    let token = base64::encode_config(format!("{username}:{password}"), base64::STANDARD);
    Ok(HeaderValue::from_str(&format!("Basic {token}"))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{commands::testing::context_for, config::RemoteConfig};
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn saved(ctx: &AppContext) -> RemoteConfig {
        RemoteConfig::open(&ctx.config_path).unwrap()
    }

    #[tokio::test]
    async fn login_stores_and_persists_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/management/login")
                .header("authorization", "Basic YWRtaW46YWRtaW4=");
            then.status(200).body(r#"{"AccessToken":"eyJ4NXQiOi"}"#);
        });
        let dir = TempDir::new().unwrap();
        let mut ctx = context_for(&server, &dir);

        let cmd = RemoteCommands::Login {
            username: Some("admin".into()),
            password: Some("admin".into()),
        };
        run(cmd, &mut ctx).await.unwrap();

        mock.assert();
        assert_eq!(ctx.config.remotes["default"].access_token, "eyJ4NXQiOi");
        assert_eq!(saved(&ctx).remotes["default"].access_token, "eyJ4NXQiOi");
    }

    #[tokio::test]
    async fn failed_login_leaves_config_untouched() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/management/login");
            then.status(401);
        });
        let dir = TempDir::new().unwrap();
        let mut ctx = context_for(&server, &dir);

        let cmd = RemoteCommands::Login {
            username: Some("admin".into()),
            password: Some("wrong".into()),
        };
        let err = run(cmd, &mut ctx).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::Unauthorized)
        ));
        assert!(!saved(&ctx).remotes["default"].has_token());
    }

    async fn logout_with_status(status: u16) -> (AppContext, Result<()>) {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/management/logout")
                .header("authorization", "Bearer old-token");
            then.status(status).body(r#"{"Message":"Logged out"}"#);
        });
        let dir = TempDir::new().unwrap();
        let mut ctx = context_for(&server, &dir);
        ctx.config.set_token("default", "old-token");
        ctx.save().unwrap();

        let result = run(RemoteCommands::Logout, &mut ctx).await;
        mock.assert();
        ctx.config = saved(&ctx);
        (ctx, result)
    }

    #[tokio::test]
    async fn logout_clears_token() {
        let (ctx, result) = logout_with_status(200).await;
        result.unwrap();
        assert!(!ctx.config.remotes["default"].has_token());
    }

    #[tokio::test]
    async fn logout_clears_rejected_token() {
        let (ctx, result) = logout_with_status(401).await;
        result.unwrap();
        assert!(!ctx.config.remotes["default"].has_token());
    }

    #[tokio::test]
    async fn logout_keeps_token_on_server_error() {
        let (ctx, result) = logout_with_status(500).await;
        assert!(result.is_err());
        assert_eq!(ctx.config.remotes["default"].access_token, "old-token");
    }

    #[tokio::test]
    async fn logout_without_token_skips_the_server() {
        // no mocks: any request would come back as an unmatched 404
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();
        let mut ctx = context_for(&server, &dir);

        run(RemoteCommands::Logout, &mut ctx).await.unwrap();
    }

    #[test]
    fn basic_auth_encodes_credentials() {
        let hv = basic_auth("admin", "admin").unwrap();
        assert_eq!(hv.to_str().unwrap(), "Basic YWRtaW46YWRtaW4=");
    }

    #[test]
    fn remote_row_marks_current() {
        let row = RemoteRow {
            name: "default".into(),
            host: "localhost".into(),
            port: "9164".into(),
            current: true,
            logged_in: false,
        };
        assert_eq!(row.row(), vec!["*", "default", "localhost", "9164", "no"]);
    }
}
