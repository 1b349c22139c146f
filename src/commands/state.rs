use crate::{
    commands::AppContext,
    constants::{
        PREFIX_ENDPOINTS, PREFIX_MESSAGE_PROCESSORS, PREFIX_PROXY_SERVICES, STATUS_ACTIVE,
        STATUS_INACTIVE,
    },
    models::{MessageResponse, StatusUpdate},
};
use anyhow::Result;
use clap::Subcommand;
use tracing::debug;

/// Artifacts whose runtime state can be switched on and off
#[derive(Subcommand, Debug)]
pub enum StateTarget {
    Endpoint { name: String },
    ProxyService { name: String },
    MessageProcessor { name: String },
}

impl StateTarget {
    fn resource(&self) -> (&'static str, &str) {
        match self {
            StateTarget::Endpoint { name } => (PREFIX_ENDPOINTS, name.as_str()),
            StateTarget::ProxyService { name } => (PREFIX_PROXY_SERVICES, name.as_str()),
            StateTarget::MessageProcessor { name } => (PREFIX_MESSAGE_PROCESSORS, name.as_str()),
        }
    }
}

pub async fn run(target: StateTarget, active: bool, ctx: &AppContext) -> Result<()> {
    let (path, name) = target.resource();
    let body = StatusUpdate {
        name: name.to_string(),
        status: if active { STATUS_ACTIVE } else { STATUS_INACTIVE }.to_string(),
    };
    debug!(path, name, status = %body.status, "changing artifact state");
    let reply: MessageResponse = ctx.client()?.post_json(path, &body).await?;
    println!("{}", reply.message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::context_for;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn deactivate_posts_inactive_status() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/management/proxy-services")
                .json_body(serde_json::json!({"name": "StockQuoteProxy", "status": "inactive"}));
            then.status(200)
                .body(r#"{"Message":"Proxy service StockQuoteProxy stopped successfully"}"#);
        });
        let dir = TempDir::new().unwrap();
        let ctx = context_for(&server, &dir);

        let target = StateTarget::ProxyService {
            name: "StockQuoteProxy".into(),
        };
        run(target, false, &ctx).await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn activate_targets_each_resource() {
        let server = MockServer::start_async().await;
        let endpoint = server.mock(|when, then| {
            when.method(POST)
                .path("/management/endpoints")
                .json_body(serde_json::json!({"name": "GrandOakEndpoint", "status": "active"}));
            then.status(200).body(r#"{"Message":"GrandOakEndpoint is switched On"}"#);
        });
        let processor = server.mock(|when, then| {
            when.method(POST)
                .path("/management/message-processors")
                .json_body(serde_json::json!({"name": "ScheduledProcessor", "status": "active"}));
            then.status(200).body(r#"{"Message":"ScheduledProcessor : is activated"}"#);
        });
        let dir = TempDir::new().unwrap();
        let ctx = context_for(&server, &dir);

        let ep = StateTarget::Endpoint {
            name: "GrandOakEndpoint".into(),
        };
        let mp = StateTarget::MessageProcessor {
            name: "ScheduledProcessor".into(),
        };
        run(ep, true, &ctx).await.unwrap();
        run(mp, true, &ctx).await.unwrap();
        endpoint.assert();
        processor.assert();
    }
}
