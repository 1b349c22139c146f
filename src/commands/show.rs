use crate::{
    commands::AppContext,
    constants::*,
    models::*,
    output::{print_detail, print_list, Detail, Tabular},
};
use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Name of a single artifact to describe; lists all when omitted
    pub name: Option<String>,
    /// Only list artifacts whose name contains this key
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Name of a single template to describe; lists all when omitted
    pub name: Option<String>,
    /// Template kind, required when a name is given
    #[arg(long = "type", value_enum)]
    pub kind: Option<TemplateKind>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Endpoint,
    Sequence,
}

impl TemplateKind {
    fn as_param(self) -> &'static str {
        match self {
            TemplateKind::Endpoint => "endpoint",
            TemplateKind::Sequence => "sequence",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ShowCommands {
    /// REST APIs
    Api(ShowArgs),
    /// Deployed composite (carbon) applications
    CompositeApp(ShowArgs),
    /// Endpoints
    Endpoint(ShowArgs),
    /// Inbound endpoints
    InboundEndpoint(ShowArgs),
    /// Proxy services
    ProxyService(ShowArgs),
    /// Sequences
    Sequence(ShowArgs),
    /// Scheduled tasks
    Task(ShowArgs),
    /// Data services
    DataService(ShowArgs),
    /// Message stores
    MessageStore(ShowArgs),
    /// Message processors
    MessageProcessor(ShowArgs),
    /// Installed connectors
    Connector {
        #[arg(long)]
        search: Option<String>,
    },
    /// Endpoint and sequence templates
    Template(TemplateArgs),
    /// Local entries
    LocalEntry(ShowArgs),
    /// Data sources
    DataSource(ShowArgs),
    /// Server log files; a name prints the file's content
    LogFile(ShowArgs),
    /// Users of the management API
    User(ShowArgs),
    /// Roles defined in the user store
    Role {
        #[arg(long)]
        search: Option<String>,
    },
    /// Product, Java and OS details of the server
    Server,
}

pub async fn run(cmd: ShowCommands, ctx: &AppContext) -> Result<()> {
    match cmd {
        ShowCommands::Api(args) => {
            show::<ApiSummary, Api>(ctx, PREFIX_APIS, PARAM_API_NAME, &args).await
        }
        ShowCommands::CompositeApp(args) => {
            show::<CompositeAppSummary, CompositeApp>(
                ctx,
                PREFIX_CARBON_APPS,
                PARAM_CARBON_APP_NAME,
                &args,
            )
            .await
        }
        ShowCommands::Endpoint(args) => {
            show::<EndpointSummary, Endpoint>(ctx, PREFIX_ENDPOINTS, PARAM_ENDPOINT_NAME, &args)
                .await
        }
        ShowCommands::InboundEndpoint(args) => {
            show::<InboundEndpointSummary, InboundEndpoint>(
                ctx,
                PREFIX_INBOUND_ENDPOINTS,
                PARAM_INBOUND_ENDPOINT_NAME,
                &args,
            )
            .await
        }
        ShowCommands::ProxyService(args) => {
            show::<ProxySummary, Proxy>(
                ctx,
                PREFIX_PROXY_SERVICES,
                PARAM_PROXY_SERVICE_NAME,
                &args,
            )
            .await
        }
        ShowCommands::Sequence(args) => {
            show::<SequenceSummary, Sequence>(ctx, PREFIX_SEQUENCES, PARAM_SEQUENCE_NAME, &args)
                .await
        }
        ShowCommands::Task(args) => {
            show::<TaskSummary, Task>(ctx, PREFIX_TASKS, PARAM_TASK_NAME, &args).await
        }
        ShowCommands::DataService(args) => {
            show::<DataServiceSummary, DataService>(
                ctx,
                PREFIX_DATA_SERVICES,
                PARAM_DATA_SERVICE_NAME,
                &args,
            )
            .await
        }
        ShowCommands::MessageStore(args) => {
            show::<MessageStoreSummary, MessageStore>(ctx, PREFIX_MESSAGE_STORES, PARAM_NAME, &args)
                .await
        }
        ShowCommands::MessageProcessor(args) => {
            show::<MessageProcessorSummary, MessageProcessor>(
                ctx,
                PREFIX_MESSAGE_PROCESSORS,
                PARAM_NAME,
                &args,
            )
            .await
        }
        ShowCommands::Connector { search } => {
            list::<ConnectorSummary>(ctx, PREFIX_CONNECTORS, search.as_deref()).await
        }
        ShowCommands::Template(args) => show_template(ctx, &args).await,
        ShowCommands::LocalEntry(args) => {
            show::<LocalEntrySummary, LocalEntry>(ctx, PREFIX_LOCAL_ENTRIES, PARAM_NAME, &args)
                .await
        }
        ShowCommands::DataSource(args) => {
            show::<DataSourceSummary, DataSource>(ctx, PREFIX_DATA_SOURCES, PARAM_NAME, &args)
                .await
        }
        ShowCommands::LogFile(args) => match &args.name {
            Some(name) => {
                let content = ctx
                    .client()?
                    .fetch_text(PREFIX_LOG_FILES, &[(PARAM_LOG_FILE, name.as_str())])
                    .await?;
                print!("{content}");
                Ok(())
            }
            None => list::<LogFileSummary>(ctx, PREFIX_LOG_FILES, args.search.as_deref()).await,
        },
        ShowCommands::User(args) => match &args.name {
            Some(name) => {
                let path = format!("{PREFIX_USERS}/{name}");
                let user: User = ctx.client()?.fetch(&path, &[]).await?;
                print_detail(ctx.opts.output, &user)
            }
            None => list::<UserSummary>(ctx, PREFIX_USERS, args.search.as_deref()).await,
        },
        ShowCommands::Role { search } => {
            list::<RoleSummary>(ctx, PREFIX_ROLES, search.as_deref()).await
        }
        ShowCommands::Server => {
            let summary: ServerSummary = ctx.client()?.fetch(PREFIX_SERVER_SUMMARY, &[]).await?;
            print_detail(ctx.opts.output, &summary)
        }
    }
}

/// List view without a name, detail view with one
async fn show<S, D>(ctx: &AppContext, path: &str, name_param: &str, args: &ShowArgs) -> Result<()>
where
    S: DeserializeOwned + Tabular + Serialize,
    D: DeserializeOwned + Detail + Serialize,
{
    match &args.name {
        Some(name) => {
            let record: D = ctx
                .client()?
                .fetch(path, &[(name_param, name.as_str())])
                .await?;
            print_detail(ctx.opts.output, &record)
        }
        None => list::<S>(ctx, path, args.search.as_deref()).await,
    }
}

async fn list<S>(ctx: &AppContext, path: &str, search: Option<&str>) -> Result<()>
where
    S: DeserializeOwned + Tabular + Serialize,
{
    let params: Vec<(&str, &str)> = search
        .map(|key| vec![(PARAM_SEARCH_KEY, key)])
        .unwrap_or_default();
    let reply: ListResponse<S> = ctx.client()?.fetch(path, &params).await?;
    print_list(ctx.opts.output, &reply.list)
}

async fn show_template(ctx: &AppContext, args: &TemplateArgs) -> Result<()> {
    let client = ctx.client()?;
    match (&args.name, args.kind) {
        (Some(name), Some(kind)) => {
            let params = [(PARAM_TYPE, kind.as_param()), (PARAM_NAME, name.as_str())];
            let template: Template = client.fetch(PREFIX_TEMPLATES, &params).await?;
            print_detail(ctx.opts.output, &template)
        }
        (Some(_), None) => bail!("--type endpoint|sequence is required to show a single template"),
        (None, kind) => {
            let params: Vec<(&str, &str)> = kind
                .map(|k| vec![(PARAM_TYPE, k.as_param())])
                .unwrap_or_default();
            let reply: ListResponse<TemplateSummary> =
                client.fetch(PREFIX_TEMPLATES, &params).await?;
            print_list(ctx.opts.output, &reply.list)
        }
    }
}
