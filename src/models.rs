//! Typed records returned by the management API
//!
//! Every resource comes in two shapes: a summary row used by list views and a
//! detail record used when a single item is requested by name. List endpoints
//! wrap their rows in [`ListResponse`].

use crate::output::{Detail, Tabular};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// `{"count": N, "list": [...]}` envelope shared by all list endpoints
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ListResponse<T> {
    pub count: usize,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

/// `{"Error": "..."}` body the server attaches to failed requests
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    #[serde(rename = "Error")]
    pub error: String,
}

/// Reply of the `login` resource
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(rename = "AccessToken")]
    pub access_token: String,
}

/// Plain acknowledgement; the server spells the key both ways
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageResponse {
    #[serde(alias = "Message", default)]
    pub message: String,
}

// ---------------------------------------------------------------- APIs

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiSummary {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiResource {
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Api {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub stats: String,
    #[serde(default)]
    pub tracing: String,
    #[serde(default)]
    pub resources: Vec<ApiResource>,
}

impl Tabular for ApiSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "URL"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.url.clone()]
    }
}

impl Detail for Api {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.clone()),
            ("Version", self.version.clone()),
            ("Url", self.url.clone()),
            ("Stats", self.stats.clone()),
            ("Tracing", self.tracing.clone()),
        ];
        for resource in &self.resources {
            fields.push((
                "Resource",
                format!("{} {}", resource.methods.join(","), resource.url),
            ));
        }
        fields
    }
}

// ---------------------------------------------------------------- Composite apps

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CompositeAppSummary {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Artifact {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CompositeApp {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl Tabular for CompositeAppSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "VERSION"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.version.clone()]
    }
}

impl Detail for CompositeApp {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("Name", self.name.clone()), ("Version", self.version.clone())];
        for artifact in &self.artifacts {
            fields.push(("Artifact", format!("{} ({})", artifact.name, artifact.kind)));
        }
        fields
    }
}

// ---------------------------------------------------------------- Endpoints

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSummary {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoint {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub stats: String,
}

impl Tabular for EndpointSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "TYPE", "ACTIVE"];

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.kind.clone(),
            self.is_active.to_string(),
        ]
    }
}

impl Detail for Endpoint {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Type", self.kind.clone()),
            ("Method", self.method.clone()),
            ("Url", self.url.clone()),
            ("Stats", self.stats.clone()),
        ]
    }
}

// ---------------------------------------------------------------- Inbound endpoints

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct InboundEndpointSummary {
    pub name: String,
    #[serde(rename = "protocol", default)]
    pub kind: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct InboundEndpoint {
    pub name: String,
    #[serde(rename = "protocol", default)]
    pub kind: String,
    #[serde(default)]
    pub stats: String,
    #[serde(default)]
    pub tracing: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Tabular for InboundEndpointSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "TYPE"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.kind.clone()]
    }
}

impl Detail for InboundEndpoint {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.clone()),
            ("Type", self.kind.clone()),
            ("Stats", self.stats.clone()),
            ("Tracing", self.tracing.clone()),
        ];
        for param in &self.parameters {
            fields.push(("Parameter", format!("{} = {}", param.name, param.value)));
        }
        fields
    }
}

// ---------------------------------------------------------------- Proxy services

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ProxySummary {
    pub name: String,
    #[serde(rename = "wsdl1_1", default)]
    pub wsdl11: String,
    #[serde(rename = "wsdl2_0", default)]
    pub wsdl20: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Proxy {
    pub name: String,
    #[serde(rename = "wsdl1_1", default)]
    pub wsdl11: String,
    #[serde(rename = "wsdl2_0", default)]
    pub wsdl20: String,
    #[serde(default)]
    pub stats: String,
    #[serde(default)]
    pub tracing: String,
}

impl Tabular for ProxySummary {
    const HEADERS: &'static [&'static str] = &["NAME", "WSDL 1.1", "WSDL 2.0"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.wsdl11.clone(), self.wsdl20.clone()]
    }
}

impl Detail for Proxy {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("WSDL 1.1", self.wsdl11.clone()),
            ("WSDL 2.0", self.wsdl20.clone()),
            ("Stats", self.stats.clone()),
            ("Tracing", self.tracing.clone()),
        ]
    }
}

// ---------------------------------------------------------------- Sequences

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceSummary {
    pub name: String,
    #[serde(default)]
    pub container: String,
    #[serde(default)]
    pub stats: String,
    #[serde(default)]
    pub tracing: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    pub name: String,
    #[serde(default)]
    pub container: String,
    #[serde(default)]
    pub stats: String,
    #[serde(default)]
    pub tracing: String,
    #[serde(default)]
    pub mediators: Vec<String>,
}

impl Tabular for SequenceSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "STATS", "TRACING"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.stats.clone(), self.tracing.clone()]
    }
}

impl Detail for Sequence {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Container", self.container.clone()),
            ("Stats", self.stats.clone()),
            ("Tracing", self.tracing.clone()),
            ("Mediators", self.mediators.join(", ")),
        ]
    }
}

// ---------------------------------------------------------------- Tasks

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    #[serde(rename = "triggerType", default)]
    pub kind: String,
    #[serde(default)]
    pub trigger_count: String,
    #[serde(default)]
    pub trigger_interval: String,
    #[serde(alias = "triggerCron", default)]
    pub cron_expression: String,
    #[serde(default)]
    pub task_group: String,
    #[serde(default)]
    pub implementation: String,
}

impl Tabular for TaskSummary {
    const HEADERS: &'static [&'static str] = &["NAME"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl Detail for Task {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("Name", self.name.clone()), ("Trigger Type", self.kind.clone())];
        if self.cron_expression.is_empty() {
            fields.push(("Trigger Count", self.trigger_count.clone()));
            fields.push(("Trigger Interval", self.trigger_interval.clone()));
        } else {
            fields.push(("Cron Expression", self.cron_expression.clone()));
        }
        if !self.task_group.is_empty() {
            fields.push(("Group", self.task_group.clone()));
        }
        if !self.implementation.is_empty() {
            fields.push(("Implementation", self.implementation.clone()));
        }
        fields
    }
}

// ---------------------------------------------------------------- Data services

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DataServiceSummary {
    pub name: String,
    #[serde(rename = "wsdl1_1", default)]
    pub wsdl11: String,
    #[serde(rename = "wsdl2_0", default)]
    pub wsdl20: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DataServiceQuery {
    pub id: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataService {
    pub service_name: String,
    #[serde(default)]
    pub service_description: String,
    #[serde(default)]
    pub service_group_name: String,
    #[serde(rename = "wsdl1_1", default)]
    pub wsdl11: String,
    #[serde(rename = "wsdl2_0", default)]
    pub wsdl20: String,
    #[serde(default)]
    pub queries: Vec<DataServiceQuery>,
}

impl Tabular for DataServiceSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "WSDL 1.1", "WSDL 2.0"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.wsdl11.clone(), self.wsdl20.clone()]
    }
}

impl Detail for DataService {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.service_name.clone()),
            ("Group Name", self.service_group_name.clone()),
            ("Description", self.service_description.clone()),
            ("WSDL 1.1", self.wsdl11.clone()),
            ("WSDL 2.0", self.wsdl20.clone()),
        ];
        for query in &self.queries {
            fields.push(("Query", format!("{} ({})", query.id, query.namespace)));
        }
        fields
    }
}

// ---------------------------------------------------------------- Message stores

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct MessageStoreSummary {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub size: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct MessageStore {
    pub name: String,
    #[serde(default)]
    pub container: String,
    #[serde(rename = "file", default)]
    pub file_name: String,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
    #[serde(default)]
    pub size: i64,
}

impl Tabular for MessageStoreSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "TYPE", "SIZE"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.kind.clone(), self.size.to_string()]
    }
}

impl Detail for MessageStore {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.clone()),
            ("File Name", self.file_name.clone()),
            ("Container", self.container.clone()),
            ("Size", self.size.to_string()),
        ];
        fields.extend(property_fields(&self.properties));
        fields
    }
}

// ---------------------------------------------------------------- Message processors

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageProcessorSummary {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageProcessor {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub artifact_container: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub message_store: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, Value>,
}

impl Tabular for MessageProcessorSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "TYPE", "STATUS"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.kind.clone(), self.status.clone()]
    }
}

impl Detail for MessageProcessor {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.clone()),
            ("Type", self.kind.clone()),
            ("File Name", self.file_name.clone()),
            ("Message Store", self.message_store.clone()),
            ("Artifact Container", self.artifact_container.clone()),
            ("Status", self.status.clone()),
        ];
        fields.extend(property_fields(&self.parameters));
        fields
    }
}

// ---------------------------------------------------------------- Connectors

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectorSummary {
    pub name: String,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

impl Tabular for ConnectorSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "STATUS", "PACKAGE", "DESCRIPTION"];

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.status.clone(),
            self.package.clone(),
            self.description.clone(),
        ]
    }
}

// ---------------------------------------------------------------- Templates

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateSummary {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "Parameters", default)]
    pub parameters: Vec<String>,
}

impl Tabular for TemplateSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "TYPE"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.kind.clone()]
    }
}

impl Detail for Template {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Type", self.kind.clone()),
            ("Parameters", self.parameters.join(", ")),
        ]
    }
}

// ---------------------------------------------------------------- Local entries

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalEntrySummary {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
}

impl Tabular for LocalEntrySummary {
    const HEADERS: &'static [&'static str] = &["NAME", "TYPE"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.kind.clone()]
    }
}

impl Detail for LocalEntry {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Type", self.kind.clone()),
            ("Description", self.description.clone()),
            ("Value", self.value.clone()),
        ]
    }
}

// ---------------------------------------------------------------- Data sources

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DataSourceSummary {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "driverClass", default)]
    pub driver: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub configuration_parameters: BTreeMap<String, Value>,
}

impl Tabular for DataSourceSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "TYPE"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.kind.clone()]
    }
}

impl Detail for DataSource {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.clone()),
            ("Type", self.kind.clone()),
            ("Description", self.description.clone()),
            ("Driver", self.driver.clone()),
            ("URL", self.url.clone()),
            ("User Name", self.user_name.clone()),
        ];
        fields.extend(property_fields(&self.configuration_parameters));
        fields
    }
}

// ---------------------------------------------------------------- Log files

/// Entry of the `logs` listing; the server capitalises these keys
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LogFileSummary {
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "Size", default)]
    pub size: String,
}

impl Tabular for LogFileSummary {
    const HEADERS: &'static [&'static str] = &["NAME", "SIZE"];

    fn row(&self) -> Vec<String> {
        vec![self.file_name.clone(), self.size.clone()]
    }
}

// ---------------------------------------------------------------- Users

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Tabular for UserSummary {
    const HEADERS: &'static [&'static str] = &["USER ID"];

    fn row(&self) -> Vec<String> {
        vec![self.user_id.clone()]
    }
}

impl Detail for User {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.user_id.clone()),
            ("Is Admin", self.is_admin.to_string()),
            ("Roles", self.roles.join(", ")),
        ]
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleSummary {
    pub role: String,
}

impl Tabular for RoleSummary {
    const HEADERS: &'static [&'static str] = &["ROLE"];

    fn row(&self) -> Vec<String> {
        vec![self.role.clone()]
    }
}

// ---------------------------------------------------------------- Logging

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LogLevel {
    pub logger_name: String,
    #[serde(default)]
    pub component_name: String,
    #[serde(default)]
    pub level: String,
}

/// Body of a log level change request
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogLevelUpdate {
    pub logger_name: String,
    pub logging_level: String,
}

impl Detail for LogLevel {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.logger_name.clone()),
            ("Component", self.component_name.clone()),
            ("Level", self.level.clone()),
        ]
    }
}

// ---------------------------------------------------------------- Artifact state

/// Body of an activate/deactivate request
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub name: String,
    pub status: String,
}

// ---------------------------------------------------------------- Server

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSummary {
    pub product_name: String,
    pub product_version: String,
    pub carbon_home: String,
    pub java_home: String,
    pub java_vendor: String,
    pub java_version: String,
    pub os_name: String,
    pub os_version: String,
}

impl Detail for ServerSummary {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Product Name", self.product_name.clone()),
            ("Product Version", self.product_version.clone()),
            ("Carbon Home", self.carbon_home.clone()),
            ("Java Home", self.java_home.clone()),
            ("Java Vendor", self.java_vendor.clone()),
            ("Java Version", self.java_version.clone()),
            ("OS Name", self.os_name.clone()),
            ("OS Version", self.os_version.clone()),
        ]
    }
}

fn property_fields(props: &BTreeMap<String, Value>) -> Vec<(&'static str, String)> {
    props
        .iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            ("Property", format!("{key} = {text}"))
        })
        .collect()
}
