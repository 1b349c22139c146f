//! Fixed names, defaults and REST path segments shared across the CLI.

/// Name of the remote that is always present and can never be removed.
pub const DEFAULT_REMOTE_NAME: &str = "default";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "9164";

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MI_CLI_CONFIG_PATH";
/// Directory under the user's home holding the config file.
pub const CONFIG_DIR: &str = ".wso2mi";
pub const CONFIG_FILE: &str = "mi_cli_config.yaml";

pub const HTTPS_SCHEME: &str = "https";
/// Path segment every management resource is nested under.
pub const MANAGEMENT_CONTEXT: &str = "management";

// Resource path segments relative to the management context.
pub const PREFIX_APIS: &str = "apis";
pub const PREFIX_CARBON_APPS: &str = "applications";
pub const PREFIX_ENDPOINTS: &str = "endpoints";
pub const PREFIX_INBOUND_ENDPOINTS: &str = "inbound-endpoints";
pub const PREFIX_PROXY_SERVICES: &str = "proxy-services";
pub const PREFIX_SEQUENCES: &str = "sequences";
pub const PREFIX_TASKS: &str = "tasks";
pub const PREFIX_DATA_SERVICES: &str = "data-services";
pub const PREFIX_MESSAGE_STORES: &str = "message-stores";
pub const PREFIX_MESSAGE_PROCESSORS: &str = "message-processors";
pub const PREFIX_CONNECTORS: &str = "connectors";
pub const PREFIX_TEMPLATES: &str = "templates";
pub const PREFIX_LOCAL_ENTRIES: &str = "local-entries";
pub const PREFIX_DATA_SOURCES: &str = "datasources";
pub const PREFIX_LOG_FILES: &str = "logs";
pub const PREFIX_USERS: &str = "users";
pub const PREFIX_ROLES: &str = "roles";
pub const PREFIX_SERVER_SUMMARY: &str = "server/summary";
pub const PREFIX_LOGGING: &str = "logging";
pub const PREFIX_LOGIN: &str = "login";
pub const PREFIX_LOGOUT: &str = "logout";

// Query parameter keys.
pub const PARAM_API_NAME: &str = "apiName";
pub const PARAM_CARBON_APP_NAME: &str = "carbonAppName";
pub const PARAM_ENDPOINT_NAME: &str = "endpointName";
pub const PARAM_INBOUND_ENDPOINT_NAME: &str = "inboundEndpointName";
pub const PARAM_PROXY_SERVICE_NAME: &str = "proxyServiceName";
pub const PARAM_SEQUENCE_NAME: &str = "sequenceName";
pub const PARAM_TASK_NAME: &str = "taskName";
pub const PARAM_DATA_SERVICE_NAME: &str = "dataServiceName";
pub const PARAM_NAME: &str = "name";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_LOGGER_NAME: &str = "loggerName";
pub const PARAM_LOG_FILE: &str = "file";
pub const PARAM_SEARCH_KEY: &str = "searchKey";

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

/// Levels accepted by the server's logging resource.
pub const LOG_LEVELS: &[&str] = &["OFF", "TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"];
