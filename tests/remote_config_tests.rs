use mi_cli::config::RemoteConfig;
use std::fs;
use tempfile::TempDir;

/// Files written by earlier releases of the tool must keep loading
#[test]
fn loads_existing_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mi_cli_config.yaml");
    fs::write(
        &path,
        r#"servers:
  default:
    server_address: localhost
    server_port: "9164"
    access_token: ""
  prod:
    server_address: mi.example.com
    server_port: "9443"
    access_token: abc123
current_server: prod
"#,
    )
    .unwrap();

    let cfg = RemoteConfig::open(&path).unwrap();
    assert_eq!(cfg.current, "prod");
    assert_eq!(cfg.remotes.len(), 2);
    assert_eq!(cfg.remotes["prod"].access_token, "abc123");
    assert_eq!(
        cfg.base_url().unwrap(),
        "https://mi.example.com:9443/management/"
    );
}

#[test]
fn mutations_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("mi_cli_config.yaml");

    let mut cfg = RemoteConfig::open(&path).unwrap();
    cfg.add("qa", "10.1.1.1", "9164").unwrap();
    cfg.select("qa").unwrap();
    cfg.set_token("qa", "tok");
    cfg.persist(&path).unwrap();

    let reopened = RemoteConfig::open(&path).unwrap();
    assert_eq!(reopened, cfg);

    let mut cfg = reopened;
    cfg.remove("qa").unwrap();
    cfg.persist(&path).unwrap();
    let reopened = RemoteConfig::open(&path).unwrap();
    assert_eq!(reopened.current, "default");
    assert!(!reopened.remotes.contains_key("qa"));
}
