use super::{load_catalog, load_settings_from, Settings};

use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_dir(label: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("resource_hub_server_{label}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    dir
}

fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(Path::new("/nonexistent/server.toml"), env_of(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.server_bind, "127.0.0.1:8080");
}

#[test]
fn file_then_env_override_in_order() {
    let dir = temp_dir("layers");
    let file = dir.join("server.toml");
    fs::write(
        &file,
        "bind_addr = \"0.0.0.0:9000\"\ncatalog_path = \"/srv/catalog.json\"\n",
    )
    .expect("write");

    let from_file = load_settings_from(&file, env_of(&[]));
    assert_eq!(from_file.server_bind, "0.0.0.0:9000");
    assert_eq!(from_file.catalog_path, Some(PathBuf::from("/srv/catalog.json")));

    let overridden = load_settings_from(
        &file,
        env_of(&[
            ("SERVER_BIND", "127.0.0.1:1"),
            ("APP__BIND_ADDR", "127.0.0.1:2"),
            ("CATALOG_PATH", "  "),
        ]),
    );
    assert_eq!(overridden.server_bind, "127.0.0.1:2");
    assert_eq!(overridden.catalog_path, None);

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn malformed_file_is_ignored() {
    let dir = temp_dir("malformed");
    let file = dir.join("server.toml");
    fs::write(&file, "bind_addr = [").expect("write");

    let settings = load_settings_from(&file, env_of(&[("APP__CATALOG_PATH", "c.json")]));
    assert_eq!(settings.server_bind, Settings::default().server_bind);
    assert_eq!(settings.catalog_path, Some(PathBuf::from("c.json")));

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn catalog_defaults_to_demo_records() {
    let catalog = load_catalog(&Settings::default()).expect("catalog");
    assert_eq!(catalog.len(), 8);
}

#[test]
fn catalog_file_is_validated() {
    let dir = temp_dir("catalog");
    let valid = dir.join("valid.json");
    fs::write(
        &valid,
        r#"{"resources":[{"id":"1","title":"Statics","branch":"Civil","year":"1st Year","type":"Notes","downloadUrl":"s.pdf"}]}"#,
    )
    .expect("write");
    let duplicate = dir.join("duplicate.json");
    fs::write(
        &duplicate,
        r#"[{"id":"1","title":"A","branch":"Civil","year":"1st Year","type":"Notes","downloadUrl":"a.pdf"},
            {"id":"1","title":"B","branch":"Civil","year":"1st Year","type":"Notes","downloadUrl":"b.pdf"}]"#,
    )
    .expect("write");

    let settings = |path: &Path| Settings {
        catalog_path: Some(path.to_path_buf()),
        ..Settings::default()
    };
    assert_eq!(load_catalog(&settings(&valid)).expect("valid").len(), 1);
    let err = load_catalog(&settings(&duplicate)).expect_err("duplicate ids");
    assert!(format!("{err:#}").contains("appears more than once"));
    assert!(load_catalog(&settings(&dir.join("missing.json"))).is_err());

    fs::remove_dir_all(dir).expect("cleanup");
}
