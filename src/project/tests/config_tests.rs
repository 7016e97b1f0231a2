//! Tests for project configuration sources.

use crate::project::{
    adapters::{CONFIG_FILE_NAME, StaticConfigSource, TomlConfigFile},
    domain::{ProjectConfig, ProjectRoot},
    ports::{ConfigError, ProjectConfigSource},
};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct Workspace {
    _dir: TempDir,
    root: ProjectRoot,
}

impl Workspace {
    fn write_config(&self, contents: &str) {
        std::fs::write(self.root.as_path().join(CONFIG_FILE_NAME), contents)
            .expect("write config");
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("utf-8 temp path");
    let root = ProjectRoot::new(path).expect("valid root");
    Workspace { _dir: dir, root }
}

#[rstest]
fn defaults_scan_agents_and_auto_discover() {
    let config = ProjectConfig::default();
    assert_eq!(config.search_paths, [Utf8PathBuf::from("agents")]);
    assert!(config.auto_discover);
    assert!(!config.watch);
}

#[rstest]
fn missing_file_yields_defaults(workspace: Workspace) {
    let config = TomlConfigFile::new()
        .load(&workspace.root)
        .expect("defaults load");
    assert_eq!(config, ProjectConfig::default());
}

#[rstest]
fn file_settings_override_defaults(workspace: Workspace) {
    workspace.write_config(
        "[agents]\nsearch_paths = [\"bots\", \"more/bots\"]\nauto_discover = false\n",
    );

    let config = TomlConfigFile::new()
        .load(&workspace.root)
        .expect("config loads");

    assert_eq!(
        config.search_paths,
        [Utf8PathBuf::from("bots"), Utf8PathBuf::from("more/bots")]
    );
    assert!(!config.auto_discover);
    assert!(!config.watch);
}

#[rstest]
fn unrelated_tables_are_ignored(workspace: Workspace) {
    workspace.write_config("[server]\nport = 8080\n");

    let config = TomlConfigFile::new()
        .load(&workspace.root)
        .expect("config loads");

    assert_eq!(config, ProjectConfig::default());
}

#[rstest]
#[case("[agents\n")]
#[case("[agents]\nsearch_paths = 3\n")]
#[case("[agents]\nunknown = true\n")]
fn malformed_file_is_a_parse_error(workspace: Workspace, #[case] contents: &str) {
    workspace.write_config(contents);

    let result = TomlConfigFile::new().load(&workspace.root);

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[rstest]
fn missing_project_root_yields_defaults(workspace: Workspace) {
    let root = ProjectRoot::new(workspace.root.as_path().join("absent")).expect("valid root");

    let config = TomlConfigFile::new().load(&root).expect("defaults load");

    assert_eq!(config, ProjectConfig::default());
}

#[rstest]
fn unreadable_config_entry_is_a_read_error(workspace: Workspace) {
    std::fs::create_dir(workspace.root.as_path().join(CONFIG_FILE_NAME))
        .expect("create directory in place of the config file");

    let result = TomlConfigFile::new().load(&workspace.root);

    let Err(ConfigError::Read { path, .. }) = result else {
        panic!("expected a read error, got {result:?}");
    };
    assert_eq!(path, workspace.root.as_path().join(CONFIG_FILE_NAME));
}

#[rstest]
fn static_source_returns_its_config(workspace: Workspace) {
    let config = ProjectConfig::default()
        .with_search_paths(["custom"])
        .with_auto_discover(false);

    let loaded = StaticConfigSource::new(config.clone())
        .load(&workspace.root)
        .expect("static config");

    assert_eq!(loaded, config);
}
