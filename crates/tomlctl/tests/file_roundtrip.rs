//! File-layer behavior against real files in a temp directory.

use std::fs;

use tempfile::TempDir;
use tomlctl::cli::CliError;
use tomlctl::file;
use tomlctl_core::{infer, parse, set, Value};

#[test]
fn save_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "name = \"alice\"\nage = 30\n").unwrap();

    let mut tree = file::load(&path).unwrap();
    set(&mut tree, &parse("age").unwrap(), infer("31")).unwrap();
    file::save(&path, &tree).unwrap();

    let reloaded = file::load(&path).unwrap();
    let table = reloaded.as_table().unwrap();
    assert_eq!(table["name"], Value::String("alice".to_string()));
    assert_eq!(table["age"], Value::Integer(31));
}

#[test]
fn save_preserves_key_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "zeta = 1\nalpha = 2\nmiddle = 3\n").unwrap();

    let tree = file::load(&path).unwrap();
    file::save(&path, &tree).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let zeta = text.find("zeta").unwrap();
    let alpha = text.find("alpha").unwrap();
    let middle = text.find("middle").unwrap();
    assert!(zeta < alpha && alpha < middle);
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "a = 1\n").unwrap();

    let tree = file::load(&path).unwrap();
    file::save(&path, &tree).unwrap();

    let entries: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, ["config.toml"]);
}

#[test]
fn load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(file::load(&path), Err(CliError::Io(_))));
}

#[test]
fn load_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "this is = = not toml\n").unwrap();
    assert!(matches!(file::load(&path), Err(CliError::TomlDecode(_))));
}
