//! End-to-end tests for the `cardsmith` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `cardsmith` command isolated from the user's config and data dirs.
fn cardsmith(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cardsmith").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("CARDSMITH__STORAGE__DATA_DIR", home.path().join("library"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Run a command and return its trimmed stdout.
fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap().trim().to_string()
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    cardsmith(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("inject"))
        .stdout(predicate::str::contains("snippet"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    cardsmith(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_fills_placeholders() {
    let home = TempDir::new().unwrap();
    cardsmith(&home)
        .args(["generate", "-n", "Fireball", "-r", "Rare", "-m", "My Mod!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("class Fireball : CustomCard"))
        .stdout(predicate::str::contains("CardInfo.Rarity.Rare"))
        .stdout(predicate::str::contains("namespace MyMod.Cards"))
        .stdout(predicate::str::contains("{{").not());
}

#[test]
fn generate_mods_plus_to_file() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("cards/Fireball.cs");
    cardsmith(&home)
        .args(["generate", "-s", "mods-plus", "-n", "Fireball", "-o"])
        .arg(&out)
        .assert()
        .success();
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("public class Fireball : SimpleCard"));
}

#[test]
fn generate_with_template_file_uses_it() {
    let home = TempDir::new().unwrap();
    let template = home.path().join("tpl.cs");
    fs::write(&template, "// {{NAME}} for {{MODNAME}}\n").unwrap();
    cardsmith(&home)
        .args(["generate", "-n", "Bolt", "-t"])
        .arg(&template)
        .assert()
        .success()
        .stdout("// Bolt for MyMod\n");
}

#[test]
fn inject_in_place_is_idempotent() {
    let home = TempDir::new().unwrap();
    let card = home.path().join("Fireball.cs");
    cardsmith(&home)
        .args(["generate", "-n", "Fireball", "-o"])
        .arg(&card)
        .assert()
        .success();

    let inject = |home: &TempDir| {
        cardsmith(home)
            .arg("inject")
            .arg(&card)
            .args(["-s", "damage=2", "-s", "ammo=3", "--in-place"])
            .assert()
            .success();
        fs::read_to_string(&card).unwrap()
    };

    let first = inject(&home);
    assert!(first.contains("gun.damage = 2f;"));
    assert!(first.contains("gun.ammo = 3;"));
    assert_eq!(first.matches("// [Stats Applied Start]").count(), 1);

    let second = inject(&home);
    assert_eq!(first, second);
}

#[test]
fn inject_reads_stdin_and_writes_stdout() {
    let home = TempDir::new().unwrap();
    let source = "class A : CustomCard\n{\n    public override void SetupCard()\n    {\n    }\n}\n";
    cardsmith(&home)
        .args(["inject", "-", "-s", "ammo=4"])
        .write_stdin(source)
        .assert()
        .success()
        .stdout(predicate::str::contains("gun.ammo = 4;"));
}

#[test]
fn stats_json_reports_kinds() {
    let home = TempDir::new().unwrap();
    let card = home.path().join("card.cs");
    fs::write(&card, "gun.damage = 1.5f;\ngun.ammo = 2;\n").unwrap();

    let text = stdout_of(cardsmith(&home).arg("stats").arg(&card).args(["--format", "json"]));
    let stats: serde_json::Value = serde_json::from_str(&text).unwrap();
    let stats = stats.as_array().unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0]["label"], "Damage");
    assert_eq!(stats[0]["value"], 1.5);
    assert_eq!(stats[0]["is_multiplicative"], true);
    assert_eq!(stats[1]["is_multiplicative"], false);
}

#[test]
fn list_csv_has_header_and_rows() {
    let home = TempDir::new().unwrap();
    cardsmith(&home)
        .args(["list", "--format", "csv", "-g", "gun"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("group,key,label,kind,path\n"))
        .stdout(predicate::str::contains("damage,Damage"));
}

#[test]
fn project_and_card_lifecycle() {
    let home = TempDir::new().unwrap();

    let id = stdout_of(cardsmith(&home).args(["-q", "project", "new", "Test Mod"]));
    assert!(!id.is_empty());

    cardsmith(&home)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Mod"));

    for _ in 0..2 {
        cardsmith(&home)
            .args(["card", "add", &id])
            .assert()
            .success();
    }
    cardsmith(&home)
        .args(["card", "set", &id, "1", "name", "Frost"])
        .assert()
        .success();
    cardsmith(&home)
        .args(["card", "apply", &id, "1", "-s", "damage=2"])
        .assert()
        .success();

    cardsmith(&home)
        .args(["card", "show", &id, "1", "--code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gun.damage = 2f;"));

    let shown = stdout_of(cardsmith(&home).args(["--output-format", "json", "project", "show", &id]));
    let project: serde_json::Value = serde_json::from_str(&shown).unwrap();
    let cards = project["data"]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1]["name"], "Frost");

    cardsmith(&home)
        .args(["card", "remove", &id, "0"])
        .assert()
        .success();
    cardsmith(&home)
        .args(["project", "remove", &id, "--yes"])
        .assert()
        .success();
    cardsmith(&home)
        .args(["project", "show", &id])
        .assert()
        .code(3);
}

#[test]
fn snippet_folders_and_moves() {
    let home = TempDir::new().unwrap();
    let code = home.path().join("snippet.cs");
    fs::write(&code, "gun.ammo = 1;").unwrap();

    let folder = stdout_of(cardsmith(&home).args(["-q", "snippet", "folder-new", "Guns"]));
    let snippet = stdout_of(
        cardsmith(&home)
            .args(["-q", "snippet", "save", "Ammo", "--folder", &folder, "-f"])
            .arg(&code),
    );

    cardsmith(&home)
        .args(["snippet", "show", &snippet])
        .assert()
        .success()
        .stdout("gun.ammo = 1;\n");

    cardsmith(&home)
        .args(["snippet", "folder-remove", &folder])
        .assert()
        .success();

    let listed = stdout_of(cardsmith(&home).args(["--output-format", "json", "snippet", "list"]));
    let listing: serde_json::Value = serde_json::from_str(&listed).unwrap();
    assert!(listing["folders"].as_array().unwrap().is_empty());
    assert_eq!(listing["snippets"][0]["name"], "Ammo");
    assert!(listing["snippets"][0]["folderId"].is_null());

    // Snippets are scoped per strategy.
    cardsmith(&home)
        .args(["snippet", "show", &snippet, "-s", "mods-plus"])
        .assert()
        .code(3);
}

#[test]
fn backup_round_trip() {
    let home = TempDir::new().unwrap();
    cardsmith(&home)
        .args(["project", "new", "Keep Me"])
        .assert()
        .success();

    let backup = home.path().join("backup.json");
    cardsmith(&home)
        .args(["backup", "export", "-o"])
        .arg(&backup)
        .assert()
        .success();

    let other = TempDir::new().unwrap();
    cardsmith(&other)
        .args(["backup", "import", "-y"])
        .arg(&backup)
        .assert()
        .success();
    cardsmith(&other)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep Me"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    cardsmith(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cardsmith"));
}

#[test]
fn init_writes_explicit_config_path() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("cardsmith.toml");

    cardsmith(&home)
        .arg("-c")
        .arg(&path)
        .arg("init")
        .assert()
        .success();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[defaults]"));

    cardsmith(&home)
        .arg("-c")
        .arg(&path)
        .args(["config", "get", "defaults.strategy"])
        .assert()
        .success()
        .stdout("vanilla\n");
}

#[test]
fn env_overrides_default_strategy() {
    let home = TempDir::new().unwrap();
    cardsmith(&home)
        .env("CARDSMITH__DEFAULTS__STRATEGY", "mods-plus")
        .args(["generate", "-n", "Bolt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SimpleCard"));
}
