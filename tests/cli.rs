//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::Command;

const SITE_MAP: &str = r"
web:
  id: e0a4b1c8-12f7-4d6a-8c3b-5d9e72f1a0b6
  site_id: 9b7e3a51-06cd-4e82-a1f4-c2d85b09e637
  url: /sites/contoso
lists:
  - id: 7c2d5f90-63b1-4a8e-9d2e-0f41c6a8b7d3
    title: Pages
    folder: Pages
    subfolders:
      - Archive
  - id: 3e8f1a26-94d0-47b5-8c6e-1b2a7d40f985
    title: Colors
    folder: Lists/Colors
";

const PAGE_REFERENCE: &str = r#"<Field Group="Navigation Columns" Type="LookupMulti" Name="PageReference" DisplayName="Page Reference" StaticName="PageReference" List="/sites/contoso/Pages" SourceID="1f96e2b4-8a07-4f31-b6c5-d3e8a9107f42" ShowField="Title" Mult="TRUE" />"#;

const COLORS: &str = r#"<Field Type="Lookup" Name="Colors" List="Lists/Colors" ShowField="Title" />"#;

const TITLE: &str = r#"<Field Type="Text" Name="Title" List="Pages" />"#;

const PAGES_LIST_ID: &str = "7c2d5f90-63b1-4a8e-9d2e-0f41c6a8b7d3";
const COLORS_LIST_ID: &str = "3e8f1a26-94d0-47b5-8c6e-1b2a7d40f985";
const WEB_ID: &str = "e0a4b1c8-12f7-4d6a-8c3b-5d9e72f1a0b6";

fn setup(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lookfix_cli_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    let fields = dir.join("fields");
    std::fs::create_dir_all(&fields).expect("failed to create fixture dir");
    std::fs::write(dir.join("site.yaml"), SITE_MAP).expect("failed to write site map");
    std::fs::write(fields.join("PageReference.xml"), PAGE_REFERENCE).expect("failed to write field");
    std::fs::write(fields.join("Colors.xml"), COLORS).expect("failed to write field");
    std::fs::write(fields.join("Title.xml"), TITLE).expect("failed to write field");
    dir
}

fn run_lookfix(dir: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_lookfix");
    Command::new(bin)
        .current_dir(dir)
        .env_remove("LOOKFIX_STORE")
        .args(args)
        .output()
        .expect("failed to run lookfix binary")
}

fn read_field(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join("fields").join(format!("{name}.xml")))
        .expect("failed to read field file")
}

#[test]
fn localize_rewrites_list_and_source_id() {
    let dir = setup("localize_rewrites");

    let output = run_lookfix(&dir, &["localize", "PageReference", "Colors"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("[localized] PageReference"));
    assert!(stdout.contains("[localized] Colors"));
    assert!(stdout.contains("2 of 2 field(s) rewritten"));

    let page_reference = read_field(&dir, "PageReference");
    assert!(page_reference.contains(&format!(r#"List="{PAGES_LIST_ID}""#)));
    assert!(page_reference.contains(&format!(r#"SourceID="{WEB_ID}""#)));
    assert!(page_reference.contains(r#"Group="Navigation Columns""#));

    let colors = read_field(&dir, "Colors");
    assert!(colors.contains(&format!(r#"List="{COLORS_LIST_ID}""#)));
    assert!(!colors.contains("SourceID"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn localize_is_idempotent_across_runs() {
    let dir = setup("localize_idempotent");

    let first = run_lookfix(&dir, &["localize", "PageReference"]);
    assert!(first.status.success());
    let after_first = read_field(&dir, "PageReference");

    let second = run_lookfix(&dir, &["localize", "PageReference"]);
    let stdout = String::from_utf8_lossy(&second.stdout);

    assert!(second.status.success());
    assert!(stdout.contains("[unchanged] PageReference"));
    assert_eq!(read_field(&dir, "PageReference"), after_first);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn localize_dry_run_writes_nothing() {
    let dir = setup("localize_dry_run");

    let output = run_lookfix(&dir, &["localize", "PageReference", "--dry-run"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[localized] PageReference"));
    assert!(stdout.contains("would be rewritten"));
    assert_eq!(read_field(&dir, "PageReference"), PAGE_REFERENCE);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn localize_reports_missing_field_and_continues() {
    let dir = setup("localize_missing");

    let output = run_lookfix(&dir, &["localize", "Nonexistent", "Colors"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[missing]   Nonexistent"));
    assert!(stdout.contains("[localized] Colors"));
    assert!(stdout.contains("1 missing"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn localize_rejects_non_lookup_field() {
    let dir = setup("localize_non_lookup");

    let output = run_lookfix(&dir, &["localize", "Title"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("expected Lookup or LookupMulti"), "stderr: {stderr}");
    assert_eq!(read_field(&dir, "Title"), TITLE);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn localize_fails_on_malformed_schema() {
    let dir = setup("localize_malformed");
    std::fs::write(dir.join("fields").join("Broken.xml"), "<Field Type=").unwrap();

    let output = run_lookfix(&dir, &["localize", "Broken"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("malformed"), "stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn check_reports_all_stored_fields_without_writing() {
    let dir = setup("check_all");
    std::fs::remove_file(dir.join("fields").join("Title.xml")).unwrap();

    let output = run_lookfix(&dir, &["check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[localized] Colors"));
    assert!(stdout.contains("[localized] PageReference"));
    assert!(stdout.contains("2 of 2 field(s) would be rewritten"));
    assert_eq!(read_field(&dir, "PageReference"), PAGE_REFERENCE);
    assert_eq!(read_field(&dir, "Colors"), COLORS);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn check_emits_json_report() {
    let dir = setup("check_json");

    let output = run_lookfix(&dir, &["check", "PageReference", "Nonexistent", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("check --json should emit valid JSON");

    assert_eq!(report["web_id"], WEB_ID);
    assert_eq!(report["fields"][0]["field"], "PageReference");
    assert_eq!(report["fields"][0]["status"], "localized");
    assert_eq!(report["fields"][1]["field"], "Nonexistent");
    assert_eq!(report["fields"][1]["status"], "missing");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn check_on_localized_store_reports_unchanged() {
    let dir = setup("check_after_localize");

    assert!(run_lookfix(&dir, &["localize", "PageReference", "Colors"]).status.success());
    let output = run_lookfix(&dir, &["check", "PageReference", "Colors"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[unchanged] PageReference"));
    assert!(stdout.contains("[unchanged] Colors"));
    assert!(stdout.contains("0 of 2 field(s) would be rewritten"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn resolve_prints_owning_list() {
    let dir = setup("resolve_owned");

    let output = run_lookfix(&dir, &["resolve", "Pages/Archive"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains(&format!("List: Pages ({PAGES_LIST_ID})")));
    assert!(stdout.contains(&format!("Web: /sites/contoso ({WEB_ID})")));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn resolve_reports_unowned_path() {
    let dir = setup("resolve_unowned");

    let output = run_lookfix(&dir, &["resolve", "Shared Documents"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("No list owns folder 'Shared Documents'."));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn resolve_without_site_map_fails() {
    let dir = setup("resolve_no_map");
    std::fs::remove_file(dir.join("site.yaml")).unwrap();

    let output = run_lookfix(&dir, &["resolve", "Pages"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("site map"), "stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn show_lists_stored_fields() {
    let dir = setup("show_list");

    let output = run_lookfix(&dir, &["show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Colors"));
    assert!(stdout.contains("PageReference"));
    assert!(stdout.contains("Title"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn show_prints_field_attributes() {
    let dir = setup("show_field");

    let output = run_lookfix(&dir, &["show", "PageReference"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Field: PageReference"));
    assert!(stdout.contains("Type = LookupMulti"));
    assert!(stdout.contains("List = /sites/contoso/Pages"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn store_env_var_selects_field_directory() {
    let dir = setup("store_env");
    let elsewhere = dir.join("elsewhere");
    std::fs::create_dir_all(&elsewhere).unwrap();

    let bin = env!("CARGO_BIN_EXE_lookfix");
    let output = Command::new(bin)
        .current_dir(&elsewhere)
        .env("LOOKFIX_STORE", dir.join("fields"))
        .args(["show"])
        .output()
        .expect("failed to run lookfix binary");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("PageReference"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = setup("invalid_subcommand");

    let output = run_lookfix(&dir, &["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));

    let _ = std::fs::remove_dir_all(&dir);
}
