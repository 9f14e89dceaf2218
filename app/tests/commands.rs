//! Command strategies run against scratch repository roots.

use std::path::Path;

use app::command::{
    CommandStrategy, EnrichInput, EnrichStrategy, GrepInput, GrepStrategy, InfoStrategy,
    InitStrategy, OpsReportInput, OpsReportStrategy, Workspace,
};
use catalog_config::{CONFIG_FILE_NAME, Config};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

#[test]
fn enrich_missing_catalog_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::with_defaults(dir.path());

    let status = EnrichStrategy
        .execute(EnrichInput {
            workspace,
            dry_run: false,
            report: None,
        })
        .unwrap();

    assert_eq!(status, 1);
    assert!(!dir.path().join("docs/catalog-enrich-report.md").exists());
}

#[test]
fn enrich_writes_report_to_relative_override() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "lib/server-logo.ts", "  github: \"github\",\n");
    write(
        dir.path(),
        "content/catalog/entries/sentry.json",
        r#"{"slug": "sentry", "name": "Sentry", "repoUrl": "https://github.com/getsentry/sentry-mcp", "tags": ["Monitoring"]}"#,
    );

    let status = EnrichStrategy
        .execute(EnrichInput {
            workspace: Workspace::with_defaults(dir.path()),
            dry_run: true,
            report: Some("out/enrich.md".into()),
        })
        .unwrap();

    assert_eq!(status, 0);
    let report = std::fs::read_to_string(dir.path().join("out/enrich.md")).unwrap();
    assert!(report.contains("- **sentry.json** (`Sentry`): `sentry`"));
    assert!(report.contains("Add missing aliases into `lib/server-logo.ts`"));

    let entry =
        std::fs::read_to_string(dir.path().join("content/catalog/entries/sentry.json")).unwrap();
    assert!(entry.contains("\"Monitoring\""));
}

#[test]
fn enrich_follows_configured_paths() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        CONFIG_FILE_NAME,
        r#"{ "paths": { "catalog_dir": "data/servers", "enrich_report": "reports/enrich.md" } }"#,
    );
    write(
        dir.path(),
        "data/servers/slack.json",
        r#"{"slug": "slack", "tags": ["Chat", "chat"]}"#,
    );

    let workspace = Workspace::load(Some(dir.path()), None).unwrap();
    let status = EnrichStrategy
        .execute(EnrichInput {
            workspace,
            dry_run: false,
            report: None,
        })
        .unwrap();

    assert_eq!(status, 0);
    assert!(dir.path().join("reports/enrich.md").exists());
    let entry = std::fs::read_to_string(dir.path().join("data/servers/slack.json")).unwrap();
    assert_eq!(entry, "{\n  \"slug\": \"slack\",\n  \"tags\": [\n    \"chat\"\n  ]\n}\n");
}

#[test]
fn grep_and_ops_report_succeed() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "components/card.tsx", "<div className=\"bg-white\" />");

    let status = GrepStrategy
        .execute(GrepInput {
            workspace: Workspace::with_defaults(dir.path()),
            pattern: None,
            glob: Some("*.tsx".to_string()),
        })
        .unwrap();
    assert_eq!(status, 0);

    let status = OpsReportStrategy
        .execute(OpsReportInput {
            workspace: Workspace::with_defaults(dir.path()),
            output: None,
        })
        .unwrap();
    assert_eq!(status, 0);
    let report = std::fs::read_to_string(dir.path().join("docs/ops-report.md")).unwrap();
    assert!(report.contains(&format!("- Repo root: `{}`", dir.path().display())));
}

#[test]
fn grep_rejects_invalid_glob() {
    let dir = tempfile::tempdir().unwrap();
    let result = GrepStrategy.execute(GrepInput {
        workspace: Workspace::with_defaults(dir.path()),
        pattern: Some("bg-white".to_string()),
        glob: Some("[".to_string()),
    });
    assert!(result.is_err());
}

#[test]
fn init_creates_config_once() {
    let dir = tempfile::tempdir().unwrap();

    let status = InitStrategy
        .execute(Workspace::with_defaults(dir.path()))
        .unwrap();
    assert_eq!(status, 0);

    let workspace = Workspace::load(Some(dir.path()), None).unwrap();
    assert_eq!(workspace.config, Config::default());
    assert_eq!(InfoStrategy.execute(workspace.clone()).unwrap(), 0);

    assert!(InitStrategy.execute(workspace).is_err());
}
