use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::error::ErrorKind;

use super::*;

static TEST_SNAPSHOT_COUNTER: AtomicU64 = AtomicU64::new(0);

fn test_snapshot_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let counter = TEST_SNAPSHOT_COUNTER.fetch_add(1, Ordering::SeqCst);
    path.push(format!(
        "rpmrank-cli-tests-{}-{}-{}.json",
        std::process::id(),
        nanos,
        counter
    ));
    path
}

#[test]
fn rank_uses_default_limit_and_threshold() {
    let cli = Cli::try_parse_from(["rpmrank", "rank"]).expect("must parse");
    match cli.command {
        Commands::Rank {
            catalog,
            limit,
            size_threshold,
            format,
        } => {
            assert_eq!(catalog.root, PathBuf::from("/"));
            assert!(catalog.snapshot.is_none());
            assert_eq!(limit, 125);
            assert_eq!(size_threshold, 5 * 1024 * 1024);
            assert_eq!(format, OutputFormat::Plain);
        }
        other => panic!("expected rank command, got {other:?}"),
    }
}

#[test]
fn rank_accepts_snapshot_and_overrides() {
    let cli = Cli::try_parse_from([
        "rpmrank",
        "rank",
        "--snapshot",
        "installed.json",
        "--limit",
        "10",
        "--size-threshold",
        "0",
        "--format",
        "json",
    ])
    .expect("must parse");
    match cli.command {
        Commands::Rank {
            catalog,
            limit,
            size_threshold,
            format,
        } => {
            assert_eq!(catalog.snapshot, Some(PathBuf::from("installed.json")));
            assert_eq!(limit, 10);
            assert_eq!(size_threshold, 0);
            assert_eq!(format, OutputFormat::Json);
        }
        other => panic!("expected rank command, got {other:?}"),
    }
}

#[test]
fn unknown_format_is_a_parse_error() {
    let err = Cli::try_parse_from(["rpmrank", "rank", "--format", "yaml"])
        .expect_err("unknown format must fail");
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn format_plain_emits_tab_separated_rows() {
    let ranked = vec![
        RankedPackage {
            name: "glibc".to_string(),
            score: 42,
            size: 18_224_437,
        },
        RankedPackage {
            name: "bash".to_string(),
            score: 7,
            size: 7_337_362,
        },
    ];
    assert_eq!(
        format_plain(&ranked),
        vec!["glibc\t42\t18224437", "bash\t7\t7337362"]
    );
}

#[test]
fn format_json_preserves_ranking_order() {
    let ranked = vec![
        RankedPackage {
            name: "glibc".to_string(),
            score: 42,
            size: 100,
        },
        RankedPackage {
            name: "bash".to_string(),
            score: 7,
            size: 50,
        },
    ];
    let rendered = format_json(&ranked).expect("must render");
    let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("must parse back");
    assert_eq!(parsed[0]["name"], "glibc");
    assert_eq!(parsed[0]["score"], 42);
    assert_eq!(parsed[1]["name"], "bash");
    assert_eq!(parsed[1]["size"], 50);
}

#[test]
fn load_records_prefers_snapshot_over_rpmdb() {
    let path = test_snapshot_path();
    fs::write(
        &path,
        r#"[{"name": "bash", "size": 7337362, "requires": ["libc.so.6"]}]"#,
    )
    .expect("must write snapshot");

    let args = CatalogArgs {
        root: PathBuf::from("/nonexistent-root"),
        snapshot: Some(path.clone()),
    };
    let records = load_records(&args).expect("snapshot must load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "bash");

    let _ = fs::remove_file(&path);
}

#[test]
fn equal_scores_rank_by_ascending_name() {
    let records = vec![
        PackageRecord {
            name: "app".to_string(),
            size: 10_000_000,
            requires: vec!["libshared".to_string()],
            provides: Vec::new(),
        },
        PackageRecord {
            name: "shared".to_string(),
            size: 10_000_000,
            requires: Vec::new(),
            provides: vec!["libshared".to_string()],
        },
        PackageRecord {
            name: "tool".to_string(),
            size: 10_000_000,
            requires: vec!["libshared".to_string()],
            provides: Vec::new(),
        },
    ];
    let index = ProviderIndex::build(&records);
    let ranked = most_popular_packages(
        &records,
        |requirement| Ok(index.providers_of(requirement)),
        125,
        5 * 1024 * 1024,
    )
    .expect("must rank");
    let names: Vec<&str> = ranked.iter().map(|pkg| pkg.name.as_str()).collect();
    assert_eq!(names, vec!["shared", "app", "tool"]);
}
