use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("pharm_review_main_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const RECORD: &str = r#"{
    "info": {
        "pharmacist_name": "Doe, Jane",
        "assessor_name": "Sam Lee",
        "assessment_date": "2024-05-01"
    },
    "ratings": {"ppcp_1": 4, "ppcp_2": 5, "dtm_1": 3},
    "narratives": {"summary": "Solid", "follow_up": "twelve_months", "attestation": ATTESTED}
}"#;

fn run_args(dir: &Path, attested: bool, document_format: &str) -> RunArgs {
    let input = dir.join("record.json");
    std::fs::write(&input, RECORD.replace("ATTESTED", &attested.to_string())).unwrap();
    RunArgs {
        input,
        out: dir.join("out"),
        catalog: None,
        table_format: TableFormat::Csv,
        document_format: document_format.to_string(),
    }
}

#[test]
fn test_parse_run_defaults() {
    let cli = Cli::try_parse_from([
        "pharm-review",
        "run",
        "--input",
        "a.json",
        "--out",
        "out",
    ])
    .unwrap();
    assert!(!cli.verbose);
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.input, PathBuf::from("a.json"));
    assert_eq!(args.table_format, TableFormat::Csv);
    assert_eq!(args.document_format, "html");
    assert!(args.catalog.is_none());
}

#[test]
fn test_parse_run_options() {
    let cli = Cli::try_parse_from([
        "pharm-review",
        "run",
        "--input",
        "a.json",
        "--out",
        "out",
        "--table-format",
        "json",
        "--document-format",
        "text",
        "--catalog",
        "rubric.json",
        "-v",
    ])
    .unwrap();
    assert!(cli.verbose);
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.table_format, TableFormat::Json);
    assert_eq!(args.document_format, "text");
    assert_eq!(args.catalog, Some(PathBuf::from("rubric.json")));
}

#[test]
fn test_parse_rejects_missing_input_and_bad_format() {
    assert!(Cli::try_parse_from(["pharm-review", "run", "--out", "o"]).is_err());
    assert!(
        Cli::try_parse_from([
            "pharm-review",
            "run",
            "--input",
            "a",
            "--out",
            "o",
            "--table-format",
            "xlsx",
        ])
        .is_err()
    );
}

#[test]
fn test_parse_catalog_command() {
    let cli = Cli::try_parse_from(["pharm-review", "--verbose", "catalog"]).unwrap();
    assert!(cli.verbose);
    assert!(matches!(cli.command, Command::Catalog { catalog: None }));
}

#[test]
fn test_default_log_level() {
    assert_eq!(logging::default_directive(false), "info");
    assert_eq!(logging::default_directive(true), "debug");
}

#[test]
fn test_run_export_writes_both_artifacts() {
    let dir = make_temp_dir();
    let args = run_args(&dir, true, "html");
    let outcome = run_export(&args, &BackendRegistry::builtin()).unwrap();
    let stem = "PharmAssessment_Doe_Jane_2024-05-01";
    assert_eq!(outcome.table, dir.join("out").join(format!("{stem}.csv")));
    assert_eq!(
        outcome.document,
        Some(dir.join("out").join(format!("{stem}.html")))
    );
    let csv = std::fs::read_to_string(&outcome.table).unwrap();
    assert!(csv.lines().next().unwrap().starts_with("Pharmacist Name,"));
    // (4 + 5 + 3) / 3
    assert!(csv.contains(",4.00,"));
}

#[test]
fn test_run_export_keeps_table_when_backend_missing() {
    let dir = make_temp_dir();
    let args = run_args(&dir, true, "pdf");
    let outcome = run_export(&args, &BackendRegistry::builtin()).unwrap();
    assert!(outcome.table.exists());
    assert!(outcome.document.is_none());
}

#[test]
fn test_run_export_skips_report_until_attested() {
    let dir = make_temp_dir();
    let args = run_args(&dir, false, "text");
    let outcome = run_export(&args, &BackendRegistry::builtin()).unwrap();
    assert!(outcome.table.exists());
    assert!(outcome.document.is_none());
}

#[test]
fn test_run_export_fails_on_bad_catalog() {
    let dir = make_temp_dir();
    let mut args = run_args(&dir, true, "html");
    let catalog = dir.join("catalog.json");
    std::fs::write(&catalog, r#"{"version": "x", "domains": []}"#).unwrap();
    args.catalog = Some(catalog);
    let err = run_export(&args, &BackendRegistry::builtin()).unwrap_err();
    assert!(err.contains("no domains"));
    assert!(!dir.join("out").exists());
}
