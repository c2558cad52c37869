use std::fs;
use std::sync::{Arc, Mutex};

use customer_landing_ingest::config::IngestionConfig;
use customer_landing_ingest::ingestion::{
    run_ingestion_with, CompositeObserver, IngestionContext, IngestionObserver, IngestionOptions,
    IngestionSeverity,
};
use customer_landing_ingest::types::{IngestionRun, IssueCounters};
use customer_landing_ingest::IngestionError;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, _ctx: &IngestionContext, run: &IngestionRun) {
        self.successes.lock().unwrap().push(run.rows);
    }

    fn on_failure(
        &self,
        _ctx: &IngestionContext,
        severity: IngestionSeverity,
        _error: &IngestionError,
    ) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(
        &self,
        _ctx: &IngestionContext,
        severity: IngestionSeverity,
        _error: &IngestionError,
    ) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options_with(
    observer: Arc<dyn IngestionObserver>,
    alert_at_or_above: IngestionSeverity,
) -> IngestionOptions {
    IngestionOptions {
        echo_summary: false,
        observer: Some(observer),
        alert_at_or_above,
        ..Default::default()
    }
}

#[test]
fn observer_receives_failure_and_alert_on_missing_source() {
    let dir = TempDir::new().unwrap();
    let config = IngestionConfig::new("test").rooted_at(dir.path());
    let obs = Arc::new(RecordingObserver::default());

    let opts = options_with(obs.clone(), IngestionSeverity::Critical);
    let _ = run_ingestion_with(&config, &opts).unwrap_err();

    assert!(obs.successes.lock().unwrap().is_empty());
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![IngestionSeverity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![IngestionSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_malformed_csv() {
    let dir = TempDir::new().unwrap();
    let config = IngestionConfig::new("test").rooted_at(dir.path());
    fs::create_dir_all(config.source_file.parent().unwrap()).unwrap();
    fs::write(&config.source_file, b"customer_id,name,age\n1,\xff,30\n").unwrap();
    let obs = Arc::new(RecordingObserver::default());

    let opts = options_with(obs.clone(), IngestionSeverity::Critical);
    let err = run_ingestion_with(&config, &opts).unwrap_err();

    assert!(matches!(err, IngestionError::Csv(_)));
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
    assert!(!config.log_file().exists());
}

#[test]
fn composite_observer_fans_out_success() {
    let dir = TempDir::new().unwrap();
    let config = IngestionConfig::new("test").rooted_at(dir.path());
    fs::create_dir_all(config.source_file.parent().unwrap()).unwrap();
    fs::copy("tests/fixtures/customers.csv", &config.source_file).unwrap();

    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn IngestionObserver>> = vec![a.clone(), b.clone()];
    let composite = Arc::new(CompositeObserver::new(observers));

    run_ingestion_with(&config, &options_with(composite, IngestionSeverity::Critical)).unwrap();

    assert_eq!(a.successes.lock().unwrap().clone(), vec![4]);
    assert_eq!(b.successes.lock().unwrap().clone(), vec![4]);
}

#[test]
fn severity_classification() {
    let not_found = IngestionError::SourceNotFound {
        path: "data/source/customers.csv".into(),
    };
    let io = IngestionError::Io(std::io::Error::other("disk full"));

    assert_eq!(IngestionSeverity::for_error(&not_found), IngestionSeverity::Critical);
    assert_eq!(IngestionSeverity::for_error(&io), IngestionSeverity::Critical);
    assert!(IngestionSeverity::Warning < IngestionSeverity::Error);
}

#[test]
fn successful_runs_classify_by_findings() {
    let mut run = IngestionRun {
        env: "dev".to_string(),
        source: "data/source/customers.csv".into(),
        target: "data/landing/customers_20240115_093000.csv".into(),
        rows: 3,
        issues: IssueCounters::default(),
        timestamp: "20240115_093000".to_string(),
    };
    assert_eq!(IngestionSeverity::for_run(&run), IngestionSeverity::Info);

    run.issues.missing_name = 1;
    assert_eq!(IngestionSeverity::for_run(&run), IngestionSeverity::Warning);
}
