//! Observability Tests
//!
//! Logging is read-only: enabling it never changes a result.

use zhuzi::config::LogConfig;
use zhuzi::frame::{Column, DataFrame};
use zhuzi::observability::{Logger, Severity};
use zhuzi::table::Table;
use zhuzi::template::{SchemaTemplate, TemplateErrorCode};
use zhuzi::value::{Value, ValueType};

zhuzi::record_type! {
    #[derive(Debug, Clone, PartialEq)]
    struct Sample {
        level: i64,
    }
}

fn enable_trace_logging() {
    // Only the first install in this process takes effect
    let _ = Logger::install(LogConfig::enabled().with_min_severity(Severity::Trace));
}

/// Every binding path logs without affecting its outcome.
#[test]
fn test_logging_does_not_change_results() {
    enable_trace_logging();
    assert!(Logger::config().allows(Severity::Trace));

    let dataset = SchemaTemplate::<Sample>::new().unwrap();
    assert!(dataset.is_empty());

    let wrong = DataFrame::from_columns(vec![Column::empty("level", ValueType::Float64)]).unwrap();
    let err = SchemaTemplate::<Sample>::with_table(wrong).unwrap_err();
    assert_eq!(err.code(), TemplateErrorCode::SchemaMismatch);
}

/// Rejected labels are logged and still reported.
#[test]
fn test_rejected_labels_logged() {
    enable_trace_logging();

    let frame = DataFrame::with_labels(vec!["a b".into()], vec![vec![Value::Int(1)]]).unwrap();
    assert!(Table::new(frame).is_err());
}
