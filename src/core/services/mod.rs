pub mod summary_service;

pub use summary_service::{ChartData, ChartSink, SummaryService, CHART_LABELS};
