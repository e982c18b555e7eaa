use serde::Serialize;

use crate::ledger::{Ledger, Totals};

pub const CHART_LABELS: [&str; 3] = ["Income", "Expenses", "Balance"];

/// Fixed-shape payload handed to chart renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: [&'static str; 3],
    pub values: [f64; 3],
}

impl From<Totals> for ChartData {
    fn from(totals: Totals) -> Self {
        Self {
            labels: CHART_LABELS,
            values: [totals.income, totals.expenses, totals.balance],
        }
    }
}

/// Receives a fresh payload after every state change. Return values are not consumed.
pub trait ChartSink {
    fn render(&mut self, data: &ChartData);
}

/// Single read path for summary and chart views.
pub struct SummaryService;

impl SummaryService {
    pub fn snapshot(ledger: &Ledger) -> Totals {
        ledger.compute_totals()
    }

    pub fn chart_data(ledger: &Ledger) -> ChartData {
        ChartData::from(Self::snapshot(ledger))
    }
}
