//! Horizontal bar chart fed by the tracker's chart payload.

use colored::Colorize;

use crate::cli::output::{self, preferences};
use crate::config::Config;
use crate::core::{ChartData, ChartSink};
use crate::currency::format_currency;

/// Prints a bar per label, scaled to the largest absolute value.
pub struct TerminalChart {
    width: usize,
    currency_symbol: String,
}

impl TerminalChart {
    pub fn new(width: usize, currency_symbol: impl Into<String>) -> Self {
        Self {
            width: width.max(1),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.chart_width, config.currency_symbol.clone())
    }

    pub fn lines(&self, data: &ChartData) -> Vec<String> {
        let peak = data
            .values
            .iter()
            .map(|value| value.abs())
            .fold(0.0_f64, f64::max);
        let label_width = data.labels.iter().map(|l| l.len()).max().unwrap_or(0);

        data.labels
            .iter()
            .zip(data.values)
            .map(|(label, value)| {
                let filled = if peak > 0.0 {
                    ((value.abs() / peak) * self.width as f64).round() as usize
                } else {
                    0
                };
                let marker = if value < 0.0 { '-' } else { '#' };
                format!(
                    "{:<label_width$} |{:<bar_width$}| {}",
                    label,
                    marker.to_string().repeat(filled),
                    format_currency(value, &self.currency_symbol),
                    label_width = label_width,
                    bar_width = self.width,
                )
            })
            .collect()
    }
}

impl ChartSink for TerminalChart {
    fn render(&mut self, data: &ChartData) {
        output::section("Chart");
        let plain = preferences().plain;
        for (idx, line) in self.lines(data).into_iter().enumerate() {
            if plain {
                println!("{}", line);
                continue;
            }
            let styled = match idx {
                0 => line.green(),
                1 => line.red(),
                _ => line.blue(),
            };
            println!("{}", styled);
        }
    }
}
