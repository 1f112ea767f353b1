//! Assignment summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::pipeline::NOT_ASSIGNED;

/// Share of the dataset received by one label (or left unassigned)
#[derive(Debug, Clone, Serialize)]
pub struct LabelShare {
    pub label: String,
    pub records: usize,
    pub values_sum: f64,
}

/// Summary of a solved assignment
#[derive(Debug, Serialize)]
pub struct AssignmentSummary {
    pub status: String,
    pub total_records: usize,
    pub total_values: f64,
    pub shares: Vec<LabelShare>,
    pub unassigned: LabelShare,
}

impl AssignmentSummary {
    /// Tally decoded labels against record weights.
    ///
    /// `labels` and `values` are parallel, in row order; anything that is
    /// not a known label name counts as unassigned.
    pub fn from_assignments(
        labels: &[String],
        values: &[f64],
        n_labels: usize,
        labels_name: &str,
        status: &str,
    ) -> Self {
        let mut shares: Vec<LabelShare> = (0..n_labels)
            .map(|j| LabelShare {
                label: format!("{}_{}", labels_name, j),
                records: 0,
                values_sum: 0.0,
            })
            .collect();
        let mut unassigned = LabelShare {
            label: NOT_ASSIGNED.to_string(),
            records: 0,
            values_sum: 0.0,
        };

        for (label, &value) in labels.iter().zip(values) {
            match shares.iter_mut().find(|share| &share.label == label) {
                Some(share) => {
                    share.records += 1;
                    share.values_sum += value;
                }
                None => {
                    unassigned.records += 1;
                    unassigned.values_sum += value;
                }
            }
        }

        Self {
            status: status.to_string(),
            total_records: labels.len(),
            total_values: values.iter().sum(),
            shares,
            unassigned,
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("ASSIGNMENT SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Label").add_attribute(Attribute::Bold),
            Cell::new("Records").add_attribute(Attribute::Bold),
            Cell::new("Value sum").add_attribute(Attribute::Bold),
            Cell::new("Value share").add_attribute(Attribute::Bold),
        ]);

        for share in &self.shares {
            table.add_row(vec![
                Cell::new(&share.label),
                Cell::new(share.records),
                Cell::new(format!("{:.2}", share.values_sum)),
                Cell::new(format!("{:.1}%", self.value_share_pct(share))).fg(Color::Green),
            ]);
        }

        table.add_row(vec![
            Cell::new(&self.unassigned.label).fg(if self.unassigned.records == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
            Cell::new(self.unassigned.records),
            Cell::new(format!("{:.2}", self.unassigned.values_sum)),
            Cell::new(format!("{:.1}%", self.value_share_pct(&self.unassigned))),
        ]);

        println!("{table}");
        println!(
            "    {} records, total value {:.2}, status: {}",
            self.total_records,
            self.total_values,
            style(&self.status).cyan()
        );
    }

    fn value_share_pct(&self, share: &LabelShare) -> f64 {
        if self.total_values == 0.0 {
            0.0
        } else {
            share.values_sum / self.total_values * 100.0
        }
    }
}
