use crate::evaluation::accumulators::{ErrorAccumulator, MaxAbsoluteError, MeanAbsoluteError};
use crate::evaluation::{Comparison, Measurement};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display as StrumDisplay, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, StrumDisplay,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TableFormat {
    Csv,
    Tsv,
    Json,
}

impl TableFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Tsv => "tsv",
            TableFormat::Json => "json",
        }
    }
}

/// Ordered rows of estimate-versus-reference comparisons.
#[derive(Debug, Clone, Default)]
pub struct ComparisonTable {
    rows: Vec<Comparison>,
}

impl ComparisonTable {
    pub fn push(&mut self, row: Comparison) {
        self.rows.push(row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn latest(&self) -> Option<Comparison> {
        self.rows.last().copied()
    }

    pub fn rows(&self) -> &[Comparison] {
        &self.rows
    }

    pub fn summary(&self) -> Vec<Measurement> {
        let mut max = MaxAbsoluteError::default();
        let mut mean = MeanAbsoluteError::default();
        for r in &self.rows {
            max.add(r.abs_error);
            mean.add(r.abs_error);
        }
        vec![
            Measurement::new("rows", self.rows.len() as f64),
            Measurement::new("max_abs_error", max.value()),
            Measurement::new("mean_abs_error", mean.value()),
        ]
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: TableFormat) -> Result<(), Error> {
        match fmt {
            TableFormat::Csv => self.export_with_delimiter(path, ','),
            TableFormat::Tsv => self.export_with_delimiter(path, '\t'),
            TableFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(
            w,
            "input{d}estimate{d}reference{d}abs_error",
            d = delimiter
        )?;
        for r in &self.rows {
            writeln!(
                w,
                "{}{d}{:.15}{d}{:.15}{d}{:e}",
                r.input,
                r.estimate,
                r.reference,
                r.abs_error,
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.rows)?;
        writeln!(w)?;
        w.flush()
    }
}

impl ComparisonTable {
    /// Column titles and a rule, aligned with `Comparison`'s `Display`.
    pub fn header() -> String {
        format!(
            "{:<12} {:<20} {:<20} {}\n{:<12} {:<20} {:<20} {}",
            "input",
            "estimate",
            "reference",
            "abs_error",
            "-----",
            "--------",
            "---------",
            "---------"
        )
    }
}

impl Display for ComparisonTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", Self::header())?;
        for r in &self.rows {
            writeln!(f, "{r}")?;
        }
        Ok(())
    }
}
