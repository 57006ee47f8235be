//! Page views
//!
//! Each page is a view-model with every display string already formatted, plus a plain-text
//! rendering for terminals.

use std::io;

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::pricing::TotalPriceError;

pub mod cart;
pub mod confirmation;
pub mod history;
pub mod listing;

/// Errors that can occur while building or writing a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Error totalling the prices shown on the page.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error")]
    IO,
}

fn write_line(out: &mut impl io::Write, line: impl AsRef<str>) -> Result<(), ViewError> {
    writeln!(out, "{}", line.as_ref()).map_err(|_err| ViewError::IO)
}

fn write_message(out: &mut impl io::Write, title: &str, detail: &str) -> Result<(), ViewError> {
    write_line(out, title)?;

    if !detail.is_empty() {
        write_line(out, detail)?;
    }

    Ok(())
}

fn build_table(builder: Builder, right_aligned: Columns<std::ops::Range<usize>>) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(right_aligned, Alignment::right());

    table
}

fn write_summary(out: &mut impl io::Write, rows: &[(&str, &str)]) -> Result<(), ViewError> {
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in rows {
        write_line(out, format!(" {label:<label_width$}  {value:>value_width$}"))?;
    }

    Ok(())
}
