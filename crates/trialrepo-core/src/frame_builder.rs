//! DataFrame construction from flattened records.

use std::collections::{BTreeMap, HashSet};

use polars::prelude::{Column, DataFrame, NamedFrom, PolarsResult, Series};
use serde_json::{Map, Value};

/// Storage type chosen for one table column, or the JSON kind of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Boolean,
    Integer,
    Float,
    Text,
    /// Cells disagree on kind; stored as text with per-cell kinds kept aside.
    Mixed,
}

impl ColumnKind {
    /// Kind of a single JSON value; `None` for null.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(Self::Boolean),
            Value::Number(number) if number.is_i64() => Some(Self::Integer),
            Value::Number(_) => Some(Self::Float),
            Value::String(_) | Value::Array(_) | Value::Object(_) => Some(Self::Text),
        }
    }

    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (a, b) if a == b => a,
            (Self::Integer, Self::Float) | (Self::Float, Self::Integer) => Self::Float,
            _ => Self::Mixed,
        }
    }
}

/// Per-cell kinds of every [`ColumnKind::Mixed`] column, keyed by column name.
///
/// Each vector has one entry per row; `None` marks a null cell.
pub type MixedCells = BTreeMap<String, Vec<Option<ColumnKind>>>;

/// Infers the column type from its non-null cells.
///
/// Integers widen to floats when mixed. Any other mix is [`ColumnKind::Mixed`].
/// An all-null column is stored as text.
pub fn infer_column_kind<'a>(cells: impl IntoIterator<Item = Option<&'a Value>>) -> ColumnKind {
    cells
        .into_iter()
        .flatten()
        .filter_map(ColumnKind::of)
        .reduce(ColumnKind::merge)
        .unwrap_or(ColumnKind::Text)
}

/// Renders a cell for a text column.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Collects column names across rows in first-seen order.
pub fn column_union(rows: &[Map<String, Value>]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut columns = Vec::new();
    for row in rows {
        for key in row.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Build a DataFrame from flattened records.
///
/// The frame has one row per record and one column per key seen in any
/// record, ordered by first appearance. A record lacking a key gets a
/// null cell in that column. No records yields an empty frame.
pub fn build_record_dataframe(rows: &[Map<String, Value>]) -> PolarsResult<DataFrame> {
    build_record_table(rows).map(|(data, _)| data)
}

/// Like [`build_record_dataframe`], also returning the cell kinds of mixed columns.
pub fn build_record_table(rows: &[Map<String, Value>]) -> PolarsResult<(DataFrame, MixedCells)> {
    let mut mixed = MixedCells::new();
    if rows.is_empty() {
        return Ok((DataFrame::empty(), mixed));
    }
    let names = column_union(rows);
    let mut columns: Vec<Column> = Vec::with_capacity(names.len());
    for name in &names {
        let cells: Vec<Option<&Value>> = rows.iter().map(|row| row.get(name)).collect();
        let kind = infer_column_kind(cells.iter().copied());
        if kind == ColumnKind::Mixed {
            let kinds = cells
                .iter()
                .map(|cell| cell.and_then(ColumnKind::of))
                .collect();
            mixed.insert(name.clone(), kinds);
        }
        columns.push(build_column(name, kind, &cells));
    }
    Ok((DataFrame::new(columns)?, mixed))
}

fn build_column(name: &str, kind: ColumnKind, cells: &[Option<&Value>]) -> Column {
    let series = match kind {
        ColumnKind::Boolean => {
            let values: Vec<Option<bool>> = cells
                .iter()
                .map(|cell| cell.and_then(Value::as_bool))
                .collect();
            Series::new(name.into(), values)
        }
        ColumnKind::Integer => {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|cell| cell.and_then(Value::as_i64))
                .collect();
            Series::new(name.into(), values)
        }
        ColumnKind::Float => {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|cell| cell.and_then(Value::as_f64))
                .collect();
            Series::new(name.into(), values)
        }
        ColumnKind::Text | ColumnKind::Mixed => {
            let values: Vec<Option<String>> = cells
                .iter()
                .map(|cell| cell.and_then(value_to_text))
                .collect();
            Series::new(name.into(), values)
        }
    };
    series.into()
}
