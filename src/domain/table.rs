use crate::utils::error::{FetchError, Result};
use serde::Serialize;

/// Suffix on a column title requesting right alignment in the rendered
/// table, e.g. `"Balance/r"`. Stripped at construction time; the flag
/// travels in `Column::right_aligned` instead.
pub const RIGHT_ALIGN_MARKER: &str = "/r";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub title: String,
    pub right_aligned: bool,
}

impl Column {
    /// 解析欄位標題，`/r` 結尾代表靠右對齊
    pub fn parse(title: &str) -> Self {
        match title.strip_suffix(RIGHT_ALIGN_MARKER) {
            Some(stripped) => Self {
                title: stripped.to_string(),
                right_aligned: true,
            },
            None => Self {
                title: title.to_string(),
                right_aligned: false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<String>,
}

/// Generic projection target returned by every fetch operation: named
/// columns plus rows of pre-formatted string cells. Cell order is
/// positional; every row must be exactly as wide as the column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl DataTable {
    pub fn new(titles: &[&str]) -> Self {
        Self {
            columns: titles.iter().map(|t| Column::parse(t)).collect(),
            rows: Vec::new(),
        }
    }

    /// Append one row, enforcing the width invariant. A mismatched row is
    /// a programming error in the projector; fail here instead of handing
    /// malformed data to the client.
    pub fn push_row(&mut self, cells: Vec<String>) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(FetchError::ShapeMismatch {
                expected: self.columns.len(),
                actual: cells.len(),
            });
        }
        self.rows.push(Row { cells });
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
