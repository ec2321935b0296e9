use std::io::Write;

use anyhow::Result;

pub const COLUMN_COUNT: usize = 4;

const HEADER: &str = "Node.js LTS versions available to download:";

const HINTS: [&str; 3] = [
    "  $ ron --lts\t-> to install the latest lts version, or for example",
    "  $ ron 16\t-> to install the latest 16 version (v16.20.2), or ",
    "  $ ron 14.21.5\t-> to install node.js version 14.21.5 or any other version available.",
];

/// A version list split into four contiguous slices, read row by row.
///
/// Every column but the last holds `ceil(total / 4)` entries; the remainder
/// goes to the later columns, so only trailing cells are ever empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: [Vec<String>; COLUMN_COUNT],
    rows: usize,
}

impl ColumnLayout {
    pub fn new(versions: Vec<String>) -> Self {
        let rows = versions.len().div_ceil(COLUMN_COUNT);
        let mut columns: [Vec<String>; COLUMN_COUNT] = Default::default();

        for (i, version) in versions.into_iter().enumerate() {
            // rows == 0 only when the list is empty, so the loop never runs
            columns[(i / rows).min(COLUMN_COUNT - 1)].push(version);
        }

        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Cells of row `i`, with `""` where a column has run out.
    pub fn row(&self, i: usize) -> [&str; COLUMN_COUNT] {
        std::array::from_fn(|c| self.columns[c].get(i).map_or("", String::as_str))
    }

    pub fn rows(&self) -> impl Iterator<Item = [&str; COLUMN_COUNT]> + '_ {
        (0..self.row_count()).map(|i| self.row(i))
    }

    /// Header, one line per row, then the install hints.
    pub fn render(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}\n", HEADER)?;

        for [c1, c2, c3, c4] in self.rows() {
            writeln!(out, "{c1}    \t{c2}    \t{c3}    \t{c4}")?;
        }

        writeln!(out, "\nNow you probably will want to run")?;
        for hint in HINTS {
            writeln!(out, "{}", hint)?;
        }

        Ok(())
    }
}
