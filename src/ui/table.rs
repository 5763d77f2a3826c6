use std::fmt::{Display, Formatter};

use crate::error::{TableError, TableResult};
use crate::Help;

/// Ordered grid of optional cells. `None` is the empty marker and renders as
/// a blank cell. Every row holds exactly `columns` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T = String> {
    columns: usize,
    table: Vec<Vec<Option<T>>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> Table<T> {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            table: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.table.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn table(&self) -> &[Vec<Option<T>>] {
        &self.table
    }

    /// Appends a row, padding with empty cells or dropping extra values so
    /// the row is exactly `columns` wide.
    pub fn add_row<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<T>>,
    {
        let mut row: Vec<Option<T>> = values
            .into_iter()
            .take(self.columns)
            .map(Into::into)
            .collect();
        row.resize_with(self.columns, || None);
        self.table.push(row);
    }

    pub fn del_row(&mut self, index: usize) -> TableResult<Vec<Option<T>>> {
        self.check_row(index)?;
        Ok(self.table.remove(index))
    }

    /// Removes the cell at `index` from every row.
    pub fn del_column(&mut self, index: usize) -> TableResult<()> {
        self.check_column(index)?;
        for row in &mut self.table {
            row.remove(index);
        }
        self.columns -= 1;
        tracing::debug!(index, columns = self.columns, "table column removed");
        Ok(())
    }

    pub fn get_column(&self, row: usize, column: usize) -> TableResult<Option<&T>> {
        self.check_row(row)?;
        self.check_column(column)?;
        Ok(self.table[row][column].as_ref())
    }

    pub fn set_column(&mut self, value: impl Into<Option<T>>, row: usize, column: usize) -> TableResult<()> {
        self.check_row(row)?;
        self.check_column(column)?;
        self.table[row][column] = value.into();
        Ok(())
    }

    pub fn get_row(&self, index: usize) -> TableResult<&[Option<T>]> {
        self.check_row(index)?;
        Ok(&self.table[index])
    }

    /// Live view of a row. Cells may be edited in place; the slice keeps the
    /// row width fixed.
    pub fn get_row_mut(&mut self, index: usize) -> TableResult<&mut [Option<T>]> {
        self.check_row(index)?;
        Ok(&mut self.table[index])
    }

    fn check_row(&self, index: usize) -> TableResult<()> {
        if index < self.table.len() {
            Ok(())
        } else {
            Err(TableError::RowOutOfRange {
                index,
                rows: self.table.len(),
            })
        }
    }

    fn check_column(&self, index: usize) -> TableResult<()> {
        if index < self.columns {
            Ok(())
        } else {
            Err(TableError::ColumnOutOfRange {
                index,
                columns: self.columns,
            })
        }
    }
}

impl<T: Clone> Table<T> {
    /// Appends `placeholder` to every existing row.
    pub fn add_column(&mut self, placeholder: impl Into<Option<T>>) {
        let placeholder = placeholder.into();
        for row in &mut self.table {
            row.push(placeholder.clone());
        }
        self.columns += 1;
        tracing::debug!(columns = self.columns, "table column added");
    }
}

impl<T: Default + Clone> Table<T> {
    /// Appends a column filled with `T::default()`, the empty string for text.
    pub fn add_default_column(&mut self) {
        self.add_column(T::default());
    }
}

impl<T: Display> Table<T> {
    /// Renders every row as `| a | b |` followed by a newline.
    pub fn get_table(&self) -> String {
        let mut out = String::new();
        for row in &self.table {
            let cells = row
                .iter()
                .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default())
                .collect::<Vec<_>>();
            out.push_str("| ");
            out.push_str(&cells.join(" | "));
            out.push_str(" |\n");
        }
        out
    }
}

impl<T: Display> Display for Table<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.get_table())
    }
}

impl<T> Help for Table<T> {
    const NAME: &'static str = "Table";
    const SUMMARY: &'static str = "Table for representing data as pipe-delimited rows.";
}

#[cfg(test)]
#[path = "../tests/table_tests.rs"]
mod tests;
