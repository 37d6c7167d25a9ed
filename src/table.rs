use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use tempfile::Builder;

use crate::digest::row_digest;
use crate::error::TableError;
use crate::operation::{append_derived, Operation, Predicate};
use crate::sort_key::{NamedSortKey, SortKey};
use crate::sorter::RowSorter;
use crate::title::Title;
use crate::Row;

/// Rows of string cells with optional column titles.
///
/// The titles are optional for the table itself, but every operation that refers to columns by
/// name needs them. Tables loaded with [TableReader](crate::reader::TableReader) take the first
/// record as titles by default.
///
/// # Examples
/// ```
/// use csv_table::sort_key::NamedSortKey;
/// use csv_table::table::Table;
///
/// let mut table = Table::from_records(vec![
///     vec!["language".to_string(), "level".to_string()],
///     vec!["Go".to_string(), "L2".to_string()],
///     vec!["C".to_string(), "L1".to_string()],
///     vec!["C".to_string(), "L2".to_string()],
/// ]).unwrap();
/// table.sort_by_names(&[NamedSortKey::asc("language")]).unwrap();
/// let groups = table.split(&["language"]).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].size(), (2, 2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    titles: Title,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(titles: Title, rows: Vec<Row>) -> Table {
        Table {
            titles,
            rows,
        }
    }

    /// Create a table from records where the first record holds the titles. No records result
    /// in an empty table without titles.
    pub fn from_records(mut records: Vec<Row>) -> Result<Table, TableError> {
        if records.is_empty() {
            return Ok(Table::default());
        }
        let rows = records.split_off(1);
        Ok(Table::new(Title::try_new(&records[0])?, rows))
    }

    pub fn without_titles(rows: Vec<Row>) -> Table {
        Table::new(Title::default(), rows)
    }

    pub fn titles(&self) -> &Title {
        &self.titles
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// The number of columns and the number of rows, in that order. A table without rows has
    /// no columns.
    pub fn size(&self) -> (usize, usize) {
        size(&self.rows)
    }

    /// Print titles and numbered rows to `w`
    pub fn print<W: Write>(&self, w: &mut W) -> Result<(), TableError> {
        write!(w, "{}", self)?;
        Ok(())
    }

    /// Sort rows in place by index based keys. See [RowSorter].
    ///
    /// # Panics
    /// On an empty key list or a key column out of range for the rows.
    pub fn sort(&mut self, keys: &[SortKey]) {
        log::info!("Sorting {} rows by {} keys", self.rows.len(), keys.len());
        RowSorter::new(keys.to_vec()).sort(&mut self.rows);
        log::info!("Finished sorting {} rows", self.rows.len());
    }

    /// Sort rows in place by keys naming their columns. Nothing is sorted when a name is
    /// missing from the titles.
    pub fn sort_by_names(&mut self, named_keys: &[NamedSortKey]) -> Result<(), TableError> {
        let keys = self.titles.sort_keys(named_keys)?;
        self.sort(&keys);
        Ok(())
    }

    /// Check whether the rows are in order for `keys`
    pub fn is_sorted(&self, keys: &[SortKey]) -> bool {
        RowSorter::new(keys.to_vec()).is_sorted(&self.rows)
    }

    /// Swap two named columns in every row. The titles follow their data, so each name still
    /// refers to the same values at the new position.
    pub fn swap(&mut self, a: &str, b: &str) -> Result<(), TableError> {
        let (index_a, index_b) = self.titles.swap(a, b)?;
        for row in self.rows.iter_mut() {
            row.swap(index_a, index_b);
        }
        Ok(())
    }

    /// Copy the named columns, in the order of `names`. The result is independent of this table.
    pub fn extract<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Row>, TableError> {
        let indexes = self.titles.indexes(names)?;
        let extracted = self.rows.iter()
            .map(|row| indexes.iter().map(|i| row[*i].clone()).collect())
            .collect();
        Ok(extracted)
    }

    /// Create a new table from the named columns, in the order of `names`. Giving all titles in
    /// a different order reorders the columns. A name given twice is a
    /// [TableError::DuplicateTitle].
    pub fn convert<S: AsRef<str>>(&self, names: &[S]) -> Result<Table, TableError> {
        let titles = Title::try_new(names)?;
        let rows = self.extract(names)?;
        Ok(Table::new(titles, rows))
    }

    /// Group consecutive rows with equal values in the named columns.
    ///
    /// The table should be sorted by those columns first, otherwise equal values that are not
    /// adjacent end up in separate groups. The views borrow this table's rows and titles.
    pub fn split<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<TableView<'_>>, TableError> {
        let indexes = self.titles.indexes(names)?;
        let mut views = Vec::new();
        let mut start = 0;
        for r in 1..self.rows.len() {
            let changed = indexes.iter()
                .any(|i| self.rows[r][*i] != self.rows[start][*i]);
            if changed {
                views.push(TableView::new(&self.titles, &self.rows[start..r]));
                start = r;
            }
        }
        if start < self.rows.len() {
            views.push(TableView::new(&self.titles, &self.rows[start..]));
        }
        log::info!("Split {} rows into {} groups", self.rows.len(), views.len());
        Ok(views)
    }

    /// Write titles, when there are any, and rows as CSV to `w`
    pub fn write<W: Write>(&self, w: W) -> Result<(), TableError> {
        write_csv(&self.titles, &self.rows, w)
    }

    /// Write the table as CSV to `path`.
    ///
    /// The content goes to a temporary file in the same directory first, which then replaces
    /// `path`, so readers never see a partially written file.
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir()?,
        };
        let tmp_file = Builder::new()
            .prefix("table-")
            .suffix(".part")
            .tempfile_in(&dir)?;
        self.write(BufWriter::new(tmp_file.as_file()))?;
        tmp_file.persist(path)
            .map_err(|e| TableError::Persist {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        log::info!("Saved {} rows to {}", self.rows.len(), path.to_string_lossy());
        Ok(())
    }

    /// Keep only the rows for which at least one of `predicates` holds. Order is preserved.
    pub fn filter(&mut self, predicates: &[Predicate]) {
        let before = self.rows.len();
        self.rows.retain(|row| predicates.iter().any(|is| is(row.as_slice())));
        log::debug!("Filter kept {} of {} rows", self.rows.len(), before);
    }

    /// Apply every operation to every row. Each operation changes a row only when its check
    /// holds for that row.
    pub fn replace(&mut self, operations: &[Operation]) {
        let (columns, rows) = self.size();
        if columns == 0 || rows == 0 {
            log::warn!("Cannot operate on a zero sized table: columns = {}, rows = {}", columns, rows);
            return;
        }

        let mut applied = 0;
        for row in self.rows.iter_mut() {
            for operation in operations {
                if operation.apply(row) {
                    applied += 1;
                }
            }
        }
        log::debug!("Replace applied {} operations", applied);
    }

    /// Append a column named `name` computed by `op` from the columns at `a` and `b`.
    ///
    /// The titles must name every column, so a table without titles cannot derive columns.
    pub fn derive<F>(&mut self, a: usize, b: usize, name: &str, op: F) -> Result<(), TableError>
        where F: Fn(&str, &str) -> String {
        if self.titles.contains(name) {
            return Err(TableError::DuplicateTitle(name.to_string()));
        }
        let columns = match self.rows.first() {
            Some(row) => row.len(),
            None => self.titles.len(),
        };
        if self.titles.len() != columns {
            return Err(TableError::ColumnMismatch {
                titles: self.titles.len(),
                columns,
            });
        }
        self.titles.insert(name, columns);
        for row in self.rows.iter_mut() {
            append_derived(row, a, b, &op);
        }
        Ok(())
    }

    /// Create an independent table without duplicate rows. The first occurrence of a row is
    /// kept. Rows are compared by their [row_digest].
    pub fn unique(&self) -> Table {
        let mut seen: HashSet<String> = HashSet::with_capacity(self.rows.len());
        let rows: Vec<Row> = self.rows.iter()
            .filter(|row| seen.insert(row_digest(row.as_slice())))
            .cloned()
            .collect();
        log::info!("Removed {} duplicate rows", self.rows.len() - rows.len());
        Table::new(self.titles.clone(), rows)
    }

    /// One map per row from column title to cell value
    pub fn records(&self) -> Vec<HashMap<String, String>> {
        let names = self.titles.names();
        self.rows.iter()
            .map(|row| {
                names.iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Borrow the whole table as a [TableView]
    pub fn view(&self) -> TableView<'_> {
        TableView::new(&self.titles, &self.rows)
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.view(), f)
    }
}

/// A borrowed run of rows of a [Table], as returned by [Table::split]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableView<'a> {
    titles: &'a Title,
    rows: &'a [Row],
}

impl<'a> TableView<'a> {
    pub(crate) fn new(titles: &'a Title, rows: &'a [Row]) -> TableView<'a> {
        TableView {
            titles,
            rows,
        }
    }

    pub fn titles(&self) -> &'a Title {
        self.titles
    }

    pub fn rows(&self) -> &'a [Row] {
        self.rows
    }

    pub fn size(&self) -> (usize, usize) {
        size(self.rows)
    }

    pub fn write<W: Write>(&self, w: W) -> Result<(), TableError> {
        write_csv(self.titles, self.rows, w)
    }

    /// Copy the rows into an independent [Table]
    pub fn to_table(&self) -> Table {
        Table::new(self.titles.clone(), self.rows.to_vec())
    }
}

impl Display for TableView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Titles:")?;
        writeln!(f, "{}", self.titles.names().join(", "))?;
        writeln!(f, "Rows:")?;
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(f, "{} {}", i + 1, row.join(", "))?;
        }
        writeln!(f)
    }
}

fn size(rows: &[Row]) -> (usize, usize) {
    match rows.first() {
        None => (0, 0),
        Some(first) => (first.len(), rows.len()),
    }
}

fn write_csv<W: Write>(titles: &Title, rows: &[Row], w: W) -> Result<(), TableError> {
    let mut writer = WriterBuilder::new().from_writer(w);
    let names = titles.names();
    if !names.is_empty() {
        writer.write_record(&names)?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
