use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use regex::Regex;

use crate::config::Config;
use crate::error::TableError;
use crate::table::Table;
use crate::title::Title;
use crate::Row;

/// Load a [Table] from CSV like text.
///
/// A default reader:
/// * uses ',' as the delimiter
/// * takes the first record as the column titles
/// * does not trim cells
/// * does not recognize comments
/// * keeps records whose cells are all blank
/// * keeps all records, there is no ignore pattern
///
/// All records must have the same number of cells and titles must be distinct.
///
/// # Examples
/// ```
/// use csv_table::reader::TableReader;
///
/// let data = "user,sub,scores\ngri,Go,100\nken,C,150\n";
/// let table = TableReader::new().read_from(data.as_bytes()).unwrap();
/// assert_eq!(table.size(), (3, 2));
/// assert_eq!(table.titles().get("scores"), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct TableReader {
    delimiter: u8,
    has_titles: bool,
    trim: bool,
    comment: Option<u8>,
    ignore_empty: bool,
    ignore_rows: Option<Regex>,
}

impl TableReader {
    pub fn new() -> TableReader {
        TableReader {
            delimiter: b',',
            has_titles: true,
            trim: false,
            comment: None,
            ignore_empty: false,
            ignore_rows: None,
        }
    }

    /// Set the field delimiter. The default is ','
    pub fn with_delimiter(&mut self, delimiter: u8) -> &mut TableReader {
        self.delimiter = delimiter;
        self
    }

    /// Specify whether the first record holds the column titles. The default is true
    pub fn with_titles(&mut self, has_titles: bool) -> &mut TableReader {
        self.has_titles = has_titles;
        self
    }

    /// Trim surrounding whitespace of every cell, titles included
    pub fn with_trim(&mut self, trim: bool) -> &mut TableReader {
        self.trim = trim;
        self
    }

    /// Skip lines starting with `comment`
    pub fn with_comment(&mut self, comment: u8) -> &mut TableReader {
        self.comment = Some(comment);
        self
    }

    /// Skip records where every cell is blank
    pub fn with_ignore_empty(&mut self) -> &mut TableReader {
        self.ignore_empty = true;
        self
    }

    /// Skip records matching `r`. The pattern is matched against the cells of the record joined
    /// by the delimiter. Titles are never skipped by the pattern.
    pub fn with_ignore_rows(&mut self, r: Regex) -> &mut TableReader {
        self.ignore_rows = Some(r);
        self
    }

    /// Read a table from the file at `path`
    pub fn read(&self, path: &Path) -> Result<Table, TableError> {
        let file = File::open(path)?;
        log::info!("Reading table from {}", path.to_string_lossy());
        self.internal_read(file, &path.to_string_lossy())
    }

    /// Read a table from `reader`
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Table, TableError> {
        self.internal_read(reader, "reader")
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.delimiter,
            self.has_titles,
            self.trim,
            self.comment,
            self.ignore_empty,
            self.ignore_rows.clone(),
        )
    }

    fn internal_read<R: Read>(&self, reader: R, source: &str) -> Result<Table, TableError> {
        let config = self.create_config();
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(config.delimiter())
            .has_headers(false)
            .flexible(false)
            .trim(if config.trim() { Trim::All } else { Trim::None })
            .comment(config.comment())
            .from_reader(reader);

        let mut titles: Option<Title> = None;
        let mut rows: Vec<Row> = Vec::new();
        let mut skipped = 0;
        for result in csv_reader.records() {
            let record = result?;
            if titles.is_none() && config.has_titles() {
                titles = Some(Title::try_new(&to_row(&record))?);
                continue;
            }
            if Self::ignore(&record, &config) {
                skipped += 1;
                continue;
            }
            rows.push(to_row(&record));
        }

        let titles = match titles {
            Some(titles) => titles,
            None if config.has_titles() => {
                return Err(TableError::EmptyInput(source.to_string()));
            }
            None => Title::default(),
        };

        log::info!(
            "Read {} rows of {} columns from {}, skipped {} records",
            rows.len(),
            rows.first().map_or(titles.len(), |row| row.len()),
            source,
            skipped,
        );
        Ok(Table::new(titles, rows))
    }

    fn ignore(record: &StringRecord, config: &Config) -> bool {
        if config.ignore_empty() && record.iter().all(|cell| cell.trim().is_empty()) {
            return true;
        }

        if let Some(r) = config.ignore_rows() {
            let delimiter = char::from(config.delimiter()).to_string();
            let line = record.iter().collect::<Vec<&str>>().join(&delimiter);
            if r.is_match(line.trim()) {
                return true;
            }
        }
        false
    }
}

impl Default for TableReader {
    fn default() -> Self {
        TableReader::new()
    }
}

fn to_row(record: &StringRecord) -> Row {
    record.iter().map(|cell| cell.to_string()).collect()
}
