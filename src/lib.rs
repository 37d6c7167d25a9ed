//! This crate loads small delimited text tables, for example CSV or TSV, into memory and
//! reorders, filters, transforms, splits, deduplicates and writes them.
//!
//! At its core is a multi-key row sorter that infers, per column, whether the cells are compared
//! as integers or as strings. A column whose first compared pair of values are both integer
//! literals (`0`, `7`, ` 150 `, but not `010`) is compared numerically for the rest of that
//! sort, any other column is compared byte-wise, so `"100" < "80"` for text columns.
//!
//! # Examples
//! ```
//! use csv_table::reader::TableReader;
//! use csv_table::sort_key::NamedSortKey;
//!
//! fn top_scores(data: &str) -> Result<Vec<Vec<String>>, anyhow::Error> {
//!     let mut table = TableReader::new().read_from(data.as_bytes())?;
//!     // by user ascending, then by score, highest first
//!     table.sort_by_names(&[NamedSortKey::asc("user"), NamedSortKey::desc("scores")])?;
//!     let firsts = table.split(&["user"])?
//!         .iter()
//!         .map(|group| group.rows()[0].clone())
//!         .collect();
//!     Ok(firsts)
//! }
//!
//! let data = "user,sub,scores\ngri,Go,100\nken,C,150\ngri,Smalltalk,80\nken,Go,200\n";
//! let firsts = top_scores(data).unwrap();
//! assert_eq!(firsts[0], vec!["gri", "Go", "100"]);
//! assert_eq!(firsts[1], vec!["ken", "Go", "200"]);
//! ```
//!

pub(crate) mod config;

pub mod classifier;
pub mod column_type;
pub mod comparator;
pub mod digest;
pub mod error;
pub mod operation;
pub mod order;
pub mod reader;
pub mod sort_key;
pub mod sorter;
pub mod table;
pub mod title;

/// A row of cells aligned to the table columns
pub type Row = Vec<String>;
