use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::column_type::ColumnType;

const INTEGER_LITERAL: &str = r"^\s*(0|[1-9][0-9]*)\s*$";

fn integer_literal() -> &'static Regex {
    static INTEGER_LITERAL_REGEX: OnceLock<Regex> = OnceLock::new();
    INTEGER_LITERAL_REGEX.get_or_init(|| Regex::new(INTEGER_LITERAL).expect("valid integer literal pattern"))
}

/// Check whether `value` has the shape of an integer literal.
///
/// Optional surrounding whitespace, then either a single `0` or a non-zero digit followed by
/// digits. Leading zeros, signs and decimal points do not qualify.
///
/// # Examples
/// ```
/// use csv_table::classifier::is_integer_literal;
/// assert!(is_integer_literal(" 12 "));
/// assert!(!is_integer_literal("010"));
/// ```
pub fn is_integer_literal(value: &str) -> bool {
    integer_literal().is_match(value)
}

/// Parse a cell of an integer column. Values that do not parse, including literals that
/// overflow an `i64`, count as zero.
pub fn parse_integer(value: &str) -> i64 {
    value.trim().parse::<i64>().unwrap_or(0)
}

/// Column type decisions taken during a single sort.
///
/// A column becomes [ColumnType::Integer] the first time a compared pair of its values are both
/// integer literals, and stays that way for every later comparison made through this memo,
/// including pairs that are not integer literals themselves (those parse to zero). A pair that
/// is not numeric is compared as text and leaves the column unclassified.
///
/// A memo is created by the sorter for each sort invocation and dropped when it returns.
#[derive(Debug, Default)]
pub struct ColumnTypeMemo {
    columns: HashMap<usize, ColumnType>,
}

impl ColumnTypeMemo {
    pub fn new() -> ColumnTypeMemo {
        ColumnTypeMemo {
            columns: HashMap::new(),
        }
    }

    /// The recorded decision for `column`, [ColumnType::Unclassified] if there is none yet.
    pub fn column_type(&self, column: usize) -> ColumnType {
        self.columns.get(&column).copied().unwrap_or(ColumnType::Unclassified)
    }

    /// Decide how `left` and `right` of `column` are compared, recording an integer decision.
    ///
    /// Returns either [ColumnType::Integer] or [ColumnType::Text].
    pub fn classify(&mut self, column: usize, left: &str, right: &str) -> ColumnType {
        match self.column_type(column) {
            ColumnType::Integer => {
                ColumnType::Integer
            }
            ColumnType::Unclassified | ColumnType::Text => {
                if is_integer_literal(left) && is_integer_literal(right) {
                    log::debug!("column {} classified as integer by pair ({:?}, {:?})", column, left, right);
                    self.columns.insert(column, ColumnType::Integer);
                    ColumnType::Integer
                } else {
                    ColumnType::Text
                }
            }
        }
    }

    /// Ascending comparison of two values of `column`.
    pub fn compare(&mut self, column: usize, left: &str, right: &str) -> Ordering {
        match self.classify(column, left, right) {
            ColumnType::Integer => {
                parse_integer(left).cmp(&parse_integer(right))
            }
            ColumnType::Unclassified | ColumnType::Text => {
                left.cmp(right)
            }
        }
    }

    /// Columns classified as integer so far, in ascending order.
    pub fn integer_columns(&self) -> Vec<usize> {
        let mut columns: Vec<usize> = self.columns
            .iter()
            .filter(|(_, column_type)| **column_type == ColumnType::Integer)
            .map(|(column, _)| *column)
            .collect();
        columns.sort_unstable();
        columns
    }
}
