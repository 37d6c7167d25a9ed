use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::TableError;

/// Sort direction of a single [SortKey](crate::sort_key::SortKey)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl Order {
    /// Apply this direction to an ascending comparison result. [Ordering::Equal] is never
    /// affected.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Order::Asc => {
                ordering
            }
            Order::Desc => {
                ordering.reverse()
            }
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::Asc
    }
}

impl FromStr for Order {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Asc),
            "desc" | "descending" => Ok(Order::Desc),
            other => Err(TableError::InvalidSortKey(format!("unknown order: {other}"))),
        }
    }
}
