use std::str::FromStr;

use crate::error::TableError;
use crate::order::Order;

/// Defines one sort key: a column of the rows and the direction it is sorted in.
///
/// Keys are given to the sorter as an ordered list. Earlier keys dominate, a later key is only
/// consulted when all earlier keys compare equal.
///
/// # Examples
/// ```
/// // sort by the first column ascending, then by the third column descending
/// use csv_table::order::Order;
/// use csv_table::sort_key::SortKey;
/// let keys = vec![
///     SortKey::new(0, Order::Asc),
///     SortKey::new(2, Order::Desc),
/// ];
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SortKey {
    index: usize,
    order: Order,
}

impl SortKey {
    /// Create a new [SortKey]
    ///
    /// # Arguments
    /// * `index` - the zero based column index
    /// * `order` - the sort direction for this column
    pub fn new(index: usize, order: Order) -> SortKey {
        SortKey {
            index,
            order,
        }
    }

    /// Create an ascending [SortKey] for `index`
    pub fn asc(index: usize) -> SortKey {
        SortKey::new(index, Order::Asc)
    }

    /// Create a descending [SortKey] for `index`
    pub fn desc(index: usize) -> SortKey {
        SortKey::new(index, Order::Desc)
    }

    /// Get the column index for this key.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the [Order] for this key.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Specify the column index for this key
    pub fn with_index(mut self, index: usize) -> SortKey {
        self.index = index;
        self
    }

    /// Specify the [Order] for this key
    pub fn with_order(mut self, order: Order) -> SortKey {
        self.order = order;
        self
    }
}

/// A sort key that refers to its column by title.
///
/// Resolved into a [SortKey] by [Title::sort_keys](crate::title::Title::sort_keys).
///
/// Parses from `name`, `name:asc` or `name:desc`.
/// ```
/// use std::str::FromStr;
/// use csv_table::order::Order;
/// use csv_table::sort_key::NamedSortKey;
/// let key = NamedSortKey::from_str("scores:desc").unwrap();
/// assert_eq!(key.name(), "scores");
/// assert_eq!(key.order(), Order::Desc);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedSortKey {
    name: String,
    order: Order,
}

impl NamedSortKey {
    pub fn new(name: &str, order: Order) -> NamedSortKey {
        NamedSortKey {
            name: name.to_string(),
            order,
        }
    }

    pub fn asc(name: &str) -> NamedSortKey {
        NamedSortKey::new(name, Order::Asc)
    }

    pub fn desc(name: &str) -> NamedSortKey {
        NamedSortKey::new(name, Order::Desc)
    }

    /// Get the column title for this key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the [Order] for this key.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl FromStr for NamedSortKey {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, order) = match s.rsplit_once(':') {
            Some((name, order)) => (name, Order::from_str(order)?),
            None => (s, Order::Asc),
        };
        if name.is_empty() {
            return Err(TableError::InvalidSortKey(format!("missing column name in '{s}'")));
        }
        Ok(NamedSortKey::new(name, order))
    }
}
