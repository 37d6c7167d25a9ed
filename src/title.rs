use std::collections::HashMap;

use crate::error::{TableError, TitleNotFound};
use crate::sort_key::{NamedSortKey, SortKey};

/// Column titles of a table, mapping each name to its zero based column index.
///
/// # Examples
/// ```
/// use csv_table::sort_key::{NamedSortKey, SortKey};
/// use csv_table::title::Title;
///
/// let title = Title::new(&["user", "sub", "scores"]);
/// let keys = title.sort_keys(&[NamedSortKey::asc("user"), NamedSortKey::desc("scores")]).unwrap();
/// assert_eq!(keys, vec![SortKey::asc(0), SortKey::desc(2)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Title {
    columns: HashMap<String, usize>,
}

impl Title {
    /// Create a [Title] from a header record. The index of each name is its position.
    ///
    /// # Panics
    /// When a name repeats. Header records that come from input go through [Title::try_new].
    pub fn new<S: AsRef<str>>(names: &[S]) -> Title {
        match Title::try_new(names) {
            Ok(title) => title,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a [Title] from a header record, failing with [TableError::DuplicateTitle] on the
    /// first repeated name.
    pub fn try_new<S: AsRef<str>>(names: &[S]) -> Result<Title, TableError> {
        let mut columns = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if columns.insert(name.to_string(), i).is_some() {
                return Err(TableError::DuplicateTitle(name.to_string()));
            }
        }
        Ok(Title {
            columns,
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    /// Get the column index for `name`
    pub fn index(&self, name: &str) -> Result<usize, TitleNotFound> {
        self.get(name).ok_or_else(|| TitleNotFound(name.to_string()))
    }

    /// Get the column indexes for `names`, in the same order. Fails on the first missing name.
    pub fn indexes<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>, TitleNotFound> {
        names.iter()
            .map(|name| self.index(name.as_ref()))
            .collect()
    }

    /// Resolve named keys into index based [SortKey]s. Fails on the first missing name.
    pub fn sort_keys(&self, named_keys: &[NamedSortKey]) -> Result<Vec<SortKey>, TitleNotFound> {
        named_keys.iter()
            .map(|key| Ok(SortKey::new(self.index(key.name())?, key.order())))
            .collect()
    }

    /// Column names ordered by column index
    pub fn names(&self) -> Vec<String> {
        let mut columns: Vec<(&String, &usize)> = self.columns.iter().collect();
        columns.sort_by_key(|(_, index)| **index);
        columns.into_iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub(crate) fn insert(&mut self, name: &str, index: usize) {
        self.columns.insert(name.to_string(), index);
    }

    pub(crate) fn swap(&mut self, a: &str, b: &str) -> Result<(usize, usize), TitleNotFound> {
        let index_a = self.index(a)?;
        let index_b = self.index(b)?;
        self.columns.insert(a.to_string(), index_b);
        self.columns.insert(b.to_string(), index_a);
        Ok((index_a, index_b))
    }
}
