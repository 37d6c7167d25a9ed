use std::cmp::{min, Ordering};

use crate::classifier::ColumnTypeMemo;
use crate::comparator::compare_rows;
use crate::sort_key::SortKey;
use crate::Row;

// runs shorter than this are sorted by insertion before merging
const RUN_LENGTH: usize = 16;

/// Sort rows of string cells by an ordered list of [SortKey]s.
///
/// Every column used as a key is compared either as an integer or as text. The decision is taken
/// by the first pair of values compared on that column during a sort: when both are integer
/// literals the column is numeric for the rest of that sort, see
/// [ColumnTypeMemo](crate::classifier::ColumnTypeMemo). Each call to [RowSorter::sort] starts
/// with no decisions, so nothing carries over between sorts.
///
/// The sort is a stable merge sort. Rows tied on all keys keep their relative order.
///
/// # Examples
/// ```
/// use csv_table::sort_key::SortKey;
/// use csv_table::sorter::RowSorter;
///
/// let mut rows = vec![
///     vec!["gri".to_string(), "100".to_string()],
///     vec!["ken".to_string(), "80".to_string()],
///     vec!["dmr".to_string(), "100".to_string()],
/// ];
/// let sorter = RowSorter::new(vec![SortKey::asc(1), SortKey::asc(0)]);
/// sorter.sort(&mut rows);
/// assert_eq!(rows[0][0], "ken");
/// assert_eq!(rows[1][0], "dmr");
/// ```
///
/// # Panics
/// [RowSorter::new] panics on an empty key list, [RowSorter::sort] panics when a key refers to a
/// column that does not exist in the compared rows. Both are caller errors, names should be
/// resolved and validated with [Title::sort_keys](crate::title::Title::sort_keys) first.
#[derive(Clone, Debug)]
pub struct RowSorter {
    keys: Vec<SortKey>,
}

impl RowSorter {
    pub fn new(keys: Vec<SortKey>) -> RowSorter {
        assert!(!keys.is_empty(), "at least one sort key is required");
        RowSorter {
            keys,
        }
    }

    /// Get the sort keys in priority order
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Sort `rows` in place. Rows are only moved, never modified.
    pub fn sort(&self, rows: &mut [Row]) {
        log::debug!("Start sorting {} rows by {} keys", rows.len(), self.keys.len());
        let mut memo = ColumnTypeMemo::new();
        let mut order: Vec<usize> = (0..rows.len()).collect();
        {
            let rows: &[Row] = rows;
            let mut less = |a: usize, b: usize| {
                compare_rows(&rows[a], &rows[b], &self.keys, &mut memo) == Ordering::Less
            };
            merge_sort(&mut order, &mut less);
        }
        apply_permutation(rows, order);
        log::debug!("Finish sorting {} rows, integer columns: {:?}", rows.len(), memo.integer_columns());
    }

    /// Check whether `rows` are already in order. Uses a fresh [ColumnTypeMemo] the same way
    /// [RowSorter::sort] does.
    ///
    /// The check compares adjacent rows only, so it may classify a column differently than the
    /// sort did. When the sort compared text pairs on a column before it met an integer pair,
    /// the rows it produced can be reported as not sorted.
    pub fn is_sorted(&self, rows: &[Row]) -> bool {
        let mut memo = ColumnTypeMemo::new();
        rows.windows(2)
            .all(|pair| compare_rows(&pair[0], &pair[1], &self.keys, &mut memo) != Ordering::Greater)
    }
}

/// Sort `rows` in place by `keys`. See [RowSorter].
pub fn sort_rows(rows: &mut [Row], keys: &[SortKey]) {
    RowSorter::new(keys.to_vec()).sort(rows)
}

fn merge_sort<F>(indices: &mut Vec<usize>, less: &mut F)
    where F: FnMut(usize, usize) -> bool {
    let len = indices.len();
    let mut start = 0;
    while start < len {
        let end = min(start + RUN_LENGTH, len);
        insertion_sort(&mut indices[start..end], less);
        start = end;
    }

    let mut buffer = vec![0; len];
    let mut width = RUN_LENGTH;
    while width < len {
        let mut start = 0;
        while start < len {
            let middle = min(start + width, len);
            let end = min(start + 2 * width, len);
            merge(&indices[start..middle], &indices[middle..end], &mut buffer[start..end], less);
            start = end;
        }
        std::mem::swap(indices, &mut buffer);
        width *= 2;
    }
}

fn insertion_sort<F>(v: &mut [usize], less: &mut F)
    where F: FnMut(usize, usize) -> bool {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && less(v[j], v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

// takes from `right` only when strictly less, which keeps the merge stable
fn merge<F>(left: &[usize], right: &[usize], out: &mut [usize], less: &mut F)
    where F: FnMut(usize, usize) -> bool {
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if less(right[j], left[i]) {
            out[k] = right[j];
            j += 1;
        } else {
            out[k] = left[i];
            i += 1;
        }
        k += 1;
    }
    out[k..k + left.len() - i].copy_from_slice(&left[i..]);
    k += left.len() - i;
    out[k..].copy_from_slice(&right[j..]);
}

// position k receives the element that was at order[k]
fn apply_permutation<T>(v: &mut [T], mut order: Vec<usize>) {
    for i in 0..v.len() {
        let mut current = i;
        while order[current] != i {
            let next = order[current];
            v.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}
