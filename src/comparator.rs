use std::cmp::Ordering;

use crate::classifier::ColumnTypeMemo;
use crate::sort_key::SortKey;

/// Compare two rows on the column of `key`, adjusted for the key's [Order](crate::order::Order).
///
/// The column is compared as integer or text according to `memo`, which may record an integer
/// decision for the column as a side effect.
///
/// # Panics
/// When the key's column index is out of range for either row.
pub fn compare_column<S: AsRef<str>>(left: &[S], right: &[S], key: &SortKey, memo: &mut ColumnTypeMemo) -> Ordering {
    let column = key.index();
    let (l, r) = match (left.get(column), right.get(column)) {
        (Some(l), Some(r)) => (l.as_ref(), r.as_ref()),
        _ => panic!(
            "sort key column {} out of range for rows of {} and {} columns",
            column,
            left.len(),
            right.len(),
        ),
    };
    key.order().apply(memo.compare(column, l, r))
}

/// Compare two rows on every key in priority order. The first key that does not compare equal
/// decides, rows equal on all keys are tied.
pub fn compare_rows<S: AsRef<str>>(left: &[S], right: &[S], keys: &[SortKey], memo: &mut ColumnTypeMemo) -> Ordering {
    for key in keys {
        let ordering = compare_column(left, right, key, memo);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
