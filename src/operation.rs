/// A condition checked against a row
pub type Predicate = Box<dyn Fn(&[String]) -> bool>;

/// A change applied to the cells of a row
pub type Action = Box<dyn Fn(&mut [String])>;

/// A conditional in place change of a row, used by [Table::replace](crate::table::Table::replace).
///
/// # Examples
/// ```
/// use csv_table::operation::Operation;
/// let mark = Operation::new(
///     |row| row[0] == "ken",
///     |row| row[2] = "marked".to_string(),
/// );
/// let mut row = vec!["ken".to_string(), "C".to_string(), "150".to_string()];
/// assert!(mark.apply(&mut row));
/// assert_eq!(row[2], "marked");
/// ```
pub struct Operation {
    check: Predicate,
    act: Action,
}

impl Operation {
    pub fn new<C, A>(check: C, act: A) -> Operation
        where C: Fn(&[String]) -> bool + 'static,
              A: Fn(&mut [String]) + 'static {
        Operation {
            check: Box::new(check),
            act: Box::new(act),
        }
    }

    /// Run the action on `row` if the check holds. Returns whether the action ran.
    pub fn apply(&self, row: &mut [String]) -> bool {
        if (self.check)(row) {
            (self.act)(row);
            true
        } else {
            false
        }
    }
}

/// Append to `row` the result of `op` over the cells at `a` and `b`.
pub fn append_derived<F>(row: &mut Vec<String>, a: usize, b: usize, op: F)
    where F: Fn(&str, &str) -> String {
    let derived = op(row[a].as_str(), row[b].as_str());
    row.push(derived);
}
