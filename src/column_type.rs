/// How the values of a column are compared during one sort
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// No integer pair has been seen on this column yet
    Unclassified,
    /// Signed 64 bit integer comparison
    Integer,
    /// Plain byte-wise string comparison
    Text,
}
