use data_encoding::HEXLOWER;
use sha2::{Digest, Sha256};

/// SHA-256 digest of a row as lowercase hex.
///
/// Each cell is prefixed by its length, so rows that only differ in where one cell ends and
/// the next begins get different digests.
///
/// # Examples
/// ```
/// use csv_table::digest::row_digest;
/// let a = row_digest(&["ab".to_string(), "c".to_string()]);
/// let b = row_digest(&["a".to_string(), "bc".to_string()]);
/// assert_ne!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn row_digest<S: AsRef<str>>(row: &[S]) -> String {
    let mut hasher = Sha256::new();
    for cell in row {
        let cell = cell.as_ref().as_bytes();
        hasher.update((cell.len() as u64).to_le_bytes());
        hasher.update(cell);
    }
    HEXLOWER.encode(&hasher.finalize())
}
