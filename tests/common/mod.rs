use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use data_encoding::HEXLOWER;

pub const BASIC_CONTENT: &str = "first_name,last_name,username
\"Rob\",\"Pike\",rob
Ken,Thompson,ken
\"Robert\",\"Griesemer\",\"gri\"
";

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    } else {
        println!("Results directory exists at {:?}", results_dir_path);
    }
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

#[allow(dead_code)]
pub fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[allow(dead_code)]
pub fn basic_rows() -> Vec<Vec<String>> {
    rows(&[
        &["first_name", "last_name", "username"],
        &["Rob", "Pike", "rob"],
        &["Ken", "Thompson", "ken"],
        &["Robert", "Griesemer", "gri"],
    ])
}

#[allow(dead_code)]
pub fn numbers_as_strings() -> Vec<Vec<String>> {
    rows(&[
        &["gri", "Go", "100"],
        &["ken", "C", "150"],
        &["glenda", "Go", "200"],
        &["rsc", "Go", "200"],
        &["r", "Go", "100"],
        &["ken", "Go", "200"],
        &["dmr", "C", "100"],
        &["r", "C", "150"],
        &["gri", "Smalltalk", "80"],
    ])
}

#[allow(dead_code)]
pub fn languages() -> Vec<Vec<String>> {
    rows(&[
        &["C", "L1", "1"],
        &["C", "L2", "2"],
        &["C", "L1", "3"],
        &["C", "L2", "4"],
        &["C", "L1", "5"],
        &["JS", "L2", "6"],
        &["JS", "L1", "7"],
        &["JS", "L2", "8"],
        &["JS", "L1", "9"],
        &["Go", "L1", "10"],
        &["Go", "L1", "11"],
        &["Smalltalk", "L1", "12"],
    ])
}
