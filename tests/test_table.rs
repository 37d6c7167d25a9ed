use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use regex::Regex;

use csv_table::error::{TableError, TitleNotFound};
use csv_table::operation::{Operation, Predicate};
use csv_table::reader::TableReader;
use csv_table::sort_key::{NamedSortKey, SortKey};
use csv_table::table::Table;
use csv_table::title::Title;

mod common;

fn scores_table() -> Table {
    Table::new(Title::new(&["user", "sub", "scores"]), common::numbers_as_strings())
}

#[test]
fn test_read() -> Result<(), anyhow::Error> {
    let table = TableReader::new().read_from(common::BASIC_CONTENT.as_bytes())?;
    assert_eq!(table.size(), (3, 3));
    assert_eq!(table.titles().names(), vec!["first_name", "last_name", "username"]);
    assert_eq!(table.rows(), &common::basic_rows()[1..]);
    Ok(())
}

#[test]
fn test_read_file() -> Result<(), anyhow::Error> {
    let table = TableReader::new().read(&PathBuf::from("./tests/fixtures/scores.csv"))?;
    assert_eq!(table, scores_table());
    Ok(())
}

#[test]
fn test_read_options() -> Result<(), anyhow::Error> {
    let data = "# scores\ngri\t Go \t100\n\t\t\nken\tC\t150\nskip\tme\t0\n";
    let table = TableReader::new()
        .with_delimiter(b'\t')
        .with_titles(false)
        .with_trim(true)
        .with_comment(b'#')
        .with_ignore_empty()
        .with_ignore_rows(Regex::new("^skip")?)
        .read_from(data.as_bytes())?;
    assert!(table.titles().is_empty());
    assert_eq!(table.rows(), common::rows(&[&["gri", "Go", "100"], &["ken", "C", "150"]]).as_slice());
    Ok(())
}

#[test]
fn test_read_empty_input() {
    let result = TableReader::new().read_from("".as_bytes());
    assert!(matches!(result, Err(TableError::EmptyInput(_))));

    let table = TableReader::new().with_titles(false).read_from("".as_bytes()).unwrap();
    assert_eq!(table.size(), (0, 0));
}

#[test]
fn test_read_ragged_records_fails() {
    let result = TableReader::new().read_from("a,b\n1,2\n3\n".as_bytes());
    match result {
        Err(e @ TableError::Csv(_)) => {
            let message = e.to_string();
            assert_eq!(message.matches("CSV error").count(), 1, "{}", message);
        }
        other => panic!("expected a CSV error, got {:?}", other),
    }
}

#[test]
fn test_read_repeated_titles_fails() {
    let result = TableReader::new().read_from("a,a,b\n1,2,3\n".as_bytes());
    assert!(matches!(result, Err(TableError::DuplicateTitle(name)) if name == "a"));

    // without titles the same record is an ordinary row
    let table = TableReader::new().with_titles(false).read_from("a,a,b\n1,2,3\n".as_bytes()).unwrap();
    assert_eq!(table.size(), (3, 2));
}

#[test]
fn test_from_records() -> Result<(), anyhow::Error> {
    let table = Table::from_records(common::basic_rows())?;
    assert_eq!(table.titles().get("username"), Some(2));
    assert_eq!(table.size(), (3, 3));
    assert_eq!(Table::from_records(vec![])?.size(), (0, 0));

    let repeated = Table::from_records(common::rows(&[&["a", "b", "a"], &["1", "2", "3"]]));
    assert!(matches!(repeated, Err(TableError::DuplicateTitle(name)) if name == "a"));
    Ok(())
}

#[test]
fn test_print() -> Result<(), anyhow::Error> {
    let table = Table::from_records(common::basic_rows())?;
    let mut output = Vec::new();
    table.print(&mut output)?;
    let expected = "Titles:
first_name, last_name, username
Rows:
1 Rob, Pike, rob
2 Ken, Thompson, ken
3 Robert, Griesemer, gri

";
    assert_eq!(String::from_utf8(output)?, expected);
    assert_eq!(table.to_string(), expected);
    Ok(())
}

#[test]
fn test_swap() -> Result<(), anyhow::Error> {
    let mut table = scores_table();
    table.swap("user", "scores")?;
    assert_eq!(table.titles().names(), vec!["scores", "sub", "user"]);
    assert_eq!(table.rows()[0], vec!["100", "Go", "gri"]);

    // the names still refer to their values
    let users = table.extract(&["user"])?;
    assert_eq!(users[0], vec!["gri"]);
    Ok(())
}

#[test]
fn test_swap_not_found() {
    let mut table = Table::without_titles(common::numbers_as_strings());
    let result = table.swap("first_name", "last_name");
    match result {
        Err(TableError::TitleNotFound(e)) => assert_eq!(e, TitleNotFound("first_name".to_string())),
        other => panic!("expected title not found, got {:?}", other),
    }
    assert_eq!(table.rows(), common::numbers_as_strings().as_slice());
}

#[test]
fn test_extract_and_convert() -> Result<(), anyhow::Error> {
    let table = scores_table();
    let extracted = table.extract(&["scores", "user"])?;
    assert_eq!(extracted.len(), 9);
    assert_eq!(extracted[0], vec!["100", "gri"]);

    let converted = table.convert(&["scores", "user"])?;
    assert_eq!(converted.titles().names(), vec!["scores", "user"]);
    assert_eq!(converted.size(), (2, 9));
    assert_eq!(converted.rows()[8], vec!["80", "gri"]);

    assert!(matches!(table.convert(&["nope"]), Err(TableError::TitleNotFound(_))));
    assert!(matches!(table.convert(&["user", "user"]), Err(TableError::DuplicateTitle(name)) if name == "user"));
    Ok(())
}

#[test]
fn test_split() -> Result<(), anyhow::Error> {
    let titles = Title::new(&["language", "level", "value"]);
    let mut table = Table::new(titles.clone(), common::languages());

    let names = ["level", "language"];
    let indexes = titles.indexes(&names)?;
    table.sort(&[SortKey::desc(indexes[0]), SortKey::asc(indexes[1])]);

    let views = table.split(&names)?;
    assert_eq!(views.len(), 6);
    let sizes: Vec<usize> = views.iter().map(|view| view.size().1).collect();
    assert_eq!(sizes, vec![2, 2, 3, 2, 2, 1]);
    assert_eq!(views[0].rows()[0], vec!["C", "L2", "2"]);
    assert_eq!(views[5].rows()[0], vec!["Smalltalk", "L1", "12"]);
    assert_eq!(views[5].titles(), &titles);
    Ok(())
}

#[test]
fn test_split_sections_by_score() -> Result<(), anyhow::Error> {
    let mut table = scores_table();
    table.sort_by_names(&[NamedSortKey::asc("scores"), NamedSortKey::asc("user")])?;

    let sections: Vec<(String, Vec<String>)> = table.split(&["scores"])?
        .iter()
        .map(|view| (
            view.rows()[0][2].clone(),
            view.rows().iter().map(|row| row[0].clone()).collect(),
        ))
        .collect();
    assert_eq!(sections, vec![
        ("80".to_string(), vec!["gri".to_string()]),
        ("100".to_string(), vec!["dmr".to_string(), "gri".to_string(), "r".to_string()]),
        ("150".to_string(), vec!["ken".to_string(), "r".to_string()]),
        ("200".to_string(), vec!["glenda".to_string(), "ken".to_string(), "rsc".to_string()]),
    ]);
    Ok(())
}

#[test]
fn test_split_empty_and_missing() {
    let table = Table::new(Title::new(&["a"]), vec![]);
    assert!(table.split(&["a"]).unwrap().is_empty());
    assert!(matches!(table.split(&["b"]), Err(TableError::TitleNotFound(_))));
}

#[test]
fn test_view_to_table_is_independent() -> Result<(), anyhow::Error> {
    let table = scores_table();
    let mut copy = table.split(&["user"])?[0].to_table();
    copy.rows_mut()[0][0] = "changed".to_string();
    assert_eq!(table.rows()[0][0], "gri");
    Ok(())
}

#[test]
fn test_write() -> Result<(), anyhow::Error> {
    let table = Table::without_titles(common::numbers_as_strings());
    let expected = "gri,Go,100
ken,C,150
glenda,Go,200
rsc,Go,200
r,Go,100
ken,Go,200
dmr,C,100
r,C,150
gri,Smalltalk,80
";
    let mut output = Vec::new();
    table.write(&mut output)?;
    assert_eq!(String::from_utf8(output)?, expected);
    Ok(())
}

#[test]
fn test_write_with_titles_and_quotes() -> Result<(), anyhow::Error> {
    let table = Table::new(
        Title::new(&["name", "note"]),
        common::rows(&[&["Rob", "says \"hi\""], &["Ken", "a,b"]]),
    );
    let mut output = Vec::new();
    table.write(&mut output)?;
    assert_eq!(String::from_utf8(output)?, "name,note\nRob,\"says \"\"hi\"\"\"\nKen,\"a,b\"\n");
    Ok(())
}

#[test]
fn test_save_and_read_back() -> Result<(), anyhow::Error> {
    common::setup();
    let path = common::temp_file_name("./target/results/");
    let mut table = scores_table();
    table.sort_by_names(&[NamedSortKey::desc("scores"), NamedSortKey::asc("user")])?;
    table.save(&path)?;

    let loaded = TableReader::new().read(&path)?;
    assert_eq!(loaded, table);
    fs::remove_file(path)?;
    Ok(())
}

#[test]
fn test_save_replaces_existing_file() -> Result<(), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("out.csv");
    fs::write(&path, "old content that is longer than the new one\n")?;

    let table = Table::new(Title::new(&["a"]), common::rows(&[&["1"]]));
    table.save(&path)?;
    assert_eq!(fs::read_to_string(&path)?, "a\n1\n");
    Ok(())
}

#[test]
fn test_filter() {
    let mut table = Table::without_titles(common::languages());

    let c_l2: Predicate = Box::new(|row: &[String]| row[0] == "C" && row[1] == "L2");
    let smalltalk: Predicate = Box::new(|row: &[String]| row[0] == "Smalltalk");
    table.filter(&[c_l2, smalltalk]);

    assert_eq!(table.size(), (3, 3));
    let values: Vec<&str> = table.rows().iter().map(|row| row[2].as_str()).collect();
    assert_eq!(values, vec!["2", "4", "12"]);

    table.filter(&[]);
    assert_eq!(table.size(), (0, 0));
}

#[test]
fn test_unique() {
    let mut rows = common::rows(&[
        &["C", "L1", "1"],
        &["JS", "L2", "6"],
        &["Go", "L1", "10"],
        &["Smalltalk", "L1", "12"],
    ]);
    let mut repeated = rows.clone();
    repeated.append(&mut rows.clone());
    repeated.append(&mut rows);
    let table = Table::without_titles(repeated);

    let mut unique = table.unique();
    assert_eq!(unique.size(), (3, 4));
    assert_eq!(unique.rows(), &table.rows()[..4]);

    unique.rows_mut()[0][0] = "corrupted".to_string();
    assert_eq!(table.rows()[0][0], "C");
}

#[test]
fn test_unique_does_not_merge_shifted_cells() {
    let table = Table::without_titles(common::rows(&[&["ab", "c"], &["a", "bc"]]));
    assert_eq!(table.unique().size(), (2, 2));
}

#[test]
fn test_clone() -> Result<(), anyhow::Error> {
    let source = Table::from_records(common::basic_rows())?;
    let mut copy = source.clone();
    assert_eq!(copy, source);

    for row in copy.rows_mut() {
        row[0] = String::new();
    }
    assert_ne!(copy, source);
    assert_eq!(source.rows()[0][0], "Rob");
    Ok(())
}

#[test]
fn test_replace() {
    let mut table = scores_table();

    // those suspects cannot score above 100, mark them when they do
    let suspects_with_high_score = |row: &[String]| {
        ["glenda", "ken", "baz"].contains(&row[0].as_str())
            && row[2].parse::<i64>().map(|score| score > 100).unwrap_or(false)
    };
    let mark = |row: &mut [String]| row[2] = "Got you".to_string();
    table.replace(&[Operation::new(suspects_with_high_score, mark)]);

    let marked: Predicate = Box::new(|row: &[String]| row[2] == "Got you");
    table.filter(&[marked]);
    let users: Vec<&str> = table.rows().iter().map(|row| row[0].as_str()).collect();
    assert_eq!(users, vec!["ken", "glenda", "ken"]);
}

#[test]
fn test_replace_on_empty_table() {
    let mut table = Table::default();
    table.replace(&[Operation::new(|_| true, |row| row[0] = "x".to_string())]);
    assert_eq!(table.size(), (0, 0));
}

#[test]
fn test_derive() -> Result<(), anyhow::Error> {
    let mut table = TableReader::new().read_from(common::BASIC_CONTENT.as_bytes())?;
    let ban = |first: &str, last: &str| format!("{} {} has been banned", first, last);
    table.derive(0, 1, "Message", ban)?;

    assert_eq!(table.titles().get("Message"), Some(3));
    for row in table.rows() {
        assert_eq!(row[3], ban(row[0].as_str(), row[1].as_str()));
    }

    let again = table.derive(0, 1, "Message", ban);
    assert!(matches!(again, Err(TableError::DuplicateTitle(name)) if name == "Message"));
    assert_eq!(table.size(), (4, 3));

    let mut output = Vec::new();
    table.write(&mut output)?;
    let written = String::from_utf8(output)?;
    assert_eq!(written.lines().next(), Some("first_name,last_name,username,Message"));
    Ok(())
}

#[test]
fn test_derive_without_titles_fails() -> Result<(), anyhow::Error> {
    let mut table = Table::without_titles(common::rows(&[&["1", "2", "x"], &["3", "4", "y"]]));
    let result = table.derive(0, 1, "sum", |a, b| format!("{}{}", a, b));
    assert!(matches!(result, Err(TableError::ColumnMismatch { titles: 0, columns: 3 })));
    assert_eq!(table.titles().get("sum"), None);
    assert_eq!(table.size(), (3, 2));

    let mut output = Vec::new();
    table.write(&mut output)?;
    assert_eq!(String::from_utf8(output)?, "1,2,x\n3,4,y\n");
    Ok(())
}

#[test]
fn test_derive_on_table_without_rows() -> Result<(), anyhow::Error> {
    let mut table = Table::new(Title::new(&["a", "b"]), vec![]);
    table.derive(0, 1, "c", |a, b| format!("{}{}", a, b))?;
    assert_eq!(table.titles().names(), vec!["a", "b", "c"]);
    Ok(())
}

#[test]
fn test_records() -> Result<(), anyhow::Error> {
    let table = Table::from_records(common::basic_rows())?;
    let records = table.records();
    assert_eq!(records.len(), 3);
    let expected: HashMap<String, String> = [
        ("first_name", "Ken"),
        ("last_name", "Thompson"),
        ("username", "ken"),
    ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(records[1], expected);
    Ok(())
}

#[test]
fn test_is_sorted() -> Result<(), anyhow::Error> {
    let mut table = scores_table();
    let keys = table.titles().sort_keys(&[NamedSortKey::asc("scores")])?;
    assert!(!table.is_sorted(&keys));
    table.sort(&keys);
    assert!(table.is_sorted(&keys));
    Ok(())
}

#[test]
fn test_sort_by_missing_name_leaves_rows() {
    let mut table = scores_table();
    let result = table.sort_by_names(&[NamedSortKey::asc("user"), NamedSortKey::asc("missing")]);
    assert!(matches!(result, Err(TableError::TitleNotFound(TitleNotFound(name))) if name == "missing"));
    assert_eq!(table.rows(), common::numbers_as_strings().as_slice());
}
