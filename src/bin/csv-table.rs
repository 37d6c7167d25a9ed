use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use csv_table::reader::TableReader;
use csv_table::sort_key::NamedSortKey;

fn main() {
    let matches = build_cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("csv-table: {:#}", e);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("csv-table")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort, deduplicate and print a CSV file")
        .arg(Arg::new("csv")
            .long("csv")
            .help("CSV file to be processed, the first record holds the titles")
            .value_name("FILE")
            .required(true))
        .arg(Arg::new("sort")
            .short('s')
            .long("sort")
            .help("Sort by a column title, optionally followed by :asc or :desc. Repeat for more keys")
            .value_name("TITLE[:ORDER]")
            .action(ArgAction::Append))
        .arg(Arg::new("unique")
            .short('u')
            .long("unique")
            .help("Remove duplicate rows")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("delimiter")
            .short('d')
            .long("delimiter")
            .help("Field delimiter of the input")
            .value_name("CHAR")
            .default_value(","))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write the result to FILE instead of stdout")
            .value_name("FILE"))
        .arg(Arg::new("print")
            .short('p')
            .long("print")
            .help("Print titles and numbered rows instead of CSV")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Log progress to stderr")
            .action(ArgAction::SetTrue))
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let level = if matches.get_flag("verbose") { LevelFilter::Info } else { LevelFilter::Warn };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .with_context(|| "initialize logger")?;

    let input = PathBuf::from(
        matches.get_one::<String>("csv")
            .ok_or_else(|| anyhow!("missing --csv"))?
    );
    let delimiter = parse_delimiter(
        matches.get_one::<String>("delimiter").map(|s| s.as_str()).unwrap_or(",")
    )?;

    let keys = matches.get_many::<String>("sort")
        .unwrap_or_default()
        .map(|s| NamedSortKey::from_str(s))
        .collect::<Result<Vec<NamedSortKey>, _>>()?;

    let mut table = TableReader::new()
        .with_delimiter(delimiter)
        .read(&input)
        .with_context(|| format!("read {}", input.to_string_lossy()))?;

    if !keys.is_empty() {
        table.sort_by_names(&keys)?;
    }

    if matches.get_flag("unique") {
        table = table.unique();
    }

    let mut writer: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path))?
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    if matches.get_flag("print") {
        table.print(&mut writer)?;
    } else {
        table.write(&mut writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_delimiter(s: &str) -> Result<u8, anyhow::Error> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 => Ok(s.as_bytes()[0]),
        _ => Err(anyhow!("delimiter must be a single byte, got '{}'", s)),
    }
}
