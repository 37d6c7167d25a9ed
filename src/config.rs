use regex::Regex;

#[derive(Clone, Debug)]
pub(crate) struct Config {
    delimiter: u8,
    has_titles: bool,
    trim: bool,
    comment: Option<u8>,
    ignore_empty: bool,
    ignore_rows: Option<Regex>,
}

impl Config {
    pub(crate) fn new(
        delimiter: u8,
        has_titles: bool,
        trim: bool,
        comment: Option<u8>,
        ignore_empty: bool,
        ignore_rows: Option<Regex>,
    ) -> Config {
        Config {
            delimiter,
            has_titles,
            trim,
            comment,
            ignore_empty,
            ignore_rows,
        }
    }

    pub(crate) fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub(crate) fn has_titles(&self) -> bool {
        self.has_titles
    }

    pub(crate) fn trim(&self) -> bool {
        self.trim
    }

    pub(crate) fn comment(&self) -> Option<u8> {
        self.comment
    }

    pub(crate) fn ignore_empty(&self) -> bool {
        self.ignore_empty
    }

    pub(crate) fn ignore_rows(&self) -> &Option<Regex> {
        &self.ignore_rows
    }
}
