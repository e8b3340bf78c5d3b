use std::io;
use std::io::Cursor;
use std::path::PathBuf;

const DEFAULT_FIELDS: &str = include_str!("../assets/fields.txt");

/// Источник списка полей: файл > inline-строка > встроенный дефолт.
pub(crate) fn load_fields(path: Option<PathBuf>, csv: Option<&str>) -> io::Result<Vec<String>> {
    match (path, csv) {
        (Some(p), _) => feed_core::fields::read_fields_from_path(p),
        (None, Some(raw)) => Ok(feed_core::fields::parse_fields_csv(raw)),
        (None, None) => feed_core::fields::read_fields(Cursor::new(DEFAULT_FIELDS)),
    }
}
