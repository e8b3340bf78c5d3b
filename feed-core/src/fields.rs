use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::Path;

/// Приводит одно сырое имя поля к каноническому виду:
/// отрезает `#`-комментарий, trim, ASCII lowercase.
/// Возвращает `None`, если после этого ничего не осталось.
fn normalize_field(raw: &str) -> Option<String> {
    let name = raw.split('#').next().unwrap_or_default().trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_ascii_lowercase())
}

/// Общий сборщик: нормализует каждый кусок и отдаёт
/// отсортированный список без дубликатов.
fn collect_fields<'a>(parts: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<String> = parts.into_iter().filter_map(normalize_field).collect();
    set.into_iter().collect()
}

/// Список полей из CSV-строки вида "ibm, Apple, ,GOOGLE".
/// Пустые элементы и `#`-комментарии игнорируются,
/// результат отсортирован и уникален.
pub fn parse_fields_csv(raw: &str) -> Vec<String> {
    collect_fields(raw.split(','))
}

/// Список полей из текста, по одному на строку.
/// Правила те же, что у [`parse_fields_csv`]: trim, lowercase,
/// `#` начинает комментарий (строчный или inline), дубликаты схлопываются.
pub fn read_fields<R: io::Read>(reader: R) -> io::Result<Vec<String>> {
    let text = io::read_to_string(reader)?;
    Ok(collect_fields(text.lines()))
}

/// Список полей из файла.
pub fn read_fields_from_path(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    read_fields(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn normalize_field_vectors() {
        let cases = [
            ("ibm", Some("ibm")),
            ("IBM", Some("ibm")),
            ("  Apple  ", Some("apple")),
            ("google # основное поле", Some("google")),
            ("google#без пробела", Some("google")),
            ("# комментарий целиком", None),
            ("   # комментарий после отступа", None),
            ("#", None),
            ("   ", None),
            ("", None),
        ];

        for (raw, want) in cases {
            assert_eq!(normalize_field(raw).as_deref(), want, "raw: {raw:?}");
        }
    }

    #[test]
    fn csv_sorts_lowercases_and_drops_duplicates() {
        let got = parse_fields_csv("IBM, apple, ,Google ,ibm,, APPLE ");
        assert_eq!(got, ["apple", "google", "ibm"]);
    }

    #[test]
    fn csv_of_separators_only_is_empty() {
        assert!(parse_fields_csv("").is_empty());
        assert!(parse_fields_csv(" , ,  ,").is_empty());
        assert!(parse_fields_csv("#a, #b").is_empty());
    }

    #[test]
    fn reader_merges_duplicates_across_lines() {
        let input = "ibm\nAPPLE\n# шапка\n  google # inline\nibm\n\n";
        let got = read_fields(Cursor::new(input)).unwrap();
        assert_eq!(got, ["apple", "google", "ibm"]);
    }

    #[test]
    fn reader_of_blank_and_comment_lines_is_empty() {
        let got = read_fields(Cursor::new("\n   \n# one\n   # two\n#\n")).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn file_reader_applies_same_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.txt");
        std::fs::write(&path, "IBM\napple # наш\nibm\n").unwrap();

        let got = read_fields_from_path(&path).unwrap();
        assert_eq!(got, ["apple", "ibm"]);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = read_fields_from_path("/no/such/fields.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
