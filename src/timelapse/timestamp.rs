use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{cmp::Ordering, fmt, path::Path};

/// First "M-D-YYYY, HH.MM.SS" (or "HH:MM:SS") in a file name.
/// Anything after it, such as "GMT+1 - ..." ranges, is ignored.
/// Digits and whitespace are ASCII only.
static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})-([0-9]{1,2})-([0-9]{4}),[ \t\n\f\r]+([0-9]{2})[.:]([0-9]{2})[.:]([0-9]{2})")
        .unwrap()
});

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Chronological sort key of a video file, tagged with where it came from.
#[derive(Debug, Clone, Copy)]
pub enum OrderingKey {
    Filename(NaiveDateTime),
    Modified(NaiveDateTime),
    Unknown,
}

impl OrderingKey {
    pub fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            OrderingKey::Filename(at) | OrderingKey::Modified(at) => Some(*at),
            OrderingKey::Unknown => None,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            OrderingKey::Filename(_) => "filename",
            OrderingKey::Modified(_) => "mtime",
            OrderingKey::Unknown => "unknown",
        }
    }
}

// Keys compare by instant only. Unknown sorts after every real instant.
impl Ord for OrderingKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for OrderingKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OrderingKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderingKey {}

impl fmt::Display for OrderingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instant() {
            Some(at) => write!(f, "{}", at.format(FORMAT)),
            None => write!(f, "---"),
        }
    }
}

/// Parses the date-time embedded in a file name. No timezone is applied.
pub fn parse_file_name(file_name: &str) -> Option<NaiveDateTime> {
    let caps = DATE_TIME_RE.captures(file_name)?;
    let num = |i: usize| caps[i].parse::<u32>().ok();
    let year = caps[3].parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, num(1)?, num(2)?)?.and_hms_opt(num(4)?, num(5)?, num(6)?)
}

fn modified_at(path: &Path) -> Option<NaiveDateTime> {
    let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
    Some(DateTime::<Local>::from(modified).naive_local())
}

/// Filename first, then modification time, then `Unknown`.
pub fn extract(path: &Path) -> OrderingKey {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    parse_file_name(&file_name)
        .map(OrderingKey::Filename)
        .or_else(|| modified_at(path).map(OrderingKey::Modified))
        .unwrap_or(OrderingKey::Unknown)
}

#[cfg(test)]
mod tests {
    use super::{extract, parse_file_name, OrderingKey};
    use chrono::{Datelike, NaiveDate, NaiveDateTime};
    use std::path::Path;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_protect_export_name() {
        let name = "G5 Flex 12-30-2025, 21.00.00 GMT+1 - 12-31-2025, 03.00.00 GMT+1.mp4";
        assert_eq!(parse_file_name(name), Some(at(2025, 12, 30, 21, 0, 0)));

        let name = "G5 Flex 1-1-2026, 03.00.00 GMT+1 - 1-1-2026, 09.00.00 GMT+1.mp4";
        assert_eq!(parse_file_name(name), Some(at(2026, 1, 1, 3, 0, 0)));
    }

    #[test]
    fn test_separators_parse_identically() {
        let dots = parse_file_name("cam 3-7-2024, 08.15.42.mp4");
        let colons = parse_file_name("cam 3-7-2024, 08:15:42.mp4");
        let mixed = parse_file_name("cam 3-7-2024, 08.15:42.mp4");
        assert_eq!(dots, Some(at(2024, 3, 7, 8, 15, 42)));
        assert_eq!(dots, colons);
        assert_eq!(dots, mixed);
    }

    #[test]
    fn test_calendar_validation() {
        assert_eq!(parse_file_name("cam 2-29-2024, 00.00.00.mp4"), Some(at(2024, 2, 29, 0, 0, 0)));
        assert_eq!(parse_file_name("cam 2-29-2023, 00.00.00.mp4"), None);
        assert_eq!(parse_file_name("cam 13-1-2024, 00.00.00.mp4"), None);
        assert_eq!(parse_file_name("cam 4-31-2024, 00.00.00.mp4"), None);
        assert_eq!(parse_file_name("cam 0-10-2024, 00.00.00.mp4"), None);
        assert_eq!(parse_file_name("cam 1-1-2024, 24.00.00.mp4"), None);
        assert_eq!(parse_file_name("cam 1-1-2024, 10.60.00.mp4"), None);

        for name in [
            "cam 1-31-2024, 10.00.00.mp4",
            "cam 12-1-1999, 23:59:59.mp4",
            "cam 09-09-2030, 00.00.01.mp4",
        ] {
            let parsed = parse_file_name(name).unwrap();
            assert!((1..=12).contains(&parsed.month()));
        }
    }

    #[test]
    fn test_pattern_mismatch() {
        assert_eq!(parse_file_name("cam 2024-01-01 10.00.00.mp4"), None);
        assert_eq!(parse_file_name("cam 1-1-24, 10.00.00.mp4"), None);
        assert_eq!(parse_file_name("cam 1-1-2024,10.00.00.mp4"), None);
        assert_eq!(parse_file_name("cam 1-1-2024, 1.00.00.mp4"), None);
        assert_eq!(parse_file_name("no timestamp here.mp4"), None);
    }

    #[test]
    fn test_only_ascii_digits_and_spaces_match() {
        let name = "cam \u{661}-\u{662}-\u{662}\u{660}\u{662}\u{664}, \u{661}\u{660}.\u{660}\u{660}.\u{660}\u{660} 1-2-2024, 10.00.00.mp4";
        assert_eq!(parse_file_name(name), Some(at(2024, 1, 2, 10, 0, 0)));

        assert_eq!(parse_file_name("cam 1-2-2024,\u{a0}10.00.00.mp4"), None);
        assert_eq!(parse_file_name("cam 1-2-2024,\t10.00.00.mp4"), Some(at(2024, 1, 2, 10, 0, 0)));
    }

    #[test]
    fn test_falls_back_to_modified_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cam without date.mp4");
        std::fs::write(&path, b"").unwrap();
        assert!(matches!(extract(&path), OrderingKey::Modified(_)));

        // unparseable calendar date also falls back
        let path = dir.path().join("cam 2-30-2024, 10.00.00.mp4");
        std::fs::write(&path, b"").unwrap();
        assert!(matches!(extract(&path), OrderingKey::Modified(_)));
    }

    #[test]
    fn test_filename_wins_over_modified_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cam 5-6-2021, 07.08.09 GMT+2.mp4");
        std::fs::write(&path, b"").unwrap();
        assert_eq!(extract(&path), OrderingKey::Filename(at(2021, 5, 6, 7, 8, 9)));
    }

    #[test]
    fn test_unknown_when_nothing_available() {
        let key = extract(Path::new("/definitely/missing/cam.mp4"));
        assert!(matches!(key, OrderingKey::Unknown));
    }

    #[test]
    fn test_unknown_sorts_last() {
        let early = OrderingKey::Filename(at(2000, 1, 1, 0, 0, 0));
        let late = OrderingKey::Modified(at(2099, 1, 1, 0, 0, 0));
        assert!(early < late);
        assert!(late < OrderingKey::Unknown);
        assert_eq!(OrderingKey::Unknown, OrderingKey::Unknown);
        assert_eq!(
            OrderingKey::Filename(at(2020, 1, 1, 0, 0, 0)),
            OrderingKey::Modified(at(2020, 1, 1, 0, 0, 0))
        );
    }
}
