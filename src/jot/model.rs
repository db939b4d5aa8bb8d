use chrono::{DateTime, Local};

/// Maximum length of a derived summary, in characters.
pub const SUMMARY_MAX_CHARS: usize = 50;

/// Extension every note file carries. Anything else in the notes directory
/// is not a note and is ignored.
pub const NOTE_EXT: &str = ".txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub filename: String,
    pub content: String,
}

impl Note {
    pub fn new(filename: String, content: String) -> Self {
        Self { filename, content }
    }
}

/// One row of a listing: the stable handle plus display-only text.
///
/// `filename` is the note's identity; `summary` is lossy (truncated,
/// whitespace-collapsed) and must never be used as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub filename: String,
    pub summary: String,
}

pub fn is_note_filename(name: &str) -> bool {
    name.ends_with(NOTE_EXT)
}

/// Derives the display summary for a note: first two lines joined by a
/// space, whitespace runs collapsed to single spaces, trimmed, and cut to
/// [`SUMMARY_MAX_CHARS`] characters. Lines past the second never contribute.
pub fn summarize(content: &str) -> String {
    let mut lines = content.lines();
    let first = lines.next().unwrap_or("");
    let second = lines.next().unwrap_or("");

    let collapsed = format!("{} {}", first, second)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let cut: String = collapsed.chars().take(SUMMARY_MAX_CHARS).collect();
    // The cut can land right after a space; trim so the result is stable
    // under re-summarizing.
    cut.trim_end().to_string()
}

/// Filename for a note created at `timestamp`: `note_YYYYMMDD_HHMMSS.txt`.
pub fn filename_for(timestamp: DateTime<Local>) -> String {
    format!("note_{}{}", timestamp.format("%Y%m%d_%H%M%S"), NOTE_EXT)
}

/// Picks a creation filename that is not already taken. Timestamps are
/// second-granular, so same-second creations get a numeric suffix rather
/// than overwriting the earlier note.
pub fn unique_filename(timestamp: DateTime<Local>, taken: impl Fn(&str) -> bool) -> String {
    let base = filename_for(timestamp);
    if !taken(&base) {
        return base;
    }

    let stem = base.strip_suffix(NOTE_EXT).unwrap_or(&base);
    let mut n = 2u32;
    loop {
        let candidate = format!("{}_{}{}", stem, n, NOTE_EXT);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn summary_joins_first_two_lines() {
        assert_eq!(
            summarize("Hello world\nSecond line\nThird line"),
            "Hello world Second line"
        );
    }

    #[test]
    fn summary_of_single_line_has_no_trailing_space() {
        assert_eq!(summarize("OnlyOneLine"), "OnlyOneLine");
    }

    #[test]
    fn summary_collapses_whitespace_runs() {
        assert_eq!(summarize("a\t\t b  c\nd   e"), "a b c d e");
        assert_eq!(summarize("  leading\n  indented  "), "leading indented");
    }

    #[test]
    fn summary_of_blank_content_is_empty() {
        assert_eq!(summarize(""), "");
        assert_eq!(summarize("\n\n"), "");
        assert_eq!(summarize("   \n \t "), "");
    }

    #[test]
    fn summary_truncates_to_fifty_chars() {
        let long = "x".repeat(80);
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS);
        assert_eq!(summary, "x".repeat(50));
    }

    #[test]
    fn summary_is_idempotent() {
        // 49 chars then a space then more, so the cut lands on a space
        let cut_on_space = format!("{} tail of the note", "y".repeat(49));
        for content in [
            "Hello world\nSecond line\nThird line",
            "OnlyOneLine",
            "  spaced   out  \n  text ",
            cut_on_space.as_str(),
        ] {
            let once = summarize(content);
            assert_eq!(summarize(&once), once);
        }
    }

    #[test]
    fn filename_uses_second_granularity_timestamp() {
        let ts = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(filename_for(ts), "note_20260314_092653.txt");
    }

    #[test]
    fn unique_filename_suffixes_on_collision() {
        let ts = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

        let none_taken = unique_filename(ts, |_| false);
        assert_eq!(none_taken, "note_20260314_092653.txt");

        let one_taken = unique_filename(ts, |name| name == "note_20260314_092653.txt");
        assert_eq!(one_taken, "note_20260314_092653_2.txt");

        let two_taken = unique_filename(ts, |name| {
            name == "note_20260314_092653.txt" || name == "note_20260314_092653_2.txt"
        });
        assert_eq!(two_taken, "note_20260314_092653_3.txt");
    }

    #[test]
    fn suffixed_names_are_still_notes() {
        assert!(is_note_filename("note_20260314_092653_2.txt"));
        assert!(!is_note_filename("data.json"));
    }
}
