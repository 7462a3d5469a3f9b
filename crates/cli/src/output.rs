//! Record output.
//!
//! Only records go to stdout; everything else is written to stderr so the
//! output can be piped.

use std::io::{self, Write};

/// Green, bold `>` followed by a reset.
const MARKER: &str = "\x1b[1;32m>\x1b[0m";

/// One output line for a record's raw text, without the newline.
pub fn format_record(raw: &str) -> String {
    format!("{} {} ", MARKER, raw)
}

/// Write one record line and flush.
pub fn write_record<W: Write>(out: &mut W, raw: &str) -> io::Result<()> {
    writeln!(out, "{}", format_record(raw))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record("1 line"),
            "\x1b[1;32m>\x1b[0m 1 line "
        );
    }

    #[test]
    fn test_write_record_appends_newline() {
        let mut buf = Vec::new();
        write_record(&mut buf, "a").unwrap();
        write_record(&mut buf, "b").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("b \n"));
    }

    #[test]
    fn test_multiline_raw_is_kept_verbatim() {
        assert!(format_record("first\nsecond").contains("first\nsecond"));
    }
}
