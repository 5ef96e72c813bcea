//! LaTeX output formatting.
//!
//! Each record becomes one `\item` of an `enumerate` list. An entry has two
//! blocks, each ending in exactly one newline:
//!
//! - author block: title, named authors, `et al.`, collaboration
//! - journal block: venue and year
//!
//! followed by a blank line. Field values are written verbatim.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::latex;
use crate::error::{PubsError, Result};
use crate::models::{InitialStyle, PublicationRecord};

/// A single-letter initial followed by a period and a space.
static ANCHORED_INITIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\p{L})\. ").expect("initial pattern is valid"));

/// Tie the periods in one author name to the following name part.
#[must_use]
pub fn tie_initials(name: &str, style: InitialStyle) -> Cow<'_, str> {
    match style {
        InitialStyle::Literal => {
            if name.contains(latex::INITIAL_GAP) {
                Cow::Owned(name.replace(latex::INITIAL_GAP, latex::TIED_INITIAL))
            } else {
                Cow::Borrowed(name)
            }
        }
        InitialStyle::Anchored => ANCHORED_INITIAL.replace_all(name, "${1}.~"),
    }
}

/// Text written before the first entry.
#[must_use]
pub fn document_header() -> String {
    format!("{}\n\n{}\n\n", latex::SECTION_HEADER, latex::BEGIN_LIST)
}

/// Text written after the last entry.
#[must_use]
pub fn document_footer() -> String {
    format!("{}\n\n", latex::END_LIST)
}

/// Format a single record as one list entry.
#[must_use]
pub fn format_entry_latex(record: &PublicationRecord, style: InitialStyle) -> String {
    let mut output = format!("{}\n", latex::ITEM);

    // Author block
    if let Some(title) = record.title() {
        output.push_str(&format!("{}{title}{}", latex::TITLE_OPEN, latex::TITLE_CLOSE));
    }

    if let Some(names) = record.named_authors() {
        output.push_str(latex::LINE_BREAK);
        for name in &names {
            output.push_str(&tie_initials(name, style));
            output.push(' ');
        }
    }

    if record.has_extra_authors() {
        output.push_str(latex::ET_AL);
        output.push(' ');
    }

    match record.collaboration() {
        Some(collaboration) => output.push_str(&format!("[{collaboration}].\n")),
        None => output.push('\n'),
    }

    // Journal block
    if let Some(venue) = record.how_published() {
        output.push_str(&venue);
        output.push(' ');
    }

    if let Some(year) = record.year() {
        output.push_str(&format!("({year})\n"));
    }

    output.push('\n');
    output
}

/// Format a list of records as a complete LaTeX document fragment.
#[must_use]
pub fn format_publications_latex(
    records: &[PublicationRecord],
    style: InitialStyle,
) -> String {
    let mut output = document_header();

    for record in records {
        output.push_str(&format_entry_latex(record, style));
    }

    output.push_str(&document_footer());
    output
}

/// Stream the document for `records` into `writer`.
///
/// Entries are written one at a time in input order.
pub fn write_latex<W: Write>(
    records: &[PublicationRecord],
    style: InitialStyle,
    writer: &mut W,
) -> io::Result<()> {
    writer.write_all(document_header().as_bytes())?;

    for (i, record) in records.iter().enumerate() {
        if record.is_blank() {
            tracing::debug!(index = i, "Record has no recognized fields");
        }
        writer.write_all(format_entry_latex(record, style).as_bytes())?;
    }

    writer.write_all(document_footer().as_bytes())
}

/// Create or truncate `path` and write the document for `records` to it.
///
/// The file stays open for the whole write and is flushed once at the end.
/// On failure the file is left as the partial write left it.
pub fn write_latex_file(
    records: &[PublicationRecord],
    style: InitialStyle,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PubsError::write(path, e))?;
    let mut writer = BufWriter::new(file);

    write_latex(records, style, &mut writer).map_err(|e| PubsError::write(path, e))?;
    writer.flush().map_err(|e| PubsError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordKey;

    #[test]
    fn test_tie_initials_literal() {
        let cases = [
            ("J. Smith", "J.~Smith"),
            (" A. B. Jones", " A.~B.~Jones"),
            ("R. St. Louis", "R.~St.~Louis"),
            // A name ending in ". " before the comma still gets tied.
            ("Jones Jr. ", "Jones Jr.~"),
        ];
        for (name, expected) in cases {
            assert_eq!(tie_initials(name, InitialStyle::Literal), expected);
        }

        let untouched = tie_initials("Smith", InitialStyle::Literal);
        assert!(matches!(untouched, Cow::Borrowed(_)));
    }

    #[test]
    fn test_tie_initials_anchored() {
        let cases = [
            ("J. Smith", "J.~Smith"),
            (" A. B. Jones", " A.~B.~Jones"),
            ("R. St. Louis", "R.~St. Louis"),
            ("M. Jones Jr. ", "M.~Jones Jr. "),
        ];
        for (name, expected) in cases {
            assert_eq!(tie_initials(name, InitialStyle::Anchored), expected);
        }
    }

    #[test]
    fn test_entry_blank() {
        let record = PublicationRecord::new();
        let entry = format_entry_latex(&record, InitialStyle::Literal);
        assert_eq!(entry, "\\item\n\n\n");
    }

    #[test]
    fn test_entry_collaboration_closes_author_block() {
        let record = PublicationRecord::new().with(RecordKey::Collaboration, "Minerva");
        assert_eq!(
            format_entry_latex(&record, InitialStyle::Literal),
            "\\item\n[Minerva].\n\n"
        );
    }

    #[test]
    fn test_entry_venue_without_year() {
        let record =
            PublicationRecord::new().with(RecordKey::HowPublished, "Phys. Rev. D 1, 2");
        assert_eq!(
            format_entry_latex(&record, InitialStyle::Literal),
            "\\item\n\nPhys. Rev. D 1, 2 \n"
        );
    }

    #[test]
    fn test_header_and_footer() {
        assert_eq!(
            document_header(),
            "\\section{Publications}\n\n\\begin{enumerate}\n\n"
        );
        assert_eq!(document_footer(), "\\end{enumerate}\n\n");
    }

    #[test]
    fn test_write_matches_format() {
        let records = vec![
            PublicationRecord::new().with(RecordKey::Title, "A"),
            PublicationRecord::new().with(RecordKey::Year, 2001),
        ];
        let mut buf = Vec::new();
        write_latex(&records, InitialStyle::Literal, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            format_publications_latex(&records, InitialStyle::Literal)
        );
    }
}
