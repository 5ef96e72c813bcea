//! Enumeration types for record fields and formatting options.

/// A field recognized on a publication record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey {
    /// Work title.
    Title,
    /// Comma-separated author names.
    NamedAuthors,
    /// Marks that unnamed authors follow.
    ExtraAuthors,
    /// Collaboration credited as co-author.
    Collaboration,
    /// Venue or journal reference.
    HowPublished,
    /// Publication year.
    Year,
}

impl RecordKey {
    /// All keys in formatting order.
    pub const ALL: [Self; 6] = [
        Self::Title,
        Self::NamedAuthors,
        Self::ExtraAuthors,
        Self::Collaboration,
        Self::HowPublished,
        Self::Year,
    ];

    /// The key as it appears in the input document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::NamedAuthors => "named_authors",
            Self::ExtraAuthors => "extra_authors",
            Self::Collaboration => "collaboration",
            Self::HowPublished => "how_published",
            Self::Year => "year",
        }
    }

    /// Check if this key belongs to the author block.
    #[must_use]
    pub const fn is_author_block(self) -> bool {
        matches!(
            self,
            Self::Title | Self::NamedAuthors | Self::ExtraAuthors | Self::Collaboration
        )
    }
}

/// How the period after an author initial is tied to the next name part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialStyle {
    /// Rewrite every ". " in a name, including inside words ("St. Louis").
    #[default]
    Literal,
    /// Rewrite ". " only after a single-letter initial.
    Anchored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        let names: Vec<_> = RecordKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            [
                "title",
                "named_authors",
                "extra_authors",
                "collaboration",
                "how_published",
                "year"
            ]
        );
    }

    #[test]
    fn test_author_block_keys() {
        assert!(RecordKey::Collaboration.is_author_block());
        assert!(!RecordKey::HowPublished.is_author_block());
        assert!(!RecordKey::Year.is_author_block());
    }
}
