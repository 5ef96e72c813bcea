//! Configuration for a pubtex run.

use std::path::PathBuf;

use crate::models::InitialStyle;

/// Fixed LaTeX markup tokens.
pub mod latex {
    /// Section header opening the document.
    pub const SECTION_HEADER: &str = "\\section{Publications}";

    /// Start of the publication list.
    pub const BEGIN_LIST: &str = "\\begin{enumerate}";

    /// End of the publication list.
    pub const END_LIST: &str = "\\end{enumerate}";

    /// Marker opening each entry.
    pub const ITEM: &str = "\\item";

    /// Bold group opening a title, including the opening quotes.
    pub const TITLE_OPEN: &str = "{\\bf ``";

    /// Closing quotes and group after a title.
    pub const TITLE_CLOSE: &str = "''}";

    /// Line break emitted before the author list.
    pub const LINE_BREAK: &str = "\\\\{}";

    /// Marker for unnamed additional authors.
    pub const ET_AL: &str = "{\\it et al.}";

    /// Literal pattern rewritten inside author names.
    pub const INITIAL_GAP: &str = ". ";

    /// Replacement tying an initial to the following name part.
    pub const TIED_INITIAL: &str = ".~";
}

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "pubs.tex";

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON document to read.
    pub input: PathBuf,

    /// LaTeX file to create or truncate.
    pub output: PathBuf,

    /// How periods in author names are tied.
    pub initial_style: InitialStyle,
}

impl Config {
    /// Create a configuration writing to [`DEFAULT_OUTPUT`].
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            initial_style: InitialStyle::default(),
        }
    }

    /// Override the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Override the author-initial style.
    #[must_use]
    pub fn with_initial_style(mut self, style: InitialStyle) -> Self {
        self.initial_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("pubs.json");
        assert_eq!(config.input, PathBuf::from("pubs.json"));
        assert_eq!(config.output, PathBuf::from("pubs.tex"));
        assert_eq!(config.initial_style, InitialStyle::Literal);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::new("in.json")
            .with_output("cv/pubs.tex")
            .with_initial_style(InitialStyle::Anchored);
        assert_eq!(config.output, PathBuf::from("cv/pubs.tex"));
        assert_eq!(config.initial_style, InitialStyle::Anchored);
    }

    #[test]
    fn test_markers() {
        assert_eq!(latex::ITEM, r"\item");
        assert_eq!(latex::LINE_BREAK, r"\\{}");
        assert_eq!(latex::TITLE_OPEN, r"{\bf ``");
    }
}
