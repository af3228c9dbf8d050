use clap::ValueEnum;

/// How a highlighted keyword is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HighlightMarkup {
    /// Yellow background escape codes for terminals
    #[default]
    Ansi,
    /// `<mark>` elements, with the rest of the text HTML-escaped
    Html,
    /// `[[keyword]]` for plain-text output
    Brackets,
}

impl HighlightMarkup {
    pub fn wrap(self, matched: &str) -> String {
        match self {
            Self::Ansi => format!("\x1b[43;30m{matched}\x1b[0m"),
            Self::Html => format!("<mark class=\"risk-term\">{}</mark>", html_escape::encode_text(matched)),
            Self::Brackets => format!("[[{matched}]]"),
        }
    }

    pub fn plain(self, text: &str) -> String {
        match self {
            Self::Html => html_escape::encode_text(text).into_owned(),
            Self::Ansi | Self::Brackets => text.to_string(),
        }
    }
}
