use std::str::FromStr;
use clap::ValueEnum;
use crate::errors::SafeworkError;

/// Columns the results table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SortField {
    #[value(aliases = ["document", "name"])]
    Filename,
    #[value(alias = "date")]
    UploadDate,
    #[value(aliases = ["score", "risk"])]
    RiskScore,
}

impl SortField {
    pub const fn column_title(self) -> &'static str {
        match self {
            Self::Filename => "Document",
            Self::UploadDate => "Date",
            Self::RiskScore => "Risk Score",
        }
    }
}

impl FromStr for SortField {
    type Err = SafeworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "filename" | "document" | "name" => Ok(Self::Filename),
            "upload-date" | "upload_date" | "date" => Ok(Self::UploadDate),
            "risk-score" | "risk_score" | "score" | "risk" => Ok(Self::RiskScore),
            other => Err(SafeworkError::input_error(
                other,
                "one of document, date, score",
                "Try 'sort score' or 'sort date'",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}
