use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::highlight_markup::HighlightMarkup;
use crate::enums::sort_field::SortField;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration for problems
    Validate,
    /// Upload one or more documents and show the analysis
    Upload {
        #[clap(required = true)]
        files: Vec<PathBuf>,
        #[clap(short, long, value_enum, default_value_t = SortField::UploadDate)]
        sort: SortField,
        #[clap(short, long)]
        ascending: bool,
        /// Print the analyses as JSON instead of panels
        #[clap(long)]
        json: bool,
    },
    /// Open the generated PDF report for an analysis
    Report {
        file_id: String,
        #[clap(long)]
        print_only: bool,
    },
    /// Highlight risk keywords in a local text file
    Highlight {
        file: PathBuf,
        #[clap(short, long, value_enum, default_value_t = HighlightMarkup::Ansi)]
        markup: HighlightMarkup,
    },
    /// Start an interactive upload session
    Session,
}
