use std::path::PathBuf;
use std::str::FromStr;
use crate::enums::sort_field::SortField;
use crate::errors::SafeworkError;

/// A line typed at the interactive session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Upload(PathBuf),
    List,
    Sort(SortField),
    /// 1-based row number in the table as currently sorted
    View(usize),
    Show,
    Report,
    Status,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = SafeworkError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "upload" | "u" => {
                if rest.is_empty() {
                    return Err(SafeworkError::input_error(line, "a file path", "Try 'upload ./inspection.pdf'"));
                }
                let path = rest.trim_matches(|c| c == '"' || c == '\'');
                Ok(Self::Upload(PathBuf::from(path)))
            }
            "list" | "ls" => Ok(Self::List),
            "sort" => Ok(Self::Sort(rest.parse()?)),
            "view" | "v" => rest
                .parse::<usize>()
                .ok()
                .filter(|row| *row > 0)
                .map(Self::View)
                .ok_or_else(|| SafeworkError::input_error(rest, "a row number starting at 1", "Run 'list' to see row numbers")),
            "show" => Ok(Self::Show),
            "report" | "pdf" => Ok(Self::Report),
            "status" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(SafeworkError::input_error(line, "a session command", "Type 'help' for the list of commands")),
        }
    }
}

impl SessionCommand {
    pub const HELP: &'static str = "\
  upload <path>               upload a PDF, PNG or JPG document
  list                        show previous analyses
  sort <document|date|score>  sort the table (repeat to flip direction)
  view <row>                  show the analysis at a table row
  show                        show the current analysis again
  report                      open the PDF report of the current analysis
  status                      show the upload status
  help                        show this help
  quit                        leave the session

  Ctrl+C cancels a running upload; at the prompt it leaves the session.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upload_with_quoted_path() {
        let command: SessionCommand = "upload \"./site report.pdf\"".parse().unwrap();
        assert_eq!(command, SessionCommand::Upload(PathBuf::from("./site report.pdf")));
    }

    #[test]
    fn parses_sort_aliases() {
        assert_eq!("sort score".parse::<SessionCommand>().unwrap(), SessionCommand::Sort(SortField::RiskScore));
        assert_eq!("SORT date".parse::<SessionCommand>().unwrap(), SessionCommand::Sort(SortField::UploadDate));
        assert_eq!("sort document".parse::<SessionCommand>().unwrap(), SessionCommand::Sort(SortField::Filename));
    }

    #[test]
    fn rejects_zero_and_missing_rows() {
        assert!("view 0".parse::<SessionCommand>().is_err());
        assert!("view".parse::<SessionCommand>().is_err());
        assert_eq!("view 2".parse::<SessionCommand>().unwrap(), SessionCommand::View(2));
    }

    #[test]
    fn unknown_verbs_are_input_errors() {
        let error = "dance".parse::<SessionCommand>().unwrap_err();
        assert!(matches!(error, SafeworkError::UserInputError { .. }));
    }
}
