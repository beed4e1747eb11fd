//! Interactive shell command grammar
//!
//! One command per line. Free-text arguments (titles, cell values,
//! stakeholder names) run to the end of the line.

use std::path::PathBuf;
use vs_editor::View;
use vs_model::{MetadataField, ParseKeyError, PhaseId, PhaseSection};
use vs_projection::IoFilter;

pub const HELP: &str = "\
Commands:
  show                              render the current view
  tab <id>                          edit another phase
  add-phase                         append a phase and edit it
  delete-phase [id]                 delete a phase (default: the edited one)
  title <text>                      rename the edited phase
  meta <field> <value>              set description|owner|duration|valueAddTime|firstActor|nextActor
  stakeholder add <name>            add a key stakeholder
  stakeholder rm <index>            remove a key stakeholder
  row add <section>                 append a row to inputs|outputs|criteria|metrics
  row rm <section> <index>          delete a row
  cell <section> <row> <key> <text> set one cell
  view <editor|visualize|illustrate>
  click <id>                        activate a phase in the current view
  clear-focus                       drop the visualization focus
  close                             close the detail panel
  io <inputs|outputs|both>          illustration filter
  export [dir]                      write value-stream-data-<date>.json
  import <file>                     replace the document from a file
  quit";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Tab(PhaseId),
    AddPhase,
    DeletePhase(Option<PhaseId>),
    Title(String),
    Meta(MetadataField, String),
    StakeholderAdd(String),
    StakeholderRemove(usize),
    RowAdd(PhaseSection),
    RowRemove(PhaseSection, usize),
    Cell {
        section: PhaseSection,
        row: usize,
        key: String,
        value: String,
    },
    View(View),
    Click(PhaseId),
    ClearFocus,
    Close,
    Io(IoFilter),
    Export(Option<PathBuf>),
    Import(PathBuf),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid {what}: '{value}'")]
    Invalid { what: &'static str, value: String },

    #[error(transparent)]
    Key(#[from] ParseKeyError),
}

/// First word and the trimmed remainder
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn index(value: &str) -> Result<usize, CommandError> {
    value.parse().map_err(|_| CommandError::Invalid {
        what: "index",
        value: value.to_string(),
    })
}

fn required<'a>(value: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(value)
    }
}

impl Command {
    /// Parse one input line; blank lines and `#` comments yield `None`
    ///
    /// # Errors
    /// Returns error for unknown commands or malformed arguments
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (name, rest) = split_word(line);
        let command = match name.to_ascii_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "show" | "ls" => Command::Show,
            "tab" => Command::Tab(required(rest, "tab <id>")?.parse()?),
            "add-phase" => Command::AddPhase,
            "delete-phase" => {
                if rest.is_empty() {
                    Command::DeletePhase(None)
                } else {
                    Command::DeletePhase(Some(rest.parse()?))
                }
            }
            "title" => Command::Title(required(rest, "title <text>")?.to_string()),
            "meta" => {
                let (field, value) = split_word(required(rest, "meta <field> <value>")?);
                Command::Meta(field.parse()?, value.to_string())
            }
            "stakeholder" => {
                const USAGE: &str = "stakeholder add <name> | stakeholder rm <index>";
                match split_word(rest) {
                    ("add", name) => Command::StakeholderAdd(required(name, USAGE)?.to_string()),
                    ("rm", position) => {
                        Command::StakeholderRemove(index(required(position, USAGE)?)?)
                    }
                    _ => return Err(CommandError::Usage(USAGE)),
                }
            }
            "row" => {
                const USAGE: &str = "row add <section> | row rm <section> <index>";
                match split_word(rest) {
                    ("add", section) => Command::RowAdd(required(section, USAGE)?.parse()?),
                    ("rm", args) => {
                        let (section, position) = split_word(args);
                        Command::RowRemove(
                            required(section, USAGE)?.parse()?,
                            index(required(position, USAGE)?)?,
                        )
                    }
                    _ => return Err(CommandError::Usage(USAGE)),
                }
            }
            "cell" => {
                const USAGE: &str = "cell <section> <row> <key> <text>";
                let (section, args) = split_word(required(rest, USAGE)?);
                let (row, args) = split_word(args);
                let (key, value) = split_word(args);
                Command::Cell {
                    section: section.parse()?,
                    row: index(required(row, USAGE)?)?,
                    key: required(key, USAGE)?.to_string(),
                    value: value.to_string(),
                }
            }
            "view" => Command::View(required(rest, "view <editor|visualize|illustrate>")?.parse()?),
            "click" => Command::Click(required(rest, "click <id>")?.parse()?),
            "clear-focus" => Command::ClearFocus,
            "close" => Command::Close,
            "io" => Command::Io(required(rest, "io <inputs|outputs|both>")?.parse()?),
            "export" => Command::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "import" => Command::Import(PathBuf::from(required(rest, "import <file>")?)),
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# note").unwrap(), None);
    }

    #[test]
    fn free_text_runs_to_end_of_line() {
        assert_eq!(parse("title  Solution   Design "), Command::Title("Solution   Design".into()));
        assert_eq!(
            parse("stakeholder add Head of Sales"),
            Command::StakeholderAdd("Head of Sales".into())
        );
    }

    #[test]
    fn meta_accepts_aliases_and_empty_value() {
        assert_eq!(
            parse("meta owner Jane Doe"),
            Command::Meta(MetadataField::PhaseOwner, "Jane Doe".into())
        );
        assert_eq!(parse("meta duration"), Command::Meta(MetadataField::Duration, String::new()));
    }

    #[test]
    fn cell_parses_all_parts() {
        assert_eq!(
            parse("cell criteria 2 approver PMO lead"),
            Command::Cell {
                section: PhaseSection::ExitCriteria,
                row: 2,
                key: "approver".into(),
                value: "PMO lead".into(),
            }
        );
    }

    #[test]
    fn delete_phase_id_is_optional() {
        assert_eq!(parse("delete-phase"), Command::DeletePhase(None));
        assert_eq!(parse("delete-phase 4"), Command::DeletePhase(Some(PhaseId(4))));
    }

    #[test]
    fn views_and_filters() {
        assert_eq!(parse("view viz"), Command::View(View::Visualization));
        assert_eq!(parse("io outputs"), Command::Io(IoFilter::Outputs));
        assert_eq!(parse("export"), Command::Export(None));
        assert_eq!(parse("export out/dir"), Command::Export(Some(PathBuf::from("out/dir"))));
    }

    #[test]
    fn errors_are_specific() {
        assert_eq!(
            Command::parse("frobnicate").unwrap_err(),
            CommandError::Unknown("frobnicate".into())
        );
        assert!(matches!(Command::parse("tab").unwrap_err(), CommandError::Usage(_)));
        assert!(matches!(Command::parse("tab x").unwrap_err(), CommandError::Key(_)));
        assert!(matches!(
            Command::parse("row rm inputs two").unwrap_err(),
            CommandError::Invalid { what: "index", .. }
        ));
        assert!(matches!(Command::parse("row move inputs").unwrap_err(), CommandError::Usage(_)));
    }
}
