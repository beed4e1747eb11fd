//! Interactive editing shell
//!
//! Reads commands line by line, applies them to a [`Session`] and prints
//! the outcome. Command failures are reported and the loop carries on;
//! only IO failures on the terminal itself end the shell.

use crate::commands::{Command, HELP};
use crate::config::AppConfig;
use anyhow::Context;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use vs_document::{ConfirmDelete, DeleteOutcome};
use vs_editor::{Activation, MetadataOp, PhaseEdit, Session, TableOp, TitleOp, View};
use vs_model::{Document, Phase};
use vs_projection::{
    illustrate, render_editor, render_illustration, render_visualization, visualize, DetailPanel,
    IoFilter, SwimLane,
};

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// Session plus the presentation state the views keep
#[derive(Debug, Clone)]
pub struct Shell {
    session: Session,
    panel: DetailPanel,
    io_filter: IoFilter,
    lanes: Vec<SwimLane>,
    export_dir: PathBuf,
    confirm_deletes: bool,
}

impl Shell {
    /// Open a shell on `document`
    ///
    /// # Errors
    /// Returns error if the document has no phases or duplicate ids
    pub fn new(document: Document, config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            session: Session::new(document)?,
            panel: DetailPanel::new(),
            io_filter: config.io_filter,
            lanes: config.lanes.clone(),
            export_dir: config.export_dir.clone(),
            confirm_deletes: config.confirm_deletes,
        })
    }

    #[inline]
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    #[must_use]
    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    #[inline]
    #[must_use]
    pub fn io_filter(&self) -> IoFilter {
        self.io_filter
    }

    /// Render whichever view is active
    #[must_use]
    pub fn render(&self) -> String {
        let document = self.session.document();
        match self.session.view() {
            View::Editor => render_editor(
                document,
                self.session.active_phase_id(),
                self.session.editor(),
            ),
            View::Visualization => render_visualization(
                &visualize(document, &self.lanes, self.session.focused()),
                self.panel.phase(document),
            ),
            View::Illustration => render_illustration(&illustrate(document, self.io_filter)),
        }
    }

    /// Apply one command
    ///
    /// # Errors
    /// Returns error if the session, gateway or filesystem refuses the
    /// command; the document is unchanged in that case
    pub async fn execute(
        &mut self,
        command: Command,
        confirm: &mut impl ConfirmDelete,
    ) -> anyhow::Result<Outcome> {
        tracing::debug!(?command, "shell command");
        let text = match command {
            Command::Help => HELP.to_string(),
            Command::Show => self.render(),
            Command::Quit => return Ok(Outcome::Quit),
            Command::Tab(id) => {
                self.session.select_phase(id)?;
                self.session.switch_view(View::Editor);
                self.render()
            }
            Command::AddPhase => {
                let id = self.session.add_phase()?;
                format!("added phase {id}")
            }
            Command::DeletePhase(id) => {
                let id = id.unwrap_or_else(|| self.session.active_phase_id());
                match self.session.delete_phase(id, confirm)? {
                    DeleteOutcome::Declined => "deletion cancelled".to_string(),
                    DeleteOutcome::Removed { id, .. } => format!(
                        "deleted phase {id}; editing phase {}",
                        self.session.active_phase_id()
                    ),
                }
            }
            Command::Title(text) => {
                self.session.apply_edit(PhaseEdit::Title(TitleOp::Begin))?;
                self.session
                    .apply_edit(PhaseEdit::Title(TitleOp::SetDraft(text)))?;
                if self.session.apply_edit(PhaseEdit::Title(TitleOp::Commit))? {
                    format!("renamed to '{}'", self.session.active_phase().name)
                } else {
                    "title unchanged".to_string()
                }
            }
            Command::Meta(field, value) => {
                self.session
                    .apply_edit(PhaseEdit::Metadata(MetadataOp::SetField(field, value)))?;
                format!("{} updated", field.label())
            }
            Command::StakeholderAdd(name) => {
                let steps = [
                    MetadataOp::BeginAddStakeholder,
                    MetadataOp::SetStakeholderDraft(name),
                    MetadataOp::CommitStakeholder,
                    MetadataOp::CancelAddStakeholder,
                ];
                let mut added = false;
                for op in steps {
                    added |= self.session.apply_edit(PhaseEdit::Metadata(op))?;
                }
                if added {
                    "stakeholder added".to_string()
                } else {
                    "stakeholder not added".to_string()
                }
            }
            Command::StakeholderRemove(position) => {
                let removed = self
                    .session
                    .apply_edit(PhaseEdit::Metadata(MetadataOp::RemoveStakeholder(position)))?;
                if removed {
                    "stakeholder removed".to_string()
                } else {
                    format!("no stakeholder at {position}")
                }
            }
            Command::RowAdd(section) => {
                self.session
                    .apply_edit(PhaseEdit::Table(section, TableOp::AddRow))?;
                format!("{}: row added", section.title())
            }
            Command::RowRemove(section, row) => {
                self.session
                    .apply_edit(PhaseEdit::Table(section, TableOp::DeleteRow(row)))?;
                format!("{}: row {row} deleted", section.title())
            }
            Command::Cell {
                section,
                row,
                key,
                value,
            } => {
                self.session.apply_edit(PhaseEdit::Table(
                    section,
                    TableOp::SetCell { row, key, value },
                ))?;
                format!("{}: row {row} updated", section.title())
            }
            Command::View(view) => {
                self.session.switch_view(view);
                self.render()
            }
            Command::Click(id) => {
                let before = self.session.focused();
                match self.session.activate_phase(id)? {
                    Activation::FocusedAndSwitched => {
                        self.panel.follow_focus(before, self.session.focused());
                    }
                    Activation::Focused | Activation::Unfocused => self.panel.open(id),
                    Activation::Ignored => {
                        self.session.select_phase(id)?;
                    }
                }
                self.render()
            }
            Command::ClearFocus => {
                self.session.clear_focus();
                self.panel.close();
                self.render()
            }
            Command::Close => {
                self.panel.close();
                self.render()
            }
            Command::Io(filter) => {
                self.io_filter = filter;
                self.render()
            }
            Command::Export(dir) => {
                let dir = dir.unwrap_or_else(|| self.export_dir.clone());
                let artifact = vs_gateway::export_today(self.session.document())?;
                let path = artifact.write_to(&dir).await?;
                format!("exported to {}", path.display())
            }
            Command::Import(path) => {
                let document = vs_gateway::read_import(&path).await?;
                self.session.load_import(document)?;
                format!(
                    "imported {} phases from {}\n{}",
                    self.session.document().len(),
                    path.display(),
                    self.render()
                )
            }
        };
        Ok(Outcome::Print(text))
    }

    /// Drive the shell until `quit` or end of input
    ///
    /// # Errors
    /// Returns error only if reading `input` or writing `out` fails
    pub async fn run<R, W>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "{}", self.render())?;
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line).context("reading command")? == 0 {
                break;
            }
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };

            let result = if self.confirm_deletes {
                let mut ask = |phase: &Phase| ask_delete(&mut *input, &mut *out, phase);
                self.execute(command, &mut ask).await
            } else {
                self.execute(command, &mut |_: &Phase| true).await
            };

            match result {
                Ok(Outcome::Print(text)) => writeln!(out, "{text}")?,
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "command failed");
                    writeln!(out, "error: {e:#}")?;
                }
            }
        }
        Ok(())
    }
}

/// `y/N` prompt; anything but a yes, including a read failure, declines
fn ask_delete(input: &mut impl BufRead, out: &mut impl Write, phase: &Phase) -> bool {
    let mut answer = String::new();
    write!(out, "Delete phase {} '{}'? [y/N] ", phase.id, phase.name)
        .and_then(|()| out.flush())
        .and_then(|()| input.read_line(&mut answer))
        .is_ok()
        && matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
