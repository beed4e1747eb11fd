//! Plain-text rendering of the three views
//!
//! Output is line-oriented and stable so the shell and tests can rely on
//! it. Writing into a `String` cannot fail, so the `render_*` entry points
//! discard the `fmt::Result` of the inner writers.

use crate::illustration::{Illustration, IoPreview};
use crate::visualization::Visualization;
use std::fmt::{self, Write};
use vs_editor::{CellView, PhaseEditor};
use vs_model::{Document, MetadataField, Phase, PhaseId, PhaseSection};

/// Editor view: phase tabs, title, metadata and the four tables
#[must_use]
pub fn render_editor(document: &Document, active: PhaseId, editor: &PhaseEditor) -> String {
    let mut out = String::new();
    let _ = write_editor(&mut out, document, active, editor);
    out
}

#[must_use]
pub fn render_illustration(flow: &Illustration) -> String {
    let mut out = String::new();
    let _ = write_illustration(&mut out, flow);
    out
}

/// Visualization view, followed by the detail panel when one is open
#[must_use]
pub fn render_visualization(viz: &Visualization, detail: Option<&Phase>) -> String {
    let mut out = String::new();
    let _ = write_visualization(&mut out, viz);
    if let Some(phase) = detail {
        let _ = write_phase_detail(&mut out, phase);
    }
    out
}

#[must_use]
pub fn render_phase_detail(phase: &Phase) -> String {
    let mut out = String::new();
    let _ = write_phase_detail(&mut out, phase);
    out
}

fn write_editor(
    out: &mut impl Write,
    document: &Document,
    active: PhaseId,
    editor: &PhaseEditor,
) -> fmt::Result {
    writeln!(out, "{}", document.name)?;
    if !document.description.is_empty() {
        writeln!(out, "{}", document.description)?;
    }
    for phase in &document.phases {
        if phase.id == active {
            write!(out, "[{} {}] ", phase.id, phase.name)?;
        } else {
            write!(out, " {} {}  ", phase.id, phase.name)?;
        }
    }
    writeln!(out)?;
    writeln!(out)?;

    if editor.is_editing_title() {
        writeln!(out, "Phase {}: {} (editing)", editor.id(), editor.displayed_title())?;
    } else {
        writeln!(out, "Phase {}: {}", editor.id(), editor.displayed_title())?;
    }

    let metadata = editor.metadata_editor();
    for field in MetadataField::ALL {
        writeln!(out, "  {:<22}{}", format!("{}:", field.label()), metadata.metadata().get(field))?;
    }
    write!(out, "  {:<22}", "Key Stakeholders:")?;
    for (index, name) in metadata.metadata().key_stakeholders.iter().enumerate() {
        write!(out, "({index}) {name}  ")?;
    }
    if let Some(draft) = metadata.stakeholder_draft() {
        write!(out, "+ [{draft}]")?;
    }
    writeln!(out)?;

    for section in PhaseSection::ALL {
        writeln!(out)?;
        writeln!(out, "{} ({})", section.title(), editor.phase().section_len(section))?;
        let grid = editor.grid(section);
        let header: Vec<&str> = grid.columns.iter().map(|c| c.label).collect();
        writeln!(out, "  #  {}", header.join(" | "))?;
        for (row, cells) in grid.rows.iter().enumerate() {
            let cells: Vec<String> = cells.iter().map(cell_text).collect();
            writeln!(out, "  {row:<2} {}", cells.join(" | "))?;
        }
    }
    Ok(())
}

fn cell_text(cell: &CellView<'_>) -> String {
    match cell {
        CellView::Editing(text) => format!("[{text}]"),
        CellView::Value(_) | CellView::Placeholder => cell.text().to_string(),
    }
}

fn write_illustration(out: &mut impl Write, flow: &Illustration) -> fmt::Result {
    writeln!(out, "Value Stream Flow ({})", flow.filter.label())?;
    let last = flow.cards.len().saturating_sub(1);
    for (index, card) in flow.cards.iter().enumerate() {
        writeln!(out)?;
        if let Some(inputs) = &card.inputs {
            write_preview(out, "Inputs", "inputs", "from", inputs)?;
        }
        writeln!(out, "  Phase {}: {}", card.id, card.name)?;
        writeln!(
            out,
            "    {} | {} | {} Value",
            card.duration, card.owner, card.value_add_time
        )?;
        writeln!(
            out,
            "    {} inputs, {} outputs, {} criteria",
            card.input_count, card.output_count, card.criteria_count
        )?;
        if let Some(outputs) = &card.outputs {
            write_preview(out, "Outputs", "outputs", "by", outputs)?;
        }
        if index < last {
            writeln!(out, "    ▶")?;
        }
    }
    Ok(())
}

fn write_preview(
    out: &mut impl Write,
    title: &str,
    noun: &str,
    source_word: &str,
    preview: &IoPreview,
) -> fmt::Result {
    writeln!(out, "    {title} ({})", preview.total)?;
    for item in &preview.items {
        match &item.source {
            Some(source) => writeln!(out, "      - {} ({source_word}: {source})", item.text)?,
            None => writeln!(out, "      - {}", item.text)?,
        }
    }
    if preview.more > 0 {
        writeln!(out, "      +{} more {noun}", preview.more)?;
    }
    Ok(())
}

fn write_visualization(out: &mut impl Write, viz: &Visualization) -> fmt::Result {
    if let Some(banner) = &viz.banner {
        writeln!(
            out,
            "Focused on Phase {}: {}",
            banner.id,
            banner.name.as_deref().unwrap_or("")
        )?;
        writeln!(out)?;
    }

    let summary = &viz.summary;
    writeln!(out, "Total Lead Time Target:     {}", summary.lead_time_target)?;
    writeln!(out, "Process Efficiency Target:  {}", summary.efficiency_target)?;
    writeln!(out, "Total Phases:               {}", summary.phase_count)?;
    writeln!(out, "Stakeholder Groups:         {}", summary.stakeholder_groups)?;
    writeln!(out)?;

    let timeline: Vec<String> = viz
        .timeline
        .iter()
        .map(|s| format!("{} x{}", s.label, s.weight))
        .collect();
    writeln!(out, "Timeline: {}", timeline.join(" | "))?;

    for lane in &viz.lanes {
        writeln!(out)?;
        writeln!(out, "{} ({})", lane.name, lane.role)?;
        for (index, b) in lane.boxes.iter().enumerate() {
            let arrow = if index > 0 { "→ " } else { "  " };
            let marker = if b.focused { "*" } else { " " };
            writeln!(out, "  {arrow}{marker}[{}] {} ({})", b.id, b.name, b.duration)?;
            for output in &b.outputs {
                writeln!(out, "        - {output}")?;
            }
            writeln!(out, "        {} Value-Add", b.value_add_time)?;
        }
    }
    Ok(())
}

fn write_phase_detail(out: &mut impl Write, phase: &Phase) -> fmt::Result {
    let metadata = &phase.metadata;
    writeln!(out)?;
    writeln!(out, "== Phase {}: {} ==", phase.id, phase.name)?;
    writeln!(out, "Key Stakeholders: {}", metadata.key_stakeholders.join(", "))?;
    writeln!(out, "Owner: {}", metadata.phase_owner)?;
    writeln!(out, "Duration: {}", metadata.duration)?;
    writeln!(out, "Value-Add Time: {}", metadata.value_add_time)?;

    writeln!(out, "{}:", PhaseSection::Inputs.title())?;
    for item in &phase.inputs {
        writeln!(out, "  - {}", item.input)?;
    }
    writeln!(out, "{}:", PhaseSection::Outputs.title())?;
    for item in &phase.outputs {
        writeln!(out, "  - {}", item.output)?;
    }
    writeln!(out, "{}:", PhaseSection::ExitCriteria.title())?;
    for item in &phase.exit_criteria {
        writeln!(out, "  - {}", item.criteria)?;
    }
    writeln!(out, "Key Metrics:")?;
    for item in &phase.metrics {
        writeln!(out, "  - {}: {}", item.metric, item.target)?;
    }
    Ok(())
}
