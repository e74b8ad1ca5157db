//! Console rendering of planning results

use crate::models::{Conflict, Schedule};
use crate::planner::FixturePlan;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use std::path::Path;

const HEADING_COLOR: Color = Color::Cyan;
const CONFLICT_COLOR: Color = Color::Yellow;
const NOTICE_COLOR: Color = Color::Green;

/// Writes planning output as plain or coloured text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReport {
    plain: bool,
}

impl ConsoleReport {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    fn line<W: Write>(&self, out: &mut W, text: &str, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(color) if !self.plain => {
                queue!(out, SetForegroundColor(color), Print(text), ResetColor)?;
                writeln!(out)
            }
            _ => writeln!(out, "{text}"),
        }
    }

    /// Titled listing, one `"<home> vs <away> on <date>"` line per fixture.
    pub fn write_schedule<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        schedule: &Schedule,
    ) -> io::Result<()> {
        writeln!(out)?;
        self.line(out, &format!("{title}:"), Some(HEADING_COLOR))?;
        for fixture in schedule {
            writeln!(out, "{fixture}")?;
        }
        Ok(())
    }

    pub fn write_conflicts<W: Write>(&self, out: &mut W, conflicts: &[Conflict]) -> io::Result<()> {
        for conflict in conflicts {
            self.line(out, &conflict.to_string(), Some(CONFLICT_COLOR))?;
        }
        Ok(())
    }

    /// Full report for a plan: initial listing, then either conflicts and
    /// the updated listing, or the notice that no international matches were given.
    pub fn write_plan<W: Write>(&self, out: &mut W, plan: &FixturePlan) -> io::Result<()> {
        self.write_schedule(out, "Initial Schedule", &plan.initial)?;

        match &plan.updated {
            Some(updated) => {
                writeln!(out)?;
                self.write_conflicts(out, &plan.conflicts)?;
                self.write_schedule(out, "Updated Schedule", updated)?;
                self.write_unresolved(out, updated, &plan.unresolved)?;
            }
            None => {
                writeln!(out)?;
                self.line(out, "No international matches added.", Some(NOTICE_COLOR))?;
            }
        }
        out.flush()
    }

    /// Notes fixtures of the updated schedule that still meet an international match.
    pub fn write_unresolved<W: Write>(
        &self,
        out: &mut W,
        schedule: &Schedule,
        unresolved: &[usize],
    ) -> io::Result<()> {
        if unresolved.is_empty() {
            return Ok(());
        }
        writeln!(out)?;
        for &index in unresolved {
            if let Some(fixture) = schedule.get(index) {
                self.line(
                    out,
                    &format!("Warning: {fixture} still clashes with an international match."),
                    Some(CONFLICT_COLOR),
                )?;
            }
        }
        Ok(())
    }

    /// Explains why an international match sheet was not used.
    pub fn write_sheet_rejected<W: Write>(
        &self,
        out: &mut W,
        sheet: &Path,
        reason: &dyn std::fmt::Display,
    ) -> io::Result<()> {
        self.line(
            out,
            &format!("Could not use '{}': {reason}", sheet.display()),
            Some(CONFLICT_COLOR),
        )?;
        writeln!(out, "No schedules were saved. Fix the sheet and run again.")?;
        out.flush()
    }

    pub fn write_saved_files<W: Write>(
        &self,
        out: &mut W,
        initial: &Path,
        updated: &Path,
    ) -> io::Result<()> {
        writeln!(out)?;
        self.write_status_box(
            out,
            &[
                ("Schedules saved".to_string(), None),
                (String::new(), None),
                (format!("Initial: {}", initial.display()), Some(NOTICE_COLOR)),
                (format!("Updated: {}", updated.display()), Some(NOTICE_COLOR)),
            ],
        )?;
        out.flush()
    }

    /// Boxed block of lines; in plain mode the lines are written without a frame.
    pub fn write_status_box<W: Write>(
        &self,
        out: &mut W,
        lines: &[(String, Option<Color>)],
    ) -> io::Result<()> {
        if self.plain {
            for (line, _) in lines {
                writeln!(out, "{line}")?;
            }
            return Ok(());
        }

        let width = lines
            .iter()
            .map(|(line, _)| line.chars().count())
            .max()
            .unwrap_or(0);
        let bar = "═".repeat(width + 2);

        queue!(out, Print(format!("╔{bar}╗\n")))?;
        for (i, (line, color)) in lines.iter().enumerate() {
            let padding = width - line.chars().count();
            queue!(out, Print("║ "))?;
            match color {
                Some(color) => queue!(out, SetForegroundColor(*color), Print(line), ResetColor)?,
                None => queue!(out, Print(line))?,
            }
            queue!(out, Print(format!("{:padding$} ║\n", "")))?;
            if i == 0 && lines.len() > 2 {
                queue!(out, Print(format!("╠{bar}╣\n")))?;
            }
        }
        queue!(out, Print(format!("╚{bar}╝\n")))
    }
}
