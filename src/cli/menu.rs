//! Interactive menu
//!
//! A numbered menu over one loaded session. Input and output are generic so
//! the loop can be driven from tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::budget::render_budget_status;
use super::export::{export_to_path, ExportFormat, DEFAULT_REPORT_FILE};
use super::report::{render_categories, render_monthly, render_summary, render_top};
use crate::config::settings::Settings;
use crate::error::AnalyzerResult;
use crate::ingest::parse_amount;
use crate::session::AnalysisSession;

const MENU_WIDTH: usize = 45;

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Overview,
    TopExpenses,
    Monthly,
    Categories,
    Export,
    SetBudget,
    BudgetStatus,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        Self::Overview,
        Self::TopExpenses,
        Self::Monthly,
        Self::Categories,
        Self::Export,
        Self::SetBudget,
        Self::BudgetStatus,
        Self::Exit,
    ];

    /// Parse a 1-based menu number
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    fn label(self, top_count: usize) -> String {
        match self {
            Self::Overview => "View overall spending".to_string(),
            Self::TopExpenses => format!("Top {} transactions", top_count),
            Self::Monthly => "View monthly spending".to_string(),
            Self::Categories => "Spending by category".to_string(),
            Self::Export => "Export summary report".to_string(),
            Self::SetBudget => "Set a category budget".to_string(),
            Self::BudgetStatus => "View budget status".to_string(),
            Self::Exit => "Exit".to_string(),
        }
    }
}

/// Run the menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut AnalysisSession,
    settings: &Settings,
    mut input: R,
    mut output: W,
) -> AnalyzerResult<()> {
    loop {
        write_menu(&mut output, settings)?;

        let Some(line) = prompt(
            &mut input,
            &mut output,
            &format!("\nEnter your choice (1-{}): ", MenuChoice::ALL.len()),
        )?
        else {
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(
                output,
                "\nInvalid choice. Please enter a number between 1 and {}.",
                MenuChoice::ALL.len()
            )?;
            continue;
        };

        writeln!(output)?;
        match choice {
            MenuChoice::Overview => write!(output, "{}", render_summary(session, settings))?,
            MenuChoice::TopExpenses => write!(
                output,
                "{}",
                render_top(session, settings, settings.top_count)
            )?,
            MenuChoice::Monthly => write!(output, "{}", render_monthly(session, settings))?,
            MenuChoice::Categories => {
                write!(output, "{}", render_categories(session, settings, true))?
            }
            MenuChoice::Export => export_report(session, &mut input, &mut output)?,
            MenuChoice::SetBudget => set_budget(session, &mut input, &mut output)?,
            MenuChoice::BudgetStatus => {
                write!(output, "{}", render_budget_status(session, settings))?
            }
            MenuChoice::Exit => break,
        }
    }

    writeln!(output, "\nThank you for using the bank analyzer. Goodbye!")?;
    Ok(())
}

fn write_menu<W: Write>(output: &mut W, settings: &Settings) -> AnalyzerResult<()> {
    writeln!(output, "\n{}", "=".repeat(MENU_WIDTH))?;
    writeln!(output, "{:^width$}", "BANK TRANSACTION ANALYZER", width = MENU_WIDTH)?;
    writeln!(output, "{}", "=".repeat(MENU_WIDTH))?;
    for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", idx + 1, choice.label(settings.top_count))?;
    }
    writeln!(output, "{}", "=".repeat(MENU_WIDTH))?;
    Ok(())
}

/// Print `message` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> AnalyzerResult<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn export_report<R: BufRead, W: Write>(
    session: &AnalysisSession,
    input: &mut R,
    output: &mut W,
) -> AnalyzerResult<()> {
    let message = format!("Output file [{}]: ", DEFAULT_REPORT_FILE);
    let Some(answer) = prompt(input, output, &message)? else {
        return Ok(());
    };

    let path = if answer.is_empty() {
        PathBuf::from(DEFAULT_REPORT_FILE)
    } else {
        PathBuf::from(answer)
    };

    match export_to_path(
        &session.expenditure_by_category(),
        &path,
        ExportFormat::from_path(&path),
    ) {
        Ok(()) => writeln!(output, "Report saved as '{}'", path.display())?,
        Err(e) => writeln!(output, "Export failed: {}", e)?,
    }
    Ok(())
}

/// Ask for a category and limit, re-prompting until the limit is accepted
fn set_budget<R: BufRead, W: Write>(
    session: &mut AnalysisSession,
    input: &mut R,
    output: &mut W,
) -> AnalyzerResult<()> {
    let category = loop {
        let Some(category) = prompt(input, output, "Category: ")? else {
            return Ok(());
        };
        if !category.is_empty() {
            break category;
        }
        writeln!(output, "Category cannot be empty.")?;
    };

    loop {
        let Some(answer) = prompt(input, output, "Budget limit: ")? else {
            return Ok(());
        };

        let limit = match parse_amount(&answer) {
            Ok(limit) => limit,
            Err(e) => {
                writeln!(output, "Invalid limit: {}. Please try again.", e)?;
                continue;
            }
        };

        match session.set_budget(&category, limit) {
            Ok(()) => {
                writeln!(output, "Budget for '{}' set to {}", category, limit)?;
                return Ok(());
            }
            Err(e) => writeln!(output, "{}. Please try again.", e)?,
        }
    }
}
