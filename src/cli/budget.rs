//! Budget CLI commands

use crate::config::settings::Settings;
use crate::display;
use crate::error::AnalyzerResult;
use crate::ingest::parse_amount;
use crate::models::Money;
use crate::session::AnalysisSession;

/// Parse a `CATEGORY=LIMIT` argument
///
/// The limit accepts the same amount formats as the transaction file. Its
/// sign is checked later, when the budget is set.
pub fn parse_budget_assignment(s: &str) -> Result<(String, Money), String> {
    let (category, limit) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected CATEGORY=LIMIT, got '{}'", s))?;

    let category = category.trim();
    if category.is_empty() {
        return Err(format!("missing category in '{}'", s));
    }

    let limit = parse_amount(limit).map_err(|e| e.to_string())?;
    Ok((category.to_string(), limit))
}

/// Budget status of every category with a budget
pub fn render_budget_status(session: &AnalysisSession, settings: &Settings) -> String {
    display::format_budget_status(&session.budget_status(), &settings.currency_symbol)
}

/// Handle the `budget` command: apply each assignment, then show status
pub fn handle_budget_command(
    session: &mut AnalysisSession,
    settings: &Settings,
    assignments: Vec<(String, Money)>,
) -> AnalyzerResult<()> {
    for (category, limit) in assignments {
        session.set_budget(&category, limit)?;
    }

    print!("{}", render_budget_status(session, settings));
    Ok(())
}
