//! CLI commands for spending reports

use crate::config::settings::Settings;
use crate::display;
use crate::session::AnalysisSession;

/// Overall spending: count, total and average
pub fn render_summary(session: &AnalysisSession, settings: &Settings) -> String {
    let mut output = display::format_overview(
        session.records().len(),
        session.total_expenditure(),
        session.average_expenditure(),
        &settings.currency_symbol,
    );

    if let Some((first, last)) = session.store().and_then(|store| store.date_range()) {
        output.push_str(&format!("Period:              {} to {}\n", first, last));
    }

    output
}

/// The largest `count` transactions
pub fn render_top(session: &AnalysisSession, settings: &Settings, count: usize) -> String {
    display::format_top_expenses(&session.top_expenses(count), &settings.currency_symbol)
}

/// Monthly totals, oldest first
pub fn render_monthly(session: &AnalysisSession, settings: &Settings) -> String {
    display::format_monthly(&session.monthly_expenditure(), &settings.currency_symbol)
}

/// Category totals, optionally followed by a bar chart
pub fn render_categories(session: &AnalysisSession, settings: &Settings, chart: bool) -> String {
    let summary = session.expenditure_by_category();
    let mut output = display::format_category_breakdown(&summary, &settings.currency_symbol);

    if chart && !summary.is_empty() {
        output.push('\n');
        output.push_str(&display::format_category_chart(&summary));
    }

    output
}

/// Handle the `summary` command
pub fn handle_summary(session: &AnalysisSession, settings: &Settings) {
    print!("{}", render_summary(session, settings));
}

/// Handle the `top` command
pub fn handle_top(session: &AnalysisSession, settings: &Settings, count: Option<usize>) {
    let count = count.unwrap_or(settings.top_count);
    print!("{}", render_top(session, settings, count));
}

/// Handle the `monthly` command
pub fn handle_monthly(session: &AnalysisSession, settings: &Settings) {
    print!("{}", render_monthly(session, settings));
}

/// Handle the `categories` command
pub fn handle_categories(session: &AnalysisSession, settings: &Settings, chart: bool) {
    print!("{}", render_categories(session, settings, chart));
}
