//! Terminal rendering of dashboard state.

use std::io::{self, Write};

use chrono::Local;
use tokio::time::Instant;

use comanda_core::state::{Alert, StatusBoard};
use comanda_core::{AppState, Panel};

use crate::color;
use crate::table::{pad, truncate};

/// Clear the screen and scrollback position; used for focus renders.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";
/// Move home and clear below; passive renders repaint in place.
pub const REPAINT: &str = "\x1B[H\x1B[J";

const NAME_WIDTH: usize = 14;
const HEADLINE_WIDTH: usize = 26;
const DETAIL_WIDTH: usize = 48;

pub fn panel_lines(panel: &Panel) -> Vec<String> {
    let mut lines = Vec::with_capacity(panel.lines.len() + 1);
    lines.push(color::bold(&panel.title));
    lines.extend(
        panel
            .lines
            .iter()
            .map(|line| color::tone(line.tone, &line.text)),
    );
    lines
}

pub fn board_lines(board: &StatusBoard) -> Vec<String> {
    board
        .cards()
        .iter()
        .map(|card| {
            let checked = card
                .last_checked
                .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
                .unwrap_or_default();
            format!(
                "{} {}{}{}{}",
                color::connectivity(card.connectivity, "●"),
                pad(card.kind.display_name(), NAME_WIDTH),
                color::connectivity(card.connectivity, &pad(&card.headline, HEADLINE_WIDTH)),
                color::muted(&pad(&truncate(&card.detail, DETAIL_WIDTH), DETAIL_WIDTH + 2)),
                color::muted(&checked),
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

pub fn alert_lines<'a>(alerts: impl IntoIterator<Item = &'a Alert>) -> Vec<String> {
    alerts
        .into_iter()
        .map(|alert| {
            format!(
                "{} {}",
                color::muted(&format!("[{}]", alert.id)),
                color::alert(alert.level, &alert.message)
            )
        })
        .collect()
}

/// The full watch-mode screen, top to bottom.
pub fn screen(state: &AppState, now: Instant) -> String {
    let mut out = Vec::new();

    let mut header = format!(
        "{}  {}/{} services online",
        color::bold("🍽  comanda"),
        state.board.online_count(),
        state.board.cards().len()
    );
    if state.live_running {
        header.push_str(&format!("  {}", color::accent("📡 live")));
    }
    out.push(header);
    out.push(String::new());
    out.extend(board_lines(&state.board));

    let alerts = alert_lines(state.alerts.active(now));
    if !alerts.is_empty() {
        out.push(String::new());
        out.extend(alerts);
    }

    out.push(String::new());
    out.extend(panel_lines(state.panel.panel()));
    out.push(String::new());
    out.push(color::muted("Type 'help' for commands, 'quit' to exit."));

    let mut text = out.join("\n");
    text.push('\n');
    text
}

pub fn print_panel(panel: &Panel) {
    for line in panel_lines(panel) {
        println!("{}", line);
    }
}

pub fn print_alerts<'a>(alerts: impl IntoIterator<Item = &'a Alert>) {
    for line in alert_lines(alerts) {
        println!("{}", line);
    }
}

/// Write a full screen; `focus` clears first, otherwise repaints in place.
pub fn paint(state: &AppState, focus: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    let prefix = if focus { CLEAR_SCREEN } else { REPAINT };
    write!(stdout, "{}{}> ", prefix, screen(state, Instant::now()))?;
    stdout.flush()
}
