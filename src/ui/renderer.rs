//! Plain-text rendering of the session view model.
//!
//! Used by the headless driver and handy in logs. Layout is fixed-width and
//! free of terminal escape codes.

use super::viewmodel::{CardView, SessionViewModel};
use std::fmt::Write;

/// Width of the progress bar in characters.
const BAR_WIDTH: usize = 20;

/// Renders the whole screen.
#[must_use]
pub fn render_text(vm: &SessionViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} · {}m", vm.header.title, vm.header.elapsed_minutes);
    let _ = writeln!(out, "{}", vm.header.subtitle);
    let _ = writeln!(
        out,
        "{} {}% Complete",
        progress_bar(vm.progress.percent),
        vm.progress.percent
    );

    if let Some(banner) = &vm.completion {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", banner.title);
        let _ = writeln!(out, "{}", banner.message);
        return out;
    }

    for (depth, card) in vm.cards.iter().enumerate() {
        let _ = writeln!(out);
        render_card(&mut out, card, depth);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} Prayed | {} Remaining{}",
        vm.progress.prayed,
        vm.progress.remaining,
        if vm.interactive { "" } else { " | …" }
    );
    out
}

fn render_card(out: &mut String, card: &CardView, depth: usize) {
    let indent = "  ".repeat(depth);
    let badge = if card.urgent { " [URGENT]" } else { "" };

    let _ = writeln!(out, "{indent}[{}]{badge}", card.category);
    let _ = writeln!(out, "{indent}{}", card.title);
    if depth == 0 {
        let _ = writeln!(out, "{indent}{}", card.body);
        let _ = writeln!(out, "{indent}{} · {}", card.byline, card.time_ago);
    }
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
