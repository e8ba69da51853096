use cube_core::{CubeState, MoveSequence, ValidationReport};
use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::config::Palette;

/// Draws the unfolded net. With `color` each sticker is a block in its
/// palette color, otherwise its letter code.
pub fn net(state: &CubeState, palette: &Palette, color: bool) -> String {
    if !color {
        return state.to_string();
    }

    state
        .net()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(sticker) => {
                        let (r, g, b) = palette.rgb(*sticker);
                        "  ".on_truecolor(r, g, b).to_string()
                    }
                    None => "  ".to_owned(),
                })
                .join("")
                .trim_end()
                .to_owned()
        })
        .join("\n")
}

/// The moves as numbered lines of `group` moves each.
pub fn history(moves: &MoveSequence, group: usize) -> String {
    if moves.is_empty() {
        return "No moves yet".to_owned();
    }

    moves
        .chunks(group.max(1))
        .enumerate()
        .map(|(i, chunk)| format!("{}. {}", i + 1, chunk.iter().join(" ")))
        .join("\n")
}

pub fn report(report: &ValidationReport, color: bool) -> String {
    let text = report.to_string();
    match (color, report.is_valid()) {
        (false, _) => text,
        (true, true) => text.green().to_string(),
        (true, false) => text.lines().map(|line| line.red().to_string()).join("\n"),
    }
}
