#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;
use std::vec::Vec;

use crate::{
    common::ShotResult,
    config::GameMode,
    game::{Match, TurnOutcome},
    grid::{Cell, Coordinate, Grid},
    player::Seat,
    player_cli::format_coordinate,
    ship::DeckStatus,
};

const CELL_WIDTH: usize = 3;
const GAP: &str = "      ";

fn symbol<const N: usize>(grid: &Grid<N>, coord: Coordinate, reveal: bool) -> &'static str {
    match grid.cell(coord) {
        Ok(Cell::Empty) => "   ",
        Ok(Cell::Crater) => " ¤ ",
        Ok(Cell::DeadZone) => " · ",
        Ok(Cell::ShipPart { .. }) => match grid.deck_status(coord) {
            Ok(Some(DeckStatus::Broken)) => "░░░",
            Ok(Some(DeckStatus::Intact)) if reveal => "███",
            _ => "   ",
        },
        Err(_) => "???",
    }
}

fn header<const N: usize>() -> String {
    let mut line = String::from("    ");
    for c in 0..N {
        let _ = write!(line, " {} ", (b'A' + c.min(25) as u8) as char);
    }
    line.push(' ');
    line
}

fn border<const N: usize>() -> String {
    format!("   +{}+", "-".repeat(N * CELL_WIDTH))
}

fn row<const N: usize>(grid: &Grid<N>, r: usize, reveal: bool) -> String {
    let mut line = format!("{:>2} |", r + 1);
    for c in 0..N {
        line.push_str(symbol(grid, Coordinate::new(r, c), reveal));
    }
    let _ = write!(line, "| {:<2}", r + 1);
    line
}

/// Draw both grids side by side with names and score.
///
/// `viewer`'s grid is on the left and always fully drawn; the opponent's
/// intact decks are only drawn in [`GameMode::Easy`].
pub fn render<const N: usize>(game: &Match<N>, viewer: Seat, mode: GameMode) -> String {
    let me = game.player(viewer);
    let them = game.player(viewer.other());
    let width = N * CELL_WIDTH + 8;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}{:^gap$}   Grid: {}",
        format!("   Grid: {}", me.name()),
        format!("{}:{}", me.score(), them.score()),
        them.name(),
        width = width,
        gap = GAP.len()
    );
    let _ = writeln!(out, "{:<width$}{}{}", header::<N>(), GAP, header::<N>(), width = width);
    let _ = writeln!(out, "{:<width$}{}{}", border::<N>(), GAP, border::<N>(), width = width);
    for r in 0..N {
        let _ = writeln!(
            out,
            "{:<width$}{}{}",
            row(me.grid(), r, true),
            GAP,
            row(them.grid(), r, mode.reveals_opponent()),
            width = width
        );
    }
    let _ = writeln!(out, "{:<width$}{}{}", border::<N>(), GAP, border::<N>(), width = width);
    out
}

/// One line describing a resolved shot.
pub fn describe<const N: usize>(game: &Match<N>, event: &TurnOutcome) -> String {
    let name = game.player(event.shooter).name();
    let at = format_coordinate(event.target);
    match event.result {
        ShotResult::Hit => format!("{} - {} hits the target, fire again!", at, name),
        ShotResult::Sunk { size } => format!("{} - {} sank a {}-decker!", at, name, size),
        ShotResult::Miss => format!("{} - {} missed!", at, name),
        ShotResult::Retry => format!("{} - {}, nothing new there, try again!", at, name),
    }
}

/// Closing lines once the match is over; empty while it is still running.
pub fn final_lines<const N: usize>(game: &Match<N>) -> Vec<String> {
    match game.summary() {
        Some(summary) => vec![
            format!("{}, that was your last ship.", summary.loser),
            format!(
                "{} wins the match {}:{}! Congratulations!",
                summary.winner, summary.winner_score, summary.loser_score
            ),
        ],
        None => Vec::new(),
    }
}
