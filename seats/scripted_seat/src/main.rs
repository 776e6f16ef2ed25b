use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quoridor::{Action, Coordinate, MatchSnapshot};
use quoridor_seat_utils::Seat;

#[derive(Parser)]
struct Args {
    /// Path to a JSON file holding the actions to play, in order
    script: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let contents = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Could not read script '{}'", args.script.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&contents)?;

    ScriptedSeat { actions, cursor: 0 }.run()
}

/// Replays a fixed list of actions, one per turn. Useful for protocol
/// checks and for replaying recorded matches; it does not judge whether
/// its actions are any good.
struct ScriptedSeat {
    actions: Vec<Action>,
    cursor: usize,
}

impl Seat for ScriptedSeat {
    fn new_match(&mut self, _seat: usize, _board_size: i8, _walls_per_seat: usize) {
        // Each match of a series replays the script from the top.
        self.cursor = 0;
    }

    fn take_turn(
        &mut self,
        _snapshot: MatchSnapshot,
        _legal_destinations: Vec<Coordinate>,
        rejected: Option<String>,
    ) -> anyhow::Result<Action> {
        if let Some(reason) = rejected {
            anyhow::bail!("Scripted action was rejected: {}", reason);
        }
        let action = self
            .actions
            .get(self.cursor)
            .copied()
            .context("The script ran out of actions")?;
        self.cursor += 1;
        Ok(action)
    }

    fn match_over(&mut self, _winner: usize) {}
}
