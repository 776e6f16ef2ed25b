use quoridor::{
    visualize_match, Action, ActionError, Match, MatchConfig, MatchSnapshot, Okay, Request,
    TurnOutcome,
};
use tracing::{debug, warn};

use crate::recording::Recorder;
use crate::seat::SeatClient;

pub enum MatchResult {
    WonBySeat { seat: usize },
    /// A seat hit the rejection cap and forfeited; `err` is the last
    /// rejection.
    ForfeitBySeat { seat: usize, err: ActionError },
}

/// Plays one match between two clients; `clients[i]` occupies seat `i`
/// and seat 0 opens.
///
/// Returns an error only on communication failure or an unbuildable
/// configuration, not when a seat submits rejected actions — those are
/// re-prompted with the rejection reason until `max_rejections`
/// consecutive rejections forfeit the seat.
pub fn play_match(
    config: MatchConfig,
    mut clients: [&mut SeatClient; 2],
    max_rejections: u32,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchResult> {
    let board_size = config.board_size;
    let walls_per_seat = config.walls_per_seat;
    let mut game = Match::new(config)?;

    // Inform the clients about the new match, so that they can reset
    // their state.
    for (seat, client) in clients.iter_mut().enumerate() {
        let _: Okay = client.perform_request(
            recorder,
            &Request::NewMatch {
                seat,
                board_size,
                walls_per_seat,
            },
        )?;
    }

    let mut rejected: Option<String> = None;
    let mut consecutive_rejections: u32 = 0;
    let result = loop {
        let active = game.active_seat();
        let request = Request::Turn {
            snapshot: MatchSnapshot::capture(&game),
            legal_destinations: game.legal_destinations().into_iter().collect(),
            rejected: rejected.take(),
        };
        let action: Action = clients[active].perform_request(recorder, &request)?;
        match game.submit(active, action) {
            Ok(TurnOutcome::Advanced { .. }) => {
                consecutive_rejections = 0;
                debug!(
                    "Board after seat {}'s action:\n{}",
                    active,
                    visualize_match(&game)
                );
            }
            Ok(TurnOutcome::Won { winner }) => {
                for client in clients.iter_mut() {
                    let _: Okay =
                        client.perform_request(recorder, &Request::MatchOver { winner })?;
                }
                break MatchResult::WonBySeat { seat: winner };
            }
            Err(err) => {
                warn!(seat = active, client = &clients[active].nick, %err, "Action rejected");
                consecutive_rejections += 1;
                if consecutive_rejections >= max_rejections {
                    break MatchResult::ForfeitBySeat { seat: active, err };
                }
                rejected = Some(err.to_string());
            }
        }
    };

    if let Some(rec) = recorder {
        rec.write_match_recording()?;
    }

    Ok(result)
}
