use quoridor::{Action, Coordinate, MatchSnapshot, Okay, Request};

/// A trait to simplify writing seat clients.
///
/// Implementors only make the decisions; [`Seat::run`] speaks the
/// referee's line-delimited JSON protocol.
pub trait Seat {
    fn new_match(&mut self, seat: usize, board_size: i8, walls_per_seat: usize);
    fn take_turn(
        &mut self,
        snapshot: MatchSnapshot,
        legal_destinations: Vec<Coordinate>,
        rejected: Option<String>,
    ) -> anyhow::Result<Action>;
    fn match_over(&mut self, winner: usize);

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because stdin.read_line() appends to the buffer
            use std::io::BufRead;
            let num_bytes_read = stdin.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the referee has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            match req {
                Request::NewMatch {
                    seat,
                    board_size,
                    walls_per_seat,
                } => {
                    self.new_match(seat, board_size, walls_per_seat);
                    serde_json::to_writer(&mut stdout, &Okay())?;
                }
                Request::Turn {
                    snapshot,
                    legal_destinations,
                    rejected,
                } => {
                    let action = self.take_turn(snapshot, legal_destinations, rejected)?;
                    serde_json::to_writer(&mut stdout, &action)?;
                }
                Request::MatchOver { winner } => {
                    self.match_over(winner);
                    serde_json::to_writer(&mut stdout, &Okay())?;
                }
                Request::Bye => break Ok(()),
            }
            use std::io::Write;
            writeln!(stdout)?;
            stdout.flush()?;
        }
    }
}
