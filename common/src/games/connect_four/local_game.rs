use super::game_state::GameEngine;
use super::player::MoveSource;
use super::types::{MoveError, Verdict};

/// Upper bound on back-to-back rejected choices from one source.
pub const MAX_CONSECUTIVE_ILLEGAL_MOVES: usize = 64;

/// Plays a whole game between two in-process move sources.
///
/// A rejected choice is re-asked from the same source. A source that keeps
/// producing illegal columns aborts the game with its last error.
pub fn play_local_game(
    engine: &mut GameEngine,
    player1: &mut dyn MoveSource,
    player2: &mut dyn MoveSource,
) -> Result<Verdict, MoveError> {
    let mut rejected = 0;

    while engine.is_playing() {
        let source: &mut dyn MoveSource = match engine.current_index() {
            0 => &mut *player1,
            _ => &mut *player2,
        };

        match engine.play_turn(source) {
            Ok(_) => rejected = 0,
            Err(err) => {
                rejected += 1;
                if rejected >= MAX_CONSECUTIVE_ILLEGAL_MOVES {
                    return Err(err);
                }
            }
        }
    }

    engine.verdict().ok_or(MoveError::GameOver)
}
