mod board;
mod game_state;
mod grid;
mod local_game;
mod player;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use game_state::{GameEngine, Phase};
pub use grid::Grid;
pub use local_game::play_local_game;
pub use player::{COMPUTER_PLAYER_NAME, MoveSource, Player, RandomMoveSource, ScriptedMoveSource};
pub use settings::BoardSettings;
pub use types::{MoveError, Position, Seat, Token, Verdict};
pub use win_detector::{WIN_LENGTH, find_winning_run};

pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;
