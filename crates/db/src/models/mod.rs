pub mod game;

pub use game::GameRow;
