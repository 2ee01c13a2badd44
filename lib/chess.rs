mod bitboard;
mod board;
mod en_passant;
mod file;
mod r#move;
mod outcome;
mod position;
mod rank;
mod square;
mod team;

pub use bitboard::*;
pub use board::*;
pub use en_passant::*;
pub use file::*;
pub use outcome::*;
pub use position::*;
pub use r#move::*;
pub use rank::*;
pub use square::*;
pub use team::*;
