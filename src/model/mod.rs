pub mod game;
pub mod metadata;

pub use game::*;
pub use metadata::*;
