//! Game rules for obstacle tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the controller and the invariant checks share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{is_winner, winning_line};
