//! Position rules for tic-tac-toe.
//!
//! Pure functions over a decoded [`Board`](crate::Board). The classifier
//! composes them in precedence order: win, then draw, then game point.

pub mod draw;
pub mod threat;
pub mod win;

pub use draw::is_full;
pub use threat::{Threats, find_threats};
pub use win::{WIN_CONDITIONS, completed_line};
