//! Monsters
//!
//! [`Monster`] is both the opponent type for man-vs-monster fights and the
//! base record every character builds on.

mod monst;
mod template;

pub use monst::{Monster, MonsterStats};
pub use template::MonsterTemplate;
