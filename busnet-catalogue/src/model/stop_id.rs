use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// index of a [`super::Stop`] in the catalogue's stop arena.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct StopId(pub usize);

impl Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
