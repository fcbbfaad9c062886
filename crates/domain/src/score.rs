use std::fmt;

use serde::{Deserialize, Serialize};

/// Rivalry score between two players, from one side's point of view.
///
/// `own` is how many times the viewer's side wounded the other, `theirs` the
/// reverse. Only wounds between these two players count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonalScore {
    pub own: u32,
    pub theirs: u32,
}

impl PersonalScore {
    pub fn new(own: u32, theirs: u32) -> Self {
        Self { own, theirs }
    }
}

impl fmt::Display for PersonalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.own, self.theirs)
    }
}
