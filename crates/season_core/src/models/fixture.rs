use serde::{Deserialize, Serialize};

/// One scheduled meeting of two distinct teams. Home/away is not modeled;
/// `first`/`second` only fix the order scores are drawn and reported in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub first: String,
    pub second: String,
    /// 1 for the first all-play-all pass, 2 for the repeat
    pub leg: u8,
}

impl Fixture {
    pub fn new(first: impl Into<String>, second: impl Into<String>, leg: u8) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            leg,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.first == team || self.second == team
    }

    /// Pair key independent of order, for counting meetings.
    pub fn pair_key(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}
