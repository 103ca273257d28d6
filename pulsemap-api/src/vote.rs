#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

/// Up/down counters of a comment or reply.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Tally {
    pub upvotes: u32,
    pub downvotes: u32,
}

impl Tally {
    pub fn new(upvotes: u32, downvotes: u32) -> Tally {
        Tally { upvotes, downvotes }
    }

    /// Moves the local user's vote from `prior` to `next`: the prior direction
    /// loses one, the next gains one. Same-direction repeats must be filtered
    /// out by the caller before the ledger is consulted; this only shifts.
    /// Decrements saturate at zero, so a tally can never go negative even if a
    /// caller gets the prior vote wrong.
    pub fn shift(&mut self, prior: Option<VoteDirection>, next: VoteDirection) {
        debug_assert_ne!(prior, Some(next), "same-direction shift");
        match prior {
            Some(VoteDirection::Up) => self.upvotes = self.upvotes.saturating_sub(1),
            Some(VoteDirection::Down) => self.downvotes = self.downvotes.saturating_sub(1),
            None => (),
        }
        match next {
            VoteDirection::Up => self.upvotes += 1,
            VoteDirection::Down => self.downvotes += 1,
        }
    }

    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}

/// Anything that carries a vote tally. Lets the engine vote on comments and
/// replies through the same code path.
pub trait Votable {
    fn tally_mut(&mut self) -> &mut Tally;

    fn apply_vote(&mut self, prior: Option<VoteDirection>, next: VoteDirection) {
        self.tally_mut().shift(prior, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_vote_adds_one() {
        let mut t = Tally::default();
        t.shift(None, VoteDirection::Up);
        assert_eq!(t, Tally::new(1, 0));
    }

    #[test]
    fn flip_moves_the_vote() {
        let mut t = Tally::new(10, 3);
        t.shift(None, VoteDirection::Up);
        assert_eq!(t, Tally::new(11, 3));
        t.shift(Some(VoteDirection::Up), VoteDirection::Down);
        assert_eq!(t, Tally::new(10, 4));
        t.shift(Some(VoteDirection::Down), VoteDirection::Up);
        assert_eq!(t, Tally::new(11, 3));
    }

    #[test]
    fn decrement_saturates_at_zero() {
        let mut t = Tally::default();
        t.shift(Some(VoteDirection::Down), VoteDirection::Up);
        assert_eq!(t, Tally::new(1, 0));
    }

    #[test]
    fn score_can_go_negative() {
        assert_eq!(Tally::new(2, 5).score(), -3);
    }
}
