//! Turn state: which cards are face-up and which are matched.
//!
//! ## Invariants
//!
//! - At most two positions are face-up at once
//! - A matched position never becomes face-up again
//! - `matched_count` is the number of locked pairs, so it is always half the
//!   number of matched positions

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Transient state of one play-through.
#[derive(Clone, Debug, Default)]
pub struct TurnState {
    face_up: SmallVec<[usize; 2]>,
    matched: FxHashSet<usize>,
    matched_count: usize,
}

impl TurnState {
    /// Fresh state: nothing face-up, nothing matched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Face-up positions in reveal order.
    #[must_use]
    pub fn face_up(&self) -> &[usize] {
        &self.face_up
    }

    /// Number of matched pairs.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    /// Check if a position belongs to a matched pair.
    #[must_use]
    pub fn is_matched(&self, position: usize) -> bool {
        self.matched.contains(&position)
    }

    /// Check if a position is currently face-up.
    #[must_use]
    pub fn is_face_up(&self, position: usize) -> bool {
        self.face_up.contains(&position)
    }

    /// Two cards are face-up and waiting to be resolved.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.face_up.len() == 2
    }

    /// Check if a position may be revealed right now.
    #[must_use]
    pub fn can_reveal(&self, position: usize) -> bool {
        !self.is_full() && !self.is_face_up(position) && !self.is_matched(position)
    }

    /// Turn a card face-up.
    ///
    /// Returns `false` and leaves the state untouched if the position may
    /// not be revealed.
    pub fn reveal(&mut self, position: usize) -> bool {
        if !self.can_reveal(position) {
            return false;
        }
        self.face_up.push(position);
        true
    }

    /// Remove and return the two face-up positions, if there are two.
    pub fn take_pair(&mut self) -> Option<[usize; 2]> {
        if !self.is_full() {
            return None;
        }
        let pair = [self.face_up[0], self.face_up[1]];
        self.face_up.clear();
        Some(pair)
    }

    /// Permanently lock a pair of positions.
    pub fn lock_pair(&mut self, positions: [usize; 2]) {
        self.matched.extend(positions);
        self.matched_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_limits() {
        let mut turn = TurnState::new();

        assert!(turn.reveal(0));
        assert!(!turn.reveal(0), "same card twice");
        assert!(turn.reveal(3));
        assert!(turn.is_full());
        assert!(!turn.reveal(5), "third card while two are open");

        assert_eq!(turn.face_up(), &[0, 3]);
    }

    #[test]
    fn test_take_pair() {
        let mut turn = TurnState::new();
        assert_eq!(turn.take_pair(), None);

        turn.reveal(4);
        assert_eq!(turn.take_pair(), None);
        assert_eq!(turn.face_up(), &[4]);

        turn.reveal(1);
        assert_eq!(turn.take_pair(), Some([4, 1]));
        assert!(turn.face_up().is_empty());
    }

    #[test]
    fn test_locked_pair_cannot_reopen() {
        let mut turn = TurnState::new();
        turn.reveal(2);
        turn.reveal(5);
        let pair = turn.take_pair().unwrap();
        turn.lock_pair(pair);

        assert_eq!(turn.matched_count(), 1);
        assert!(turn.is_matched(2));
        assert!(turn.is_matched(5));
        assert!(!turn.reveal(2));
        assert!(!turn.reveal(5));
        assert!(turn.face_up().is_empty());
    }
}
