use std::collections::{HashSet, VecDeque};

use rand::Rng;
use tracing::{debug, info};

use crate::error::{Result, SelectionError};
use crate::roster::Roster;

/// Uniform integer source used for the draw.
pub trait RandomSource {
    /// Returns a value in `0..upper`. `upper` is never zero.
    fn index_below(&mut self, upper: usize) -> usize;
}

/// Adapter for any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn index_below(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

/// Replays a fixed script of positions, wrapped into range. Falls back to 0
/// once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = usize>>(script: I) -> Self {
        Self { script: script.into_iter().collect() }
    }
}

impl RandomSource for ScriptedSource {
    fn index_below(&mut self, upper: usize) -> usize {
        self.script.pop_front().unwrap_or(0) % upper
    }
}

/// Permission to animate and later commit exactly one pick.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    id: u64,
}

impl Ticket {
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickResult {
    /// Zero-based roster index.
    pub index: usize,
    /// One-based number shown to the user.
    pub number: usize,
    pub name: String,
    pub remaining: usize,
}

/// Tracks which roster entries have been drawn.
///
/// The remaining candidates are kept as an ascending index list that shrinks
/// by one per commit, so the random source picks a position in that list and
/// the draw never depends on hash iteration order.
#[derive(Debug)]
pub struct SelectionState {
    roster: Roster,
    remaining: Vec<usize>,
    history: Vec<usize>,
    outstanding: HashSet<u64>,
    next_ticket: u64,
}

impl SelectionState {
    pub fn new(roster: Roster) -> Self {
        let remaining = (0..roster.len()).collect();
        Self {
            roster,
            remaining,
            history: Vec::new(),
            outstanding: HashSet::new(),
            next_ticket: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn picked_count(&self) -> usize {
        self.history.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Drawn indices in commit order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.history.contains(&index)
    }

    pub fn is_exhausted(&self) -> bool {
        self.history.len() == self.roster.len()
    }

    /// Gate check before an animation starts. Does not touch the drawn set.
    pub fn request_pick(&mut self) -> Result<Ticket> {
        if self.is_exhausted() {
            return Err(SelectionError::Exhausted);
        }
        let id = self.next_ticket;
        self.next_ticket += 1;
        self.outstanding.insert(id);
        debug!(ticket = id, "pick requested");
        Ok(Ticket { id })
    }

    /// Draws one of the remaining entries uniformly and records it.
    ///
    /// The ticket is consumed by the first call, successful or not.
    pub fn commit_pick<R: RandomSource + ?Sized>(&mut self, ticket: &Ticket, rng: &mut R) -> Result<PickResult> {
        if !self.outstanding.remove(&ticket.id) {
            return Err(SelectionError::InvalidTicket(ticket.id));
        }
        if self.remaining.is_empty() {
            return Err(SelectionError::Exhausted);
        }

        let position = rng.index_below(self.remaining.len());
        let index = self.remaining.remove(position);
        self.history.push(index);

        let name = self.roster.name(index).unwrap_or_default().to_string();
        let result = PickResult {
            index,
            number: index + 1,
            name,
            remaining: self.remaining.len(),
        };
        info!(ticket = ticket.id, number = result.number, name = %result.name, remaining = result.remaining, "pick committed");
        Ok(result)
    }

    /// Releases a ticket without drawing.
    pub fn discard(&mut self, ticket: Ticket) {
        if self.outstanding.remove(&ticket.id) {
            debug!(ticket = ticket.id, "ticket discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> SelectionState {
        SelectionState::new(Roster::new(["A", "B", "C"]))
    }

    #[test]
    fn test_request_has_no_side_effect() {
        let mut state = abc();
        let _ticket = state.request_pick().unwrap();
        assert_eq!(state.picked_count(), 0);
        assert_eq!(state.remaining_count(), 3);
        assert!(!state.is_exhausted());
    }

    #[test]
    fn test_scripted_draw_order() {
        let mut state = abc();
        let mut rng = ScriptedSource::new([1, 0, 0]);

        let t = state.request_pick().unwrap();
        let first = state.commit_pick(&t, &mut rng).unwrap();
        assert_eq!((first.name.as_str(), first.number, first.remaining), ("B", 2, 2));

        let t = state.request_pick().unwrap();
        let second = state.commit_pick(&t, &mut rng).unwrap();
        assert_eq!((second.name.as_str(), second.number, second.remaining), ("A", 1, 1));

        let t = state.request_pick().unwrap();
        let third = state.commit_pick(&t, &mut rng).unwrap();
        assert_eq!((third.name.as_str(), third.number, third.remaining), ("C", 3, 0));

        assert!(state.is_exhausted());
        assert_eq!(state.request_pick(), Err(SelectionError::Exhausted));
        assert_eq!(state.history(), &[1, 0, 2]);
    }

    #[test]
    fn test_double_commit_is_rejected() {
        let mut state = abc();
        let mut rng = ScriptedSource::default();
        let t = state.request_pick().unwrap();
        state.commit_pick(&t, &mut rng).unwrap();

        let err = state.commit_pick(&t, &mut rng).unwrap_err();
        assert_eq!(err, SelectionError::InvalidTicket(t.id()));
        assert_eq!(state.picked_count(), 1);
    }

    #[test]
    fn test_discarded_ticket_cannot_commit() {
        let mut state = abc();
        let mut rng = ScriptedSource::default();
        let t = state.request_pick().unwrap();
        let id = t.id();
        state.discard(t);

        let stale = Ticket { id };
        assert_eq!(state.commit_pick(&stale, &mut rng), Err(SelectionError::InvalidTicket(id)));
        assert_eq!(state.picked_count(), 0);
    }

    #[test]
    fn test_is_used_tracks_commits_only() {
        let mut state = abc();
        let mut rng = ScriptedSource::new([2]);

        let discarded = state.request_pick().unwrap();
        state.discard(discarded);
        assert!((0..3).all(|i| !state.is_used(i)));

        let t = state.request_pick().unwrap();
        let pick = state.commit_pick(&t, &mut rng).unwrap();
        assert_eq!(pick.index, 2);
        assert!(state.is_used(2));
        assert!(!state.is_used(0));
        assert!(!state.is_used(1));
        assert!(!state.is_used(3));
    }

    #[test]
    fn test_last_entry_still_drawable() {
        let mut state = SelectionState::new(Roster::new(["Solo"]));
        let mut rng = ScriptedSource::new([7]);
        let t = state.request_pick().unwrap();
        let pick = state.commit_pick(&t, &mut rng).unwrap();
        assert_eq!(pick.name, "Solo");
        assert_eq!(pick.remaining, 0);
        assert!(state.is_exhausted());
    }

    #[test]
    fn test_commit_after_exhaustion_by_other_ticket() {
        let mut state = SelectionState::new(Roster::new(["Solo"]));
        let mut rng = ScriptedSource::default();
        let first = state.request_pick().unwrap();
        let second = state.request_pick().unwrap();
        state.commit_pick(&first, &mut rng).unwrap();

        assert_eq!(state.commit_pick(&second, &mut rng), Err(SelectionError::Exhausted));
        // consumed even though nothing was drawn
        assert_eq!(state.commit_pick(&second, &mut rng), Err(SelectionError::InvalidTicket(second.id())));
    }

    #[test]
    fn test_empty_roster_is_exhausted() {
        let mut state = SelectionState::new(Roster::new(Vec::<String>::new()));
        assert!(state.is_exhausted());
        assert_eq!(state.request_pick(), Err(SelectionError::Exhausted));
    }

    #[test]
    fn test_duplicate_names_are_distinct_slots() {
        let mut state = SelectionState::new(Roster::new(["Giovanni", "Giovanni"]));
        let mut rng = ScriptedSource::default();
        let t = state.request_pick().unwrap();
        let a = state.commit_pick(&t, &mut rng).unwrap();
        let t = state.request_pick().unwrap();
        let b = state.commit_pick(&t, &mut rng).unwrap();
        assert_eq!(a.name, b.name);
        assert_ne!(a.index, b.index);
        assert!(state.is_exhausted());
    }

    #[test]
    fn test_rng_source_stays_in_range() {
        use rand::SeedableRng;
        let mut rng = RngSource(rand::rngs::StdRng::seed_from_u64(7));
        for upper in 1..50 {
            assert!(rng.index_below(upper) < upper);
        }
    }
}
