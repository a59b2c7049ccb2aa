use std::collections::VecDeque;

/// Sustain pedal state. Deferred notes are kept in the order their note-offs
/// arrived and are only non-empty while the pedal is down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SustainState {
    engaged: bool,
    deferred: VecDeque<u8>,
}

impl SustainState {
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn engage(&mut self) {
        self.engaged = true;
    }

    /// Only valid once every deferred note has been flushed.
    pub(crate) fn disengage(&mut self) {
        debug_assert!(self.deferred.is_empty());
        self.engaged = false;
    }

    pub(crate) fn defer(&mut self, note: u8) {
        if !self.deferred.contains(&note) {
            self.deferred.push_back(note);
        }
    }

    /// Drop a deferred note-off, e.g. because the note was struck again.
    pub(crate) fn forget(&mut self, note: u8) {
        self.deferred.retain(|&n| n != note);
    }

    pub(crate) fn next_deferred(&self) -> Option<u8> {
        self.deferred.front().copied()
    }

    pub(crate) fn pop_deferred(&mut self) -> Option<u8> {
        self.deferred.pop_front()
    }

    pub fn is_deferred(&self, note: u8) -> bool {
        self.deferred.contains(&note)
    }

    pub fn deferred(&self) -> impl Iterator<Item = u8> + '_ {
        self.deferred.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defer_keeps_first_arrival_order() {
        let mut state = SustainState::default();
        state.engage();
        state.defer(64);
        state.defer(60);
        state.defer(64);
        assert_eq!(state.deferred().collect::<Vec<_>>(), vec![64, 60]);
        state.forget(64);
        assert_eq!(state.next_deferred(), Some(60));
        assert_eq!(state.pop_deferred(), Some(60));
        state.disengage();
        assert!(!state.is_engaged());
    }
}
