use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::{
    engine::Context,
    patch::{Identifiable, PatchSource},
    wire::{EncodeError, Field, Message},
    Error,
};

use super::{
    message::{MessageReceiver, SynthEvent},
    sustain::SustainState,
    voice::{NoteState, Schedule, VoiceState},
};

/// MIDI controller number of the sustain pedal.
pub const SUSTAIN_PEDAL: u8 = 64;
// Hysteresis on the pedal controller value.
const PEDAL_DOWN_ABOVE: u8 = 100;
const PEDAL_UP_BELOW: u8 = 60;

/// A polyphonic synth built from a fixed set of engine voices.
///
/// Free voices are reused oldest-released first; when none is free the
/// longest-sounding voice is stolen. Internally voices are addressed by slot
/// (index into `voices`); the engine voice number is only used on the wire.
pub struct VoicePool {
    voices: Vec<u32>,
    released: VecDeque<usize>,
    active: VecDeque<usize>,
    voice_of_note: HashMap<u8, usize>,
    note_of_voice: Vec<Option<u8>>,
    sustain: SustainState,
    patch: Option<u32>,
    patch_state: Option<String>,
}

impl VoicePool {
    /// Reserve `num_voices` engine voices and load `patch` onto them. A
    /// [`PatchSource::Wire`] patch is uploaded first under a new number.
    pub fn new(
        ctx: &mut Context,
        num_voices: usize,
        patch: impl Into<PatchSource>,
    ) -> Result<Self, Error> {
        let patch = match patch.into() {
            PatchSource::Stored(patch) => patch,
            PatchSource::Wire(body) => {
                let patch = ctx.next_patch_number();
                ctx.store_patch(patch, &body)?;
                patch
            }
        };

        let voices = ctx.reserve_voices(num_voices);
        let mut pool = Self {
            released: (0..voices.len()).collect(),
            active: VecDeque::with_capacity(voices.len()),
            voice_of_note: HashMap::with_capacity(voices.len()),
            note_of_voice: vec![None; voices.len()],
            sustain: SustainState::default(),
            patch: None,
            patch_state: None,
            voices,
        };
        if let Err(err) = pool.program_change(ctx, patch) {
            ctx.return_voices(&pool.voices);
            return Err(err);
        }
        Ok(pool)
    }

    pub fn with_patch(
        ctx: &mut Context,
        num_voices: usize,
        patch: &impl Identifiable,
    ) -> Result<Self, Error> {
        Self::new(ctx, num_voices, PatchSource::Stored(patch.id()))
    }

    pub fn note_on(
        &mut self,
        ctx: &mut Context,
        note: u8,
        velocity: f32,
        schedule: &Schedule,
    ) -> Result<(), Error> {
        if self.voices.is_empty() {
            return Err(Error::VoicePoolExhausted);
        }
        if velocity == 0.0 {
            return self.note_off(ctx, note, schedule);
        }

        // Already sounding: strike the same voice again.
        if let Some(&slot) = self.voice_of_note.get(&note) {
            let message = self.note_on_message(slot, note, velocity, schedule)?;
            ctx.send(&message)?;
            self.sustain.forget(note);
            return Ok(());
        }

        let slot = match self.released.front().copied() {
            Some(slot) => {
                let message = self.note_on_message(slot, note, velocity, schedule)?;
                ctx.send(&message)?;
                self.released.pop_front();
                slot
            }
            None => {
                let slot = *self.active.front().ok_or(Error::VoicePoolExhausted)?;
                let message = self.note_on_message(slot, note, velocity, schedule)?;
                self.steal_oldest(ctx)?;
                if let Err(err) = ctx.send(&message) {
                    // The stolen voice is silent now; keep it first in line.
                    self.released.push_front(slot);
                    return Err(err);
                }
                slot
            }
        };
        self.bind(slot, note);
        self.sustain.forget(note);
        Ok(())
    }

    /// Deferred while the pedal is down; ignored for notes that are not sounding.
    pub fn note_off(&mut self, ctx: &mut Context, note: u8, schedule: &Schedule) -> Result<(), Error> {
        if self.sustain.is_engaged() {
            self.sustain.defer(note);
            return Ok(());
        }
        self.release_note(ctx, note, schedule)
    }

    /// Lift the pedal, then silence every active voice oldest first.
    pub fn all_notes_off(&mut self, ctx: &mut Context) -> Result<(), Error> {
        self.sustain(ctx, false)?;
        while let Some(&slot) = self.active.front() {
            let message = self.note_off_message(slot, &Schedule::now())?;
            ctx.send(&message)?;
            self.active.pop_front();
            self.unbind(slot);
            self.released.push_back(slot);
        }
        Ok(())
    }

    pub fn sustain(&mut self, ctx: &mut Context, on: bool) -> Result<(), Error> {
        if on {
            self.sustain.engage();
            return Ok(());
        }
        // Flush in arrival order. A note is dropped from the deferred list only
        // once its note-off went out, so a transport failure leaves the pedal down.
        while let Some(note) = self.sustain.next_deferred() {
            self.release_note(ctx, note, &Schedule::now())?;
            self.sustain.pop_deferred();
        }
        self.sustain.disengage();
        Ok(())
    }

    /// Load another patch onto every voice. Sounding notes are not retriggered.
    pub fn program_change(&mut self, ctx: &mut Context, patch: u32) -> Result<(), Error> {
        if self.patch == Some(patch) {
            return Ok(());
        }
        if !self.voices.is_empty() {
            let message = Message::builder()
                .voices(&self.voices)
                .load_patch(patch)
                .build()?;
            ctx.send(&message)?;
        }
        debug!(patch, voices = ?self.voices, "program change");
        self.patch = Some(patch);
        self.patch_state = None;
        Ok(())
    }

    pub fn control_change(&mut self, ctx: &mut Context, controller: u8, value: u8) -> Result<(), Error> {
        if controller == SUSTAIN_PEDAL {
            let engaged = self.sustain.is_engaged();
            if value > PEDAL_DOWN_ABOVE && !engaged {
                self.sustain(ctx, true)?;
            }
            if value < PEDAL_UP_BELOW && engaged {
                self.sustain(ctx, false)?;
            }
        }
        Ok(())
    }

    /// Global pitch bend, -1.0 ..= 1.0.
    pub fn pitch_bend(&mut self, ctx: &mut Context, value: f32) -> Result<(), Error> {
        let message = Message::builder()
            .field(Field::PitchBend, value)
            .build()?;
        ctx.send(&message)
    }

    /// Silence everything and hand the voices back to the context. The pool
    /// rejects `note_on` afterwards.
    pub fn release(&mut self, ctx: &mut Context) -> Result<(), Error> {
        self.all_notes_off(ctx)?;
        ctx.return_voices(&self.voices);
        self.voices.clear();
        self.released.clear();
        self.note_of_voice.clear();
        Ok(())
    }

    pub fn handle_event(&mut self, ctx: &mut Context, event: SynthEvent) -> Result<(), Error> {
        match event {
            SynthEvent::NoteOn { note, velocity } => {
                self.note_on(ctx, note, velocity, &Schedule::now())
            }
            SynthEvent::NoteOff { note } => self.note_off(ctx, note, &Schedule::now()),
            SynthEvent::Sustain(on) => self.sustain(ctx, on),
            SynthEvent::ControlChange { controller, value } => {
                self.control_change(ctx, controller, value)
            }
            SynthEvent::ProgramChange(patch) => self.program_change(ctx, patch),
            SynthEvent::PitchBend(value) => self.pitch_bend(ctx, value),
            SynthEvent::AllNotesOff => self.all_notes_off(ctx),
        }
    }

    /// Apply queued events until the receiver is empty. Stops at the first error.
    pub fn drain(
        &mut self,
        ctx: &mut Context,
        rx: &mut impl MessageReceiver,
    ) -> Result<usize, Error> {
        let mut handled = 0;
        while let Some(event) = rx.pop() {
            self.handle_event(ctx, event)?;
            handled += 1;
        }
        Ok(handled)
    }

    pub fn voices(&self) -> &[u32] {
        &self.voices
    }

    pub fn num_voices(&self) -> usize {
        self.voices.len()
    }

    pub fn patch(&self) -> Option<u32> {
        self.patch
    }

    /// Client-side data tied to the current patch (UI state etc).
    pub fn patch_state(&self) -> Option<&str> {
        self.patch_state.as_deref()
    }

    pub fn set_patch_state(&mut self, state: Option<String>) {
        self.patch_state = state;
    }

    /// Engine voice currently playing `note`.
    pub fn voice_of_note(&self, note: u8) -> Option<u32> {
        self.voice_of_note.get(&note).map(|&slot| self.voices[slot])
    }

    /// Note bound to engine voice `voice`.
    pub fn note_of_voice(&self, voice: u32) -> Option<u8> {
        self.slot_of(voice).and_then(|slot| self.note_of_voice[slot])
    }

    pub fn note_state(&self, note: u8) -> NoteState {
        if !self.voice_of_note.contains_key(&note) {
            NoteState::Idle
        } else if self.sustain.is_deferred(note) {
            NoteState::Sustained
        } else {
            NoteState::Sounding
        }
    }

    pub fn voice_state(&self, voice: u32) -> Option<VoiceState> {
        let slot = self.slot_of(voice)?;
        Some(if self.note_of_voice[slot].is_some() {
            VoiceState::Active
        } else {
            VoiceState::Released
        })
    }

    /// Active voices, longest sounding first.
    pub fn active_voices(&self) -> impl Iterator<Item = u32> + '_ {
        self.active.iter().map(|&slot| self.voices[slot])
    }

    /// Free voices in reuse order.
    pub fn released_voices(&self) -> impl Iterator<Item = u32> + '_ {
        self.released.iter().map(|&slot| self.voices[slot])
    }

    pub fn is_sustaining(&self) -> bool {
        self.sustain.is_engaged()
    }

    pub fn deferred_notes(&self) -> impl Iterator<Item = u8> + '_ {
        self.sustain.deferred()
    }

    fn slot_of(&self, voice: u32) -> Option<usize> {
        self.voices.iter().position(|&v| v == voice)
    }

    fn release_note(&mut self, ctx: &mut Context, note: u8, schedule: &Schedule) -> Result<(), Error> {
        let Some(&slot) = self.voice_of_note.get(&note) else {
            return Ok(());
        };
        let message = self.note_off_message(slot, schedule)?;
        ctx.send(&message)?;
        self.unbind(slot);
        self.active.retain(|&s| s != slot);
        self.released.push_back(slot);
        Ok(())
    }

    /// Silence the oldest active voice and detach its note. The voice is left
    /// in neither queue; the caller rebinds it.
    fn steal_oldest(&mut self, ctx: &mut Context) -> Result<(), Error> {
        let Some(&slot) = self.active.front() else {
            return Err(Error::VoicePoolExhausted);
        };
        let message = self.note_off_message(slot, &Schedule::now())?;
        ctx.send(&message)?;
        self.active.pop_front();
        if let Some(stolen) = self.unbind(slot) {
            self.sustain.forget(stolen);
            debug!(note = stolen, voice = self.voices[slot], "stole voice");
        }
        Ok(())
    }

    fn bind(&mut self, slot: usize, note: u8) {
        self.voice_of_note.insert(note, slot);
        self.note_of_voice[slot] = Some(note);
        self.active.push_back(slot);
    }

    fn unbind(&mut self, slot: usize) -> Option<u8> {
        let note = self.note_of_voice[slot].take()?;
        self.voice_of_note.remove(&note);
        Some(note)
    }

    fn note_on_message(
        &self,
        slot: usize,
        note: u8,
        velocity: f32,
        schedule: &Schedule,
    ) -> Result<Message, EncodeError> {
        Message::builder()
            .voices(&self.voices[slot..=slot])
            .note(note as f64)
            .vel(velocity as f64)
            .time(schedule.time)
            .sequence(schedule.sequence.as_deref())
            .build()
    }

    fn note_off_message(&self, slot: usize, schedule: &Schedule) -> Result<Message, EncodeError> {
        Message::builder()
            .voices(&self.voices[slot..=slot])
            .vel(0.0)
            .time(schedule.time)
            .sequence(schedule.sequence.as_deref())
            .build()
    }
}

impl std::fmt::Debug for VoicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoicePool")
            .field("voices", &self.voices)
            .field("active", &self.active_voices().collect::<Vec<_>>())
            .field("released", &self.released_voices().collect::<Vec<_>>())
            .field("sustain", &self.sustain)
            .field("patch", &self.patch)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::engine::{CaptureTransport, Transport, TransportError};

    fn setup(num_voices: usize) -> (Context, CaptureTransport, VoicePool) {
        let capture = CaptureTransport::new();
        let mut ctx = Context::new(capture.clone());
        let pool = VoicePool::new(&mut ctx, num_voices, 1u32).unwrap();
        capture.take();
        (ctx, capture, pool)
    }

    fn assert_consistent(pool: &VoicePool) {
        for (&note, &slot) in &pool.voice_of_note {
            assert_eq!(pool.note_of_voice[slot], Some(note));
        }
        for (slot, note) in pool.note_of_voice.iter().enumerate() {
            if let Some(note) = note {
                assert_eq!(pool.voice_of_note.get(note), Some(&slot));
            }
        }
        let mut seen = HashSet::new();
        for &slot in pool.active.iter().chain(&pool.released) {
            assert!(seen.insert(slot), "slot {} queued twice", slot);
        }
        assert_eq!(seen.len(), pool.voices.len());
        for &slot in &pool.active {
            assert!(pool.note_of_voice[slot].is_some());
        }
        for &slot in &pool.released {
            assert!(pool.note_of_voice[slot].is_none());
        }
        if !pool.sustain.is_engaged() {
            assert_eq!(pool.sustain.deferred().count(), 0);
        }
    }

    #[test]
    fn test_construction_loads_patch_on_all_voices() {
        let capture = CaptureTransport::new();
        let mut ctx = Context::new(capture.clone());
        let pool = VoicePool::new(&mut ctx, 3, 7u32).unwrap();
        assert_eq!(capture.sent(), vec!["K7r0,1,2Z"]);
        assert_eq!(pool.patch(), Some(7));
        assert_eq!(pool.voices(), &[0, 1, 2]);
        assert_consistent(&pool);
    }

    #[test]
    fn test_wire_patch_is_stored_first() {
        let capture = CaptureTransport::new();
        let mut ctx = Context::new(capture.clone());
        let pool = VoicePool::new(&mut ctx, 2, PatchSource::Wire("v0w1Z".into())).unwrap();
        assert_eq!(capture.sent(), vec!["u1024,v0w1ZZ", "K1024r0,1Z"]);
        assert_eq!(pool.patch(), Some(1024));
    }

    #[test]
    fn test_free_voices_used_before_stealing() {
        let (mut ctx, capture, mut pool) = setup(2);
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        assert_consistent(&pool);
        pool.note_on(&mut ctx, 64, 1.0, &Schedule::now()).unwrap();
        assert_consistent(&pool);
        pool.note_on(&mut ctx, 67, 1.0, &Schedule::now()).unwrap();
        assert_consistent(&pool);
        assert_eq!(
            capture.sent(),
            vec!["n60l1r0Z", "n64l1r1Z", "l0r0Z", "n67l1r0Z"]
        );
        assert_eq!(pool.voice_of_note(60), None);
        assert_eq!(pool.voice_of_note(67), Some(0));
        assert_eq!(pool.note_of_voice(0), Some(67));
        assert_eq!(pool.active_voices().collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn test_retrigger_reuses_voice() {
        let (mut ctx, capture, mut pool) = setup(2);
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.note_on(&mut ctx, 60, 0.5, &Schedule::now()).unwrap();
        assert_eq!(capture.sent(), vec!["n60l1r0Z", "n60l0.5r0Z"]);
        assert_eq!(pool.active_voices().count(), 1);
        assert_consistent(&pool);
    }

    #[test]
    fn test_note_off_returns_voice_to_tail() {
        let (mut ctx, capture, mut pool) = setup(3);
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.note_off(&mut ctx, 60, &Schedule::at(250)).unwrap();
        assert_eq!(capture.sent(), vec!["n60l1r0Z", "l0t250r0Z"]);
        assert_eq!(pool.released_voices().collect::<Vec<_>>(), vec![1, 2, 0]);
        assert_consistent(&pool);
    }

    #[test]
    fn test_note_off_for_silent_note_is_no_op() {
        let (mut ctx, capture, mut pool) = setup(2);
        pool.note_off(&mut ctx, 72, &Schedule::now()).unwrap();
        assert!(capture.sent().is_empty());
    }

    #[test]
    fn test_zero_velocity_is_note_off() {
        let (mut ctx, capture, mut pool) = setup(2);
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.note_on(&mut ctx, 60, 0.0, &Schedule::now()).unwrap();
        assert_eq!(capture.sent(), vec!["n60l1r0Z", "l0r0Z"]);
        assert_eq!(pool.note_state(60), NoteState::Idle);
    }

    #[test]
    fn test_sustain_defers_and_flushes_in_order() {
        let (mut ctx, capture, mut pool) = setup(4);
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.note_on(&mut ctx, 64, 1.0, &Schedule::now()).unwrap();
        capture.take();

        pool.sustain(&mut ctx, true).unwrap();
        pool.note_off(&mut ctx, 64, &Schedule::now()).unwrap();
        pool.note_off(&mut ctx, 60, &Schedule::now()).unwrap();
        assert!(capture.sent().is_empty());
        assert_eq!(pool.note_state(60), NoteState::Sustained);
        assert_eq!(pool.deferred_notes().collect::<Vec<_>>(), vec![64, 60]);

        pool.sustain(&mut ctx, false).unwrap();
        assert_eq!(capture.sent(), vec!["l0r1Z", "l0r0Z"]);
        assert_eq!(pool.deferred_notes().count(), 0);
        assert_consistent(&pool);
    }

    #[test]
    fn test_restrike_cancels_deferred_off() {
        let (mut ctx, capture, mut pool) = setup(2);
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.sustain(&mut ctx, true).unwrap();
        pool.note_off(&mut ctx, 60, &Schedule::now()).unwrap();
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.sustain(&mut ctx, false).unwrap();
        assert_eq!(capture.sent(), vec!["n60l1r0Z", "n60l1r0Z"]);
        assert_eq!(pool.note_state(60), NoteState::Sounding);
    }

    #[test]
    fn test_stolen_note_leaves_deferred_set() {
        let (mut ctx, _capture, mut pool) = setup(1);
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.sustain(&mut ctx, true).unwrap();
        pool.note_off(&mut ctx, 60, &Schedule::now()).unwrap();
        pool.note_on(&mut ctx, 62, 1.0, &Schedule::now()).unwrap();
        assert_eq!(pool.deferred_notes().count(), 0);
        assert_consistent(&pool);
    }

    #[test]
    fn test_control_change_pedal_hysteresis() {
        let (mut ctx, _capture, mut pool) = setup(2);
        pool.control_change(&mut ctx, SUSTAIN_PEDAL, 90).unwrap();
        assert!(!pool.is_sustaining());
        pool.control_change(&mut ctx, SUSTAIN_PEDAL, 127).unwrap();
        assert!(pool.is_sustaining());
        pool.control_change(&mut ctx, SUSTAIN_PEDAL, 80).unwrap();
        assert!(pool.is_sustaining());
        pool.control_change(&mut ctx, SUSTAIN_PEDAL, 0).unwrap();
        assert!(!pool.is_sustaining());
        pool.control_change(&mut ctx, 1, 127).unwrap();
        assert!(!pool.is_sustaining());
    }

    #[test]
    fn test_all_notes_off_releases_fifo() {
        let (mut ctx, capture, mut pool) = setup(3);
        for note in [60, 64, 67] {
            pool.note_on(&mut ctx, note, 1.0, &Schedule::now()).unwrap();
        }
        pool.sustain(&mut ctx, true).unwrap();
        capture.take();
        pool.all_notes_off(&mut ctx).unwrap();
        assert_eq!(capture.sent(), vec!["l0r0Z", "l0r1Z", "l0r2Z"]);
        assert!(!pool.is_sustaining());
        assert_eq!(pool.active_voices().count(), 0);
        assert_consistent(&pool);
    }

    #[test]
    fn test_program_change_only_on_new_patch() {
        let (mut ctx, capture, mut pool) = setup(2);
        pool.set_patch_state(Some("cutoff=0.4".into()));
        pool.program_change(&mut ctx, 1).unwrap();
        assert!(capture.sent().is_empty());
        assert_eq!(pool.patch_state(), Some("cutoff=0.4"));
        pool.program_change(&mut ctx, 5).unwrap();
        assert_eq!(capture.sent(), vec!["K5r0,1Z"]);
        assert_eq!(pool.patch_state(), None);
    }

    #[test]
    fn test_release_returns_voices_and_rejects_notes() {
        let capture = CaptureTransport::new();
        let mut ctx = Context::new(capture.clone());
        let mut pool = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.release(&mut ctx).unwrap();
        assert_eq!(ctx.allocator().allocated().count(), 0);
        assert!(matches!(
            pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()),
            Err(Error::VoicePoolExhausted)
        ));
        assert_eq!(capture.sent().last().unwrap(), "l0r0Z");
    }

    #[test]
    fn test_zero_voice_pool_is_exhausted() {
        let capture = CaptureTransport::new();
        let mut ctx = Context::new(capture.clone());
        let mut pool = VoicePool::new(&mut ctx, 0, 1u32).unwrap();
        assert!(capture.sent().is_empty());
        assert!(matches!(
            pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()),
            Err(Error::VoicePoolExhausted)
        ));
        assert_consistent(&pool);
    }

    #[test]
    fn test_pools_get_disjoint_voices() {
        let mut ctx = Context::new(CaptureTransport::new());
        let a = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
        let mut b = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
        assert_eq!(a.voices(), &[0, 1]);
        assert_eq!(b.voices(), &[2, 3]);
        b.release(&mut ctx).unwrap();
        let c = VoicePool::new(&mut ctx, 3, 1u32).unwrap();
        assert_eq!(c.voices(), &[2, 3, 4]);
    }

    /// Accepts `budget` messages, then fails.
    struct Flaky {
        budget: usize,
    }

    impl Transport for Flaky {
        fn send(&mut self, _wire: &str) -> Result<(), TransportError> {
            if self.budget == 0 {
                return Err(TransportError::Closed);
            }
            self.budget -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_failed_send_leaves_state_untouched() {
        // program change + two notes succeed, the steal's note-off fails
        let mut ctx = Context::new(Flaky { budget: 3 });
        let mut pool = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.note_on(&mut ctx, 64, 1.0, &Schedule::now()).unwrap();
        assert!(pool.note_on(&mut ctx, 67, 1.0, &Schedule::now()).is_err());
        assert_eq!(pool.voice_of_note(60), Some(0));
        assert_eq!(pool.voice_of_note(67), None);
        assert_consistent(&pool);
    }

    #[test]
    fn test_failed_note_on_after_steal_frees_victim() {
        // the steal's note-off goes out, the new note-on does not
        let mut ctx = Context::new(Flaky { budget: 4 });
        let mut pool = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.note_on(&mut ctx, 64, 1.0, &Schedule::now()).unwrap();
        assert!(pool.note_on(&mut ctx, 67, 1.0, &Schedule::now()).is_err());
        assert_consistent(&pool);
        assert_eq!(pool.released_voices().collect::<Vec<_>>(), vec![0]);
        assert_eq!(pool.active_voices().collect::<Vec<_>>(), vec![1]);
        assert_eq!(pool.voice_of_note(60), None);
        assert_eq!(pool.voice_of_note(67), None);
        assert_eq!(pool.voice_state(0), Some(VoiceState::Released));
    }

    #[test]
    fn test_failed_flush_keeps_pedal_down() {
        let mut ctx = Context::new(Flaky { budget: 2 });
        let mut pool = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
        pool.sustain(&mut ctx, true).unwrap();
        pool.note_off(&mut ctx, 60, &Schedule::now()).unwrap();
        assert!(pool.sustain(&mut ctx, false).is_err());
        assert!(pool.is_sustaining());
        assert_eq!(pool.deferred_notes().collect::<Vec<_>>(), vec![60]);
        assert_consistent(&pool);
    }

    #[test]
    fn test_failed_construction_returns_voices() {
        let mut ctx = Context::new(Flaky { budget: 0 });
        assert!(VoicePool::new(&mut ctx, 2, 1u32).is_err());
        assert_eq!(ctx.allocator().allocated().count(), 0);
    }

    #[test]
    fn test_drain_applies_events_in_order() {
        let (mut ctx, capture, mut pool) = setup(2);
        let mut queue: VecDeque<SynthEvent> = VecDeque::from(vec![
            SynthEvent::NoteOn { note: 60, velocity: 1.0 },
            SynthEvent::Sustain(true),
            SynthEvent::NoteOff { note: 60 },
            SynthEvent::PitchBend(0.5),
            SynthEvent::Sustain(false),
        ]);
        assert_eq!(pool.drain(&mut ctx, &mut queue).unwrap(), 5);
        assert_eq!(capture.sent(), vec!["n60l1r0Z", "s0.5Z", "l0r0Z"]);
    }
}
