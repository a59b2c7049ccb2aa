use synthwire::{
    engine::CaptureTransport,
    io::{midi_to_event, MidiEvent},
    patch::{presets, PatchSource},
    synth::{NoteState, SynthEvent, VoiceState},
    Context, Error, Schedule, VoicePool,
};

fn context() -> (Context, CaptureTransport) {
    let capture = CaptureTransport::new();
    (Context::new(capture.clone()), capture)
}

fn assert_maps_agree(pool: &VoicePool, notes: &[u8]) {
    for &note in notes {
        if let Some(voice) = pool.voice_of_note(note) {
            assert_eq!(pool.note_of_voice(voice), Some(note));
            assert_eq!(pool.voice_state(voice), Some(VoiceState::Active));
        }
    }
    for &voice in pool.voices() {
        if let Some(note) = pool.note_of_voice(voice) {
            assert_eq!(pool.voice_of_note(note), Some(voice));
        }
    }
}

#[test]
fn two_voices_steal_oldest_note() {
    let (mut ctx, capture) = context();
    let mut pool = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
    capture.take();

    for note in [60, 64, 67] {
        pool.note_on(&mut ctx, note, 1.0, &Schedule::now()).unwrap();
        assert_maps_agree(&pool, &[60, 64, 67]);
    }

    let sent = capture.take();
    let note_offs: Vec<_> = sent.iter().filter(|m| m.starts_with("l0")).collect();
    assert_eq!(note_offs, vec!["l0r0Z"]);
    let off = sent.iter().position(|m| m == "l0r0Z").unwrap();
    let on = sent.iter().position(|m| m == "n67l1r0Z").unwrap();
    assert!(off < on);
    assert_eq!(pool.note_state(60), NoteState::Idle);
}

#[test]
fn sustain_defers_note_off() {
    let (mut ctx, capture) = context();
    let mut pool = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
    pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()).unwrap();
    capture.take();

    pool.sustain(&mut ctx, true).unwrap();
    pool.note_off(&mut ctx, 60, &Schedule::now()).unwrap();
    assert!(capture.sent().is_empty());
    assert_eq!(pool.deferred_notes().collect::<Vec<_>>(), vec![60]);

    pool.sustain(&mut ctx, false).unwrap();
    assert_eq!(capture.sent(), vec!["l0r0Z"]);
    assert_eq!(pool.deferred_notes().count(), 0);
}

#[test]
fn scheduled_notes_carry_time_and_sequence() {
    let (mut ctx, capture) = context();
    let mut pool = VoicePool::new(&mut ctx, 1, 1u32).unwrap();
    capture.take();
    pool.note_on(&mut ctx, 48, 0.5, &Schedule::at(1000).sequence("0,500,1"))
        .unwrap();
    assert_eq!(capture.sent(), vec!["n48l0.5t1000r0H0,500,1Z"]);
}

#[test]
fn preset_pool_uploads_then_plays() {
    let (mut ctx, capture) = context();
    let def = presets::closed_hat(&mut ctx).unwrap();
    let mut pool = VoicePool::new(&mut ctx, 2, PatchSource::Wire(def.body())).unwrap();
    pool.note_on(&mut ctx, 42, 1.0, &Schedule::now()).unwrap();
    assert_eq!(
        capture.sent(),
        vec![
            format!("u1025,{}Z", def.body()),
            "K1025r0,1Z".to_string(),
            "n42l1r0Z".to_string(),
        ]
    );
}

#[test]
fn released_pool_rejects_notes() {
    let (mut ctx, _) = context();
    let mut pool = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
    pool.release(&mut ctx).unwrap();
    assert!(matches!(
        pool.note_on(&mut ctx, 60, 1.0, &Schedule::now()),
        Err(Error::VoicePoolExhausted)
    ));
    let next = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
    assert_eq!(next.voices(), &[0, 1]);
}

#[test]
fn midi_stream_drives_pool() {
    let (mut ctx, capture) = context();
    let mut pool = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
    capture.take();

    let stream: [&[u8]; 5] = [
        &[0x90, 60, 127],
        &[0xb0, 64, 127],
        &[0x80, 60, 0],
        &[0x91, 62, 127], // other channel
        &[0xb0, 64, 0],
    ];
    for bytes in stream {
        let event = MidiEvent::parse(bytes).and_then(|midi| midi_to_event(midi, 0));
        if let Some(event) = event {
            pool.handle_event(&mut ctx, event).unwrap();
        }
    }
    assert_eq!(capture.sent(), vec!["n60l1r0Z", "l0r0Z"]);
}

#[cfg(feature = "rtrb")]
#[test]
fn ring_buffer_events_are_drained() {
    let (mut ctx, capture) = context();
    let mut pool = VoicePool::new(&mut ctx, 2, 1u32).unwrap();
    capture.take();

    let (mut tx, mut rx) = rtrb::RingBuffer::<SynthEvent>::new(8);
    tx.push(SynthEvent::NoteOn { note: 60, velocity: 1.0 }).unwrap();
    tx.push(SynthEvent::ProgramChange(9)).unwrap();
    tx.push(SynthEvent::AllNotesOff).unwrap();

    assert_eq!(pool.drain(&mut ctx, &mut rx).unwrap(), 3);
    assert_eq!(capture.sent(), vec!["n60l1r0Z", "K9r0,1Z", "l0r0Z"]);
    assert_eq!(pool.patch(), Some(9));
}
