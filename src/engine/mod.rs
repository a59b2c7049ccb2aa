// Purpose: the link to the synthesis engine
// Owns everything that used to be process-wide: transport, capture buffer,
// patch counter, voice ownership.

pub mod allocator;
pub mod config;
pub mod sample;
pub mod transport;

use tracing::{debug, trace};

pub use self::{
    allocator::VoiceAllocator,
    config::ContextConfig,
    sample::SampleHeader,
    transport::{CaptureTransport, NullTransport, Transport, TransportError, UdpTransport},
};
use crate::{
    wire::{consts::RESET_ALL_OSCS, Field, Message},
    Error,
};

type TimeSource = Box<dyn FnMut() -> i64 + Send>;

#[derive(Debug, Default)]
enum Capture {
    #[default]
    Idle,
    /// Messages are sent and also kept
    Recording(Vec<String>),
    /// Messages are kept instead of sent, then stored as one patch
    StoringPatch(Vec<String>),
}

/// Explicit engine context. Pools and patch factories take it by `&mut`.
///
/// Single-threaded: share across threads only behind your own lock.
pub struct Context {
    transport: Box<dyn Transport + Send>,
    config: ContextConfig,
    capture: Capture,
    next_patch: u32,
    allocator: VoiceAllocator,
    time_source: Option<TimeSource>,
}

impl Context {
    pub fn new(transport: impl Transport + Send + 'static) -> Self {
        Self::with_config(transport, ContextConfig::default())
    }

    pub fn with_config(transport: impl Transport + Send + 'static, config: ContextConfig) -> Self {
        Self {
            transport: Box::new(transport),
            next_patch: config.first_patch_number,
            config,
            capture: Capture::Idle,
            allocator: VoiceAllocator::new(),
            time_source: None,
        }
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Swap the transport, returning the previous one.
    pub fn replace_transport(
        &mut self,
        transport: impl Transport + Send + 'static,
    ) -> Box<dyn Transport + Send> {
        std::mem::replace(&mut self.transport, Box::new(transport))
    }

    /// Stamp `time` on every message that does not carry one.
    pub fn set_time_source(&mut self, source: impl FnMut() -> i64 + Send + 'static) {
        self.time_source = Some(Box::new(source));
    }

    pub fn clear_time_source(&mut self) {
        self.time_source = None;
    }

    /// Encode and deliver one message.
    pub fn send(&mut self, message: &Message) -> Result<(), Error> {
        if self.config.show_warnings {
            message.log_warnings();
        }
        let stamp = match self.time_source.as_mut() {
            Some(source) if !message.contains(Field::Time) => Some(source()),
            _ => None,
        };
        match stamp {
            Some(time) => {
                let mut stamped = message.clone();
                stamped.or_insert(Field::Time, time)?;
                self.send_raw(&stamped.to_wire())
            }
            None => self.send_raw(&message.to_wire()),
        }
    }

    /// Deliver an already-encoded string verbatim.
    pub fn send_raw(&mut self, wire: &str) -> Result<(), Error> {
        if let Capture::StoringPatch(buffer) = &mut self.capture {
            buffer.push(wire.to_string());
            return Ok(());
        }
        trace!(wire, "send");
        self.transport.send(wire)?;
        if let Capture::Recording(buffer) = &mut self.capture {
            buffer.push(wire.to_string());
        }
        Ok(())
    }

    /// Start keeping a copy of every sent message. Sessions do not nest.
    pub fn start_recording(&mut self) -> Result<(), Error> {
        self.begin_capture(Capture::Recording(Vec::new()))
    }

    /// End the session and return what was sent, in order.
    pub fn stop_recording(&mut self) -> Result<Vec<String>, Error> {
        match std::mem::take(&mut self.capture) {
            Capture::Recording(buffer) => Ok(buffer),
            other => {
                self.capture = other;
                Err(Error::RecordingInactive)
            }
        }
    }

    pub fn is_recording(&self) -> bool {
        !matches!(self.capture, Capture::Idle)
    }

    /// Divert messages into a buffer instead of the transport, to be stored
    /// as one patch by [`Context::stop_store_patch`].
    pub fn start_store_patch(&mut self) -> Result<(), Error> {
        self.begin_capture(Capture::StoringPatch(Vec::new()))
    }

    /// Send everything captured since `start_store_patch` as patch `patch`.
    pub fn stop_store_patch(&mut self, patch: u32) -> Result<(), Error> {
        match std::mem::take(&mut self.capture) {
            Capture::StoringPatch(buffer) => self.store_patch(patch, &buffer.concat()),
            other => {
                self.capture = other;
                Err(Error::RecordingInactive)
            }
        }
    }

    /// Cache `body` (one or more complete messages) in the engine under `patch`.
    pub fn store_patch(&mut self, patch: u32, body: &str) -> Result<(), Error> {
        let message = Message::builder()
            .store_patch(format!("{},{}", patch, body))
            .build()?;
        debug!(patch, len = body.len(), "storing patch");
        self.send(&message)
    }

    fn begin_capture(&mut self, capture: Capture) -> Result<(), Error> {
        if self.is_recording() {
            return Err(Error::RecordingActive);
        }
        self.capture = capture;
        Ok(())
    }

    /// Mint a fresh handle for a client-defined patch.
    pub fn next_patch_number(&mut self) -> u32 {
        let patch = self.next_patch;
        self.next_patch += 1;
        patch
    }

    pub fn reserve_voices(&mut self, count: usize) -> Vec<u32> {
        self.allocator.reserve(count)
    }

    pub fn return_voices(&mut self, voices: &[u32]) {
        self.allocator.release(voices);
    }

    pub fn allocator(&self) -> &VoiceAllocator {
        &self.allocator
    }

    /// Forget voice ownership and restart the patch counter. Pools built
    /// before this call must not be used afterwards.
    pub fn reset_state(&mut self) {
        self.allocator.clear();
        self.next_patch = self.config.first_patch_number;
    }

    /// Reset one oscillator, or all of them.
    pub fn reset(&mut self, osc: Option<u32>) -> Result<(), Error> {
        let target = osc.map_or(RESET_ALL_OSCS, i64::from);
        let message = Message::builder().field(Field::Reset, target).build()?;
        self.send(&message)
    }

    /// Global chorus. `None` leaves that parameter as the engine has it.
    pub fn chorus(
        &mut self,
        level: Option<f64>,
        max_delay: Option<f64>,
        freq: Option<f64>,
        depth: Option<f64>,
    ) -> Result<(), Error> {
        self.send_effect(Field::Chorus, vec![level, max_delay, freq, depth])
    }

    /// Global reverb. `None` leaves that parameter as the engine has it.
    pub fn reverb(
        &mut self,
        level: Option<f64>,
        liveness: Option<f64>,
        damping: Option<f64>,
        xover_hz: Option<f64>,
    ) -> Result<(), Error> {
        self.send_effect(Field::Reverb, vec![level, liveness, damping, xover_hz])
    }

    /// Global echo. `None` leaves that parameter as the engine has it.
    pub fn echo(
        &mut self,
        level: Option<f64>,
        delay_ms: Option<f64>,
        max_delay_ms: Option<f64>,
        feedback: Option<f64>,
        filter_coef: Option<f64>,
    ) -> Result<(), Error> {
        self.send_effect(
            Field::Echo,
            vec![level, delay_ms, max_delay_ms, feedback, filter_coef],
        )
    }

    // Positional list; every slot is emitted, unset ones blank.
    fn send_effect(&mut self, field: Field, params: Vec<Option<f64>>) -> Result<(), Error> {
        let message = Message::builder().field(field, params).build()?;
        self.send(&message)
    }

    /// Upload 16-bit PCM as a sample patch: header first, then base64 chunks.
    pub fn load_sample(
        &mut self,
        header: &SampleHeader,
        pcm: &[u8],
        stereo: bool,
    ) -> Result<(), Error> {
        let mono = sample::mono_pcm(pcm, stereo);
        let frames = sample::frame_count(&mono);
        let message = header.message(frames)?;
        self.send(&message)?;
        let chunk_frames = self.config.effective_chunk_frames();
        for payload in sample::chunk_payloads(&mono, chunk_frames) {
            self.send_raw(&payload)?;
        }
        debug!(patch = header.patch, frames, "uploaded sample");
        Ok(())
    }

    pub fn unload_sample(&mut self, patch: u32) -> Result<(), Error> {
        let message = sample::unload_message(patch)?;
        self.send(&message)
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("capture", &self.capture)
            .field("next_patch", &self.next_patch)
            .field("allocator", &self.allocator)
            .finish_non_exhaustive()
    }
}
