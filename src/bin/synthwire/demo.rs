use std::time::{SystemTime, UNIX_EPOCH};

use color_eyre::eyre::WrapErr;
use synthwire::{
    engine::{Transport, TransportError, UdpTransport},
    patch::presets,
    Context, Schedule, VoicePool,
};
use tracing::info;

const ARPEGGIO: [u8; 8] = [60, 64, 67, 72, 76, 72, 67, 64];
const STEP_MS: i64 = 150;

/// Prints each message instead of sending it.
struct Stdout;

impl Transport for Stdout {
    fn send(&mut self, wire: &str) -> Result<(), TransportError> {
        println!("{}", wire);
        Ok(())
    }
}

pub fn run(voices: usize, udp: Option<&str>) -> color_eyre::Result<()> {
    let mut ctx = match udp {
        Some(target) => {
            let transport = UdpTransport::connect(target)
                .wrap_err_with(|| format!("connecting to {}", target))?;
            info!(addr = %transport.target(), "sending to engine");
            Context::new(transport)
        }
        None => Context::new(Stdout),
    };

    let patch = presets::simple_sine(&mut ctx)?;
    patch.store(&mut ctx)?;
    let mut pool = VoicePool::with_patch(&mut ctx, voices, &patch)?;

    // Schedule everything relative to now on the engine clock.
    let start = now_ms();
    for (step, &note) in ARPEGGIO.iter().enumerate() {
        let on = start + step as i64 * STEP_MS;
        pool.note_on(&mut ctx, note, 0.8, &Schedule::at(on))?;
        pool.note_off(&mut ctx, note, &Schedule::at(on + STEP_MS * 3 / 4))?;
    }
    pool.release(&mut ctx)?;

    ctx.reset(None)?;
    Ok(())
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
