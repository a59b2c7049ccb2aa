// Purpose: Juno-106 patch dumps
// 18 bytes: 16 sliders, then two bytes of switches.

pub mod factory;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use factory::{factory_patch, FACTORY_PATCHES, FACTORY_PATCH_COUNT};

pub const SYSEX_LEN: usize = 18;
const SLIDER_COUNT: usize = 16;
const SWITCHES_1: usize = 16;
const SWITCHES_2: usize = 17;
const SLIDER_MAX: f32 = 127.0;

/// Chorus switch. The panel has off / I / II; `Both` is the I+II combination
/// some later firmware exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChorusMode {
    #[default]
    Off,
    One,
    Two,
    Both,
}

// Byte 16 bits 5-6. Bit 5 is "chorus off", bit 6 is "I, not II", so the
// natural ordering is scrambled:
//   0b00 -> II
//   0b01 -> off
//   0b10 -> I
//   0b11 -> off + I, read as I+II
const CHORUS_FROM_BITS: [ChorusMode; 4] = [
    ChorusMode::Two,
    ChorusMode::Off,
    ChorusMode::One,
    ChorusMode::Both,
];

impl ChorusMode {
    fn from_bits(bits: u8) -> Self {
        CHORUS_FROM_BITS[(bits & 0b11) as usize]
    }

    fn to_bits(self) -> u8 {
        match self {
            ChorusMode::Two => 0b00,
            ChorusMode::Off => 0b01,
            ChorusMode::One => 0b10,
            ChorusMode::Both => 0b11,
        }
    }
}

/// High-pass filter slider position, 0 (bass boost) to 3 (most cut).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HpfMode {
    Boost,
    #[default]
    Flat,
    Cut1,
    Cut2,
}

// Byte 17 bits 3-4 store the slider position bit-reversed and inverted.
const HPF_FROM_BITS: [HpfMode; 4] = [HpfMode::Cut2, HpfMode::Cut1, HpfMode::Flat, HpfMode::Boost];

impl HpfMode {
    pub fn position(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        HPF_FROM_BITS[(bits & 0b11) as usize]
    }

    fn to_bits(self) -> u8 {
        3 - self.position()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SysexError {
    /// A patch dump is exactly 18 bytes
    LengthMismatch { expected: usize, actual: usize },
    /// A set bit the layout does not define (bit 7 anywhere, bits 6-7 of byte 17)
    DataByteOutOfRange { index: usize, value: u8 },
}

impl std::fmt::Display for SysexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SysexError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Sysex length mismatch: expected {} bytes, got {} bytes",
                    expected, actual
                )
            }
            SysexError::DataByteOutOfRange { index, value } => {
                write!(f, "Sysex byte {} out of range: {:#04x}", index, value)
            }
        }
    }
}

impl std::error::Error for SysexError {}

/// Decoded Juno-106 patch. Sliders are normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JunoPatch {
    pub name: Option<String>,

    pub lfo_rate: f32,
    pub lfo_delay_time: f32,
    pub dco_lfo: f32,
    pub dco_pwm: f32,
    pub dco_noise: f32,
    pub vcf_freq: f32,
    pub vcf_res: f32,
    pub vcf_env: f32,
    pub vcf_lfo: f32,
    pub vcf_kbd: f32,
    pub vca_level: f32,
    pub env_a: f32,
    pub env_d: f32,
    pub env_s: f32,
    pub env_r: f32,
    pub dco_sub: f32,

    // byte 16
    pub stop_16: bool,
    pub stop_8: bool,
    pub stop_4: bool,
    pub pulse: bool,
    pub saw: bool,
    pub chorus: ChorusMode,

    // byte 17
    /// PWM from the manual slider rather than the LFO
    pub pwm_manual: bool,
    /// VCF envelope polarity inverted
    pub vcf_neg: bool,
    /// VCA follows the gate rather than the envelope
    pub vca_gate: bool,
    pub hpf: HpfMode,
    /// Not on the hardware; carried in bit 5 of byte 17
    pub cheap_filter: bool,
}

impl JunoPatch {
    /// Decode an 18-byte patch dump.
    pub fn from_sysex(bytes: &[u8]) -> Result<Self, SysexError> {
        let bytes = check_layout(bytes)?;
        let mut patch = Self::default();

        for (slider, &byte) in patch.sliders_mut().into_iter().zip(bytes) {
            *slider = byte as f32 / SLIDER_MAX;
        }

        let switches = bytes[SWITCHES_1];
        for (index, flag) in patch.switches_1_mut().into_iter().enumerate() {
            *flag = switches & (1 << index) != 0;
        }
        patch.chorus = ChorusMode::from_bits(switches >> 5);

        let switches = bytes[SWITCHES_2];
        for (index, flag) in patch.switches_2_mut().into_iter().enumerate() {
            *flag = switches & (1 << index) != 0;
        }
        patch.hpf = HpfMode::from_bits(switches >> 3);
        patch.cheap_filter = switches & (1 << 5) != 0;

        Ok(patch)
    }

    /// Encode back to the 18-byte dump. Sliders are clamped to `0.0..=1.0`.
    pub fn to_sysex(&self) -> [u8; SYSEX_LEN] {
        let mut bytes = [0u8; SYSEX_LEN];

        for (byte, slider) in bytes.iter_mut().zip(self.sliders()) {
            *byte = (slider.clamp(0.0, 1.0) * SLIDER_MAX).round() as u8;
        }

        let mut switches = 0u8;
        for (index, flag) in self.switches_1().into_iter().enumerate() {
            switches |= (flag as u8) << index;
        }
        switches |= self.chorus.to_bits() << 5;
        bytes[SWITCHES_1] = switches;

        let mut switches = 0u8;
        for (index, flag) in self.switches_2().into_iter().enumerate() {
            switches |= (flag as u8) << index;
        }
        switches |= self.hpf.to_bits() << 3;
        switches |= (self.cheap_filter as u8) << 5;
        bytes[SWITCHES_2] = switches;

        bytes
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Slider values in dump order.
    pub fn sliders(&self) -> [f32; SLIDER_COUNT] {
        [
            self.lfo_rate,
            self.lfo_delay_time,
            self.dco_lfo,
            self.dco_pwm,
            self.dco_noise,
            self.vcf_freq,
            self.vcf_res,
            self.vcf_env,
            self.vcf_lfo,
            self.vcf_kbd,
            self.vca_level,
            self.env_a,
            self.env_d,
            self.env_s,
            self.env_r,
            self.dco_sub,
        ]
    }

    fn sliders_mut(&mut self) -> [&mut f32; SLIDER_COUNT] {
        [
            &mut self.lfo_rate,
            &mut self.lfo_delay_time,
            &mut self.dco_lfo,
            &mut self.dco_pwm,
            &mut self.dco_noise,
            &mut self.vcf_freq,
            &mut self.vcf_res,
            &mut self.vcf_env,
            &mut self.vcf_lfo,
            &mut self.vcf_kbd,
            &mut self.vca_level,
            &mut self.env_a,
            &mut self.env_d,
            &mut self.env_s,
            &mut self.env_r,
            &mut self.dco_sub,
        ]
    }

    fn switches_1(&self) -> [bool; 5] {
        [self.stop_16, self.stop_8, self.stop_4, self.pulse, self.saw]
    }

    fn switches_1_mut(&mut self) -> [&mut bool; 5] {
        [
            &mut self.stop_16,
            &mut self.stop_8,
            &mut self.stop_4,
            &mut self.pulse,
            &mut self.saw,
        ]
    }

    fn switches_2(&self) -> [bool; 3] {
        [self.pwm_manual, self.vcf_neg, self.vca_gate]
    }

    fn switches_2_mut(&mut self) -> [&mut bool; 3] {
        [&mut self.pwm_manual, &mut self.vcf_neg, &mut self.vca_gate]
    }
}

impl TryFrom<&[u8]> for JunoPatch {
    type Error = SysexError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_sysex(bytes)
    }
}

/// Reject anything that would not survive `to_sysex(from_sysex(b)) == b`.
fn check_layout(bytes: &[u8]) -> Result<&[u8; SYSEX_LEN], SysexError> {
    let bytes: &[u8; SYSEX_LEN] = bytes
        .try_into()
        .map_err(|_| SysexError::LengthMismatch {
            expected: SYSEX_LEN,
            actual: bytes.len(),
        })?;
    for (index, &value) in bytes.iter().enumerate() {
        let limit = if index == SWITCHES_2 { 0x3f } else { 0x7f };
        if value > limit {
            return Err(SysexError::DataByteOutOfRange { index, value });
        }
    }
    Ok(bytes)
}
