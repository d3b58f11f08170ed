//! Value domains accepted by the synthesis service.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::Error;

pub const SAMPLE_RATE_16K: &str = "16K";
pub const SAMPLE_RATE_22K: &str = "22K";

/// Bounds shared by speed, pitch and energy.
pub const SPEED_RANGE: RangeInclusive<f64> = 0.5..=1.5;
pub const PITCH_RANGE: RangeInclusive<f64> = 0.5..=1.5;
pub const ENERGY_RANGE: RangeInclusive<f64> = 0.5..=1.5;

const MANDARIN_RATES: &[&str] = &[SAMPLE_RATE_16K, SAMPLE_RATE_22K];
const TAIWANESE_RATES: &[&str] = &[SAMPLE_RATE_16K];

/// Whether the input is plain text or an SSML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Text,
    Ssml,
}

impl InputType {
    pub const ALL: [InputType; 2] = [InputType::Text, InputType::Ssml];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Ssml => "ssml",
        }
    }
}

/// Synthetic voices offered by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceModel {
    ZhEnFemale1,
    ZhEnFemale2,
    ZhEnMale1,
    TaiFemale1,
    TaiFemale2,
    TaiMale1,
}

impl VoiceModel {
    pub const ALL: [VoiceModel; 6] = [
        VoiceModel::ZhEnFemale1,
        VoiceModel::ZhEnFemale2,
        VoiceModel::ZhEnMale1,
        VoiceModel::TaiFemale1,
        VoiceModel::TaiFemale2,
        VoiceModel::TaiMale1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZhEnFemale1 => "zh_en_female_1",
            Self::ZhEnFemale2 => "zh_en_female_2",
            Self::ZhEnMale1 => "zh_en_male_1",
            Self::TaiFemale1 => "tai_female_1",
            Self::TaiFemale2 => "tai_female_2",
            Self::TaiMale1 => "tai_male_1",
        }
    }

    /// Sample rates this voice can be rendered at.
    pub fn sample_rates(&self) -> &'static [&'static str] {
        match self {
            Self::ZhEnFemale1 | Self::ZhEnFemale2 | Self::ZhEnMale1 => MANDARIN_RATES,
            Self::TaiFemale1 | Self::TaiFemale2 | Self::TaiMale1 => TAIWANESE_RATES,
        }
    }

    pub fn supports_sample_rate(&self, rate: &str) -> bool {
        self.sample_rates().contains(&rate)
    }
}

/// Audio container the service encodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioEncoding {
    Mp3,
    /// 16-bit PCM, delivered in a WAV container.
    Linear16,
}

impl AudioEncoding {
    pub const ALL: [AudioEncoding; 2] = [AudioEncoding::Mp3, AudioEncoding::Linear16];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "MP3",
            Self::Linear16 => "LINEAR16",
        }
    }
}

macro_rules! lookup_impls {
    ($ty:ident, $field:literal) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| Error::validation($field, s))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

lookup_impls!(InputType, "inputType");
lookup_impls!(VoiceModel, "voiceModel");
lookup_impls!(AudioEncoding, "audioEncoding");
