use tracing::{instrument, warn};

use crate::catalog::{
    AudioEncoding, InputType, VoiceModel, ENERGY_RANGE, PITCH_RANGE, SPEED_RANGE,
};
use crate::error::{Error, Result};
use crate::request::{SynthesisParams, SynthesisRequest};

pub fn validate_input_type(kind: &str) -> bool {
    kind.parse::<InputType>().is_ok()
}

pub fn validate_voice_model(model: &str) -> bool {
    model.parse::<VoiceModel>().is_ok()
}

pub fn validate_audio_encoding(encoding: &str) -> bool {
    encoding.parse::<AudioEncoding>().is_ok()
}

/// Rate validity depends on the voice; unknown voices accept nothing.
pub fn validate_sample_rate(model: &str, rate: &str) -> bool {
    model
        .parse::<VoiceModel>()
        .map(|m| m.supports_sample_rate(rate))
        .unwrap_or(false)
}

pub fn validate_speed(value: f64) -> bool {
    SPEED_RANGE.contains(&value)
}

pub fn validate_pitch(value: f64) -> bool {
    PITCH_RANGE.contains(&value)
}

pub fn validate_energy(value: f64) -> bool {
    ENERGY_RANGE.contains(&value)
}

/// Check every parameter and produce a request that is safe to send.
///
/// Fields are checked in a fixed order (inputType, voiceModel, audioEncoding,
/// audioSampleRate, voiceSpeed, voicePitch, voiceEnergy) and the first
/// violation is returned.
#[instrument(skip_all)]
pub fn validate(params: &SynthesisParams) -> Result<SynthesisRequest> {
    check(params).map_err(|e| {
        warn!("Rejected synthesis parameters: {}", e);
        e
    })
}

fn check(params: &SynthesisParams) -> Result<SynthesisRequest> {
    let input_type: InputType = params.input_type.parse()?;
    let voice_model: VoiceModel = params.voice_model.parse()?;
    let encoding: AudioEncoding = params.encoding.parse()?;
    if !voice_model.supports_sample_rate(&params.sample_rate) {
        return Err(Error::validation("audioSampleRate", &params.sample_rate));
    }
    if !validate_speed(params.speed) {
        return Err(Error::validation("voiceSpeed", params.speed));
    }
    if !validate_pitch(params.pitch) {
        return Err(Error::validation("voicePitch", params.pitch));
    }
    if !validate_energy(params.energy) {
        return Err(Error::validation("voiceEnergy", params.energy));
    }

    Ok(SynthesisRequest {
        text: params.text.clone(),
        input_type,
        voice_model,
        speed: params.speed,
        pitch: params.pitch,
        energy: params.energy,
        encoding,
        sample_rate: params.sample_rate.clone(),
    })
}
