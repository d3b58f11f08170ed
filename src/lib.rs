mod catalog;
mod error;
mod output;
mod request;
mod response;
mod synthesize;
mod validate;

pub use catalog::{
    AudioEncoding, InputType, VoiceModel, ENERGY_RANGE, PITCH_RANGE, SAMPLE_RATE_16K,
    SAMPLE_RATE_22K, SPEED_RANGE,
};
pub use error::{Error, Result};
pub use output::{extension_for, write_audio};
pub use request::{build_request, build_ssml, SynthesisParams, SynthesisRequest};
pub use response::{decode_response, SynthesisResponse};
pub use synthesize::{AudioOutput, TtsClient, DEFAULT_ENDPOINT};
pub use validate::{
    validate, validate_audio_encoding, validate_energy, validate_input_type, validate_pitch,
    validate_sample_rate, validate_speed, validate_voice_model,
};

// Re-export common types
pub use bytes::Bytes;
