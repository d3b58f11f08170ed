use serde::Serialize;
use tracing::{debug, instrument};
use xml::escape::escape_str_pcdata;

use crate::catalog::{AudioEncoding, InputType, VoiceModel, SAMPLE_RATE_16K};
use crate::error::Result;

/// Unchecked synthesis parameters, as a caller would supply them.
///
/// Pass through [`crate::validate()`] (or straight to
/// [`crate::TtsClient::synthesize`]) to get a [`SynthesisRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisParams {
    pub text: String,
    pub input_type: String,
    pub voice_model: String,
    pub speed: f64,
    pub pitch: f64,
    pub energy: f64,
    pub encoding: String,
    pub sample_rate: String,
}

impl SynthesisParams {
    /// Plain text read by `zh_en_female_1` at neutral prosody, as 16K LINEAR16.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            input_type: InputType::Text.as_str().to_owned(),
            voice_model: VoiceModel::ZhEnFemale1.as_str().to_owned(),
            speed: 1.0,
            pitch: 1.0,
            energy: 1.0,
            encoding: AudioEncoding::Linear16.as_str().to_owned(),
            sample_rate: SAMPLE_RATE_16K.to_owned(),
        }
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn voice_model(mut self, voice_model: impl Into<String>) -> Self {
        self.voice_model = voice_model.into();
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn energy(mut self, energy: f64) -> Self {
        self.energy = energy;
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn sample_rate(mut self, sample_rate: impl Into<String>) -> Self {
        self.sample_rate = sample_rate.into();
        self
    }
}

/// A parameter set that passed every domain check. Only
/// [`crate::validate()`] can build one.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub(crate) text: String,
    pub(crate) input_type: InputType,
    pub(crate) voice_model: VoiceModel,
    pub(crate) speed: f64,
    pub(crate) pitch: f64,
    pub(crate) energy: f64,
    pub(crate) encoding: AudioEncoding,
    pub(crate) sample_rate: String,
}

impl SynthesisRequest {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn voice_model(&self) -> VoiceModel {
        self.voice_model
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn encoding(&self) -> AudioEncoding {
        self.encoding
    }

    pub fn sample_rate(&self) -> &str {
        &self.sample_rate
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    input: Input<'a>,
    voice: Voice<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Input<'a> {
    Text(&'a str),
    Ssml(&'a str),
}

#[derive(Serialize)]
struct Voice<'a> {
    model: &'a str,
}

#[derive(Serialize)]
struct AudioConfig<'a> {
    speed: f64,
    pitch: f64,
    energy: f64,
    encoding: &'a str,
    #[serde(rename = "sampleRate")]
    sample_rate: &'a str,
}

/// Serialize a validated request into the JSON body the service expects.
#[instrument(skip_all)]
pub fn build_request(request: &SynthesisRequest) -> Result<String> {
    let input = match request.input_type {
        InputType::Text => Input::Text(&request.text),
        InputType::Ssml => Input::Ssml(&request.text),
    };
    let payload = Payload {
        input,
        voice: Voice {
            model: request.voice_model.as_str(),
        },
        audio_config: AudioConfig {
            speed: request.speed,
            pitch: request.pitch,
            energy: request.energy,
            encoding: request.encoding.as_str(),
            sample_rate: &request.sample_rate,
        },
    };

    let body = serde_json::to_string(&payload)?;
    debug!("Post body: {}", body);
    Ok(body)
}

/// Wrap plain text in an SSML document, for use with the `ssml` input type.
#[instrument(skip(text))]
pub fn build_ssml(text: &str) -> String {
    format!("<speak>{}</speak>", escape_str_pcdata(text))
}
