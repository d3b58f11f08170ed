use std::fmt;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, error, info, instrument};

use crate::catalog::AudioEncoding;
use crate::error::{Error, Result};
use crate::output::write_audio;
use crate::request::{build_request, SynthesisParams, SynthesisRequest};
use crate::response::decode_response;
use crate::validate::validate;

pub const DEFAULT_ENDPOINT: &str = "https://tts.api.yating.tw/v2/speeches/short";

/// Decoded audio returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioOutput {
    pub data: Bytes,
    pub encoding: AudioEncoding,
}

/// Blocking client for the synthesis endpoint.
///
/// Holds only the endpoint and the API key; every call opens its own
/// connection.
#[derive(Clone)]
pub struct TtsClient {
    endpoint: String,
    api_key: String,
}

impl fmt::Debug for TtsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtsClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl TtsClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn with_default_endpoint(api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, api_key)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Synthesize `params` and save the audio next to
    /// `path_without_extension`, suffixed `.mp3` or `.wav` by encoding.
    ///
    /// Nothing is written unless the whole exchange succeeds. Returns the
    /// path of the written file.
    #[instrument(skip(self, params), fields(voice = %params.voice_model))]
    pub fn synthesize(
        &self,
        params: &SynthesisParams,
        path_without_extension: impl AsRef<Path> + fmt::Debug,
    ) -> Result<PathBuf> {
        let audio = self.fetch_audio(params)?;
        let path = write_audio(path_without_extension.as_ref(), audio.encoding, &audio.data)?;
        Ok(path)
    }

    /// Validate, send and decode, keeping the audio in memory.
    #[instrument(skip(self, params), fields(voice = %params.voice_model))]
    pub fn fetch_audio(&self, params: &SynthesisParams) -> Result<AudioOutput> {
        let request = validate(params)?;
        self.fetch_validated(&request)
    }

    /// Same as [`TtsClient::fetch_audio`] for a request that was validated
    /// up front.
    pub fn fetch_validated(&self, request: &SynthesisRequest) -> Result<AudioOutput> {
        let body = build_request(request)?;
        let data = self.send(body)?;
        Ok(AudioOutput {
            data,
            encoding: request.encoding(),
        })
    }

    fn send(&self, body: String) -> Result<Bytes> {
        let http = reqwest::blocking::Client::builder().build()?;
        let response = http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header("key", &self.api_key)
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        info!("Http status code: {}", status);
        if status != 200 && status != 201 {
            error!("Synthesis request rejected with status {}", status);
            return Err(Error::Service { status });
        }

        let content = response.bytes()?;
        debug!("Received {} byte response", content.len());
        decode_response(&content)
    }
}
