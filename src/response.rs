use base64::Engine as _;
use bytes::Bytes;
use serde::Deserialize;
use tracing::{error, instrument};

use crate::error::{Error, Result};

/// Reply of the synthesis endpoint.
#[derive(Debug, Deserialize)]
pub struct SynthesisResponse {
    #[serde(rename = "audioContent")]
    pub audio_content: String,
    /// Echo of the rendering configuration; not interpreted.
    #[serde(rename = "audioConfig", default)]
    pub audio_config: serde_json::Value,
}

/// Parse a response body and return the decoded audio bytes.
#[instrument(skip_all, fields(len = body.len()))]
pub fn decode_response(body: &[u8]) -> Result<Bytes> {
    let response: Option<SynthesisResponse> = serde_json::from_slice(body).map_err(|e| {
        error!("Malformed synthesis response: {}", e);
        Error::decode(e.to_string())
    })?;
    let response = response.ok_or_else(|| Error::decode("response body is null"))?;

    let audio = base64::engine::general_purpose::STANDARD
        .decode(response.audio_content.as_bytes())
        .map_err(|e| Error::decode(format!("audioContent is not valid base64: {}", e)))?;
    Ok(Bytes::from(audio))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(body: &str) -> String {
        match decode_response(body.as_bytes()) {
            Err(Error::Decode { reason }) => reason,
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn decodes_single_byte() {
        let audio = decode_response(br#"{"audioContent":"QQ==","audioConfig":{}}"#).unwrap();
        assert_eq!(audio.as_ref(), &[0x41]);
    }

    #[test]
    fn audio_config_is_optional() {
        let audio = decode_response(br#"{"audioContent":"QUJD"}"#).unwrap();
        assert_eq!(audio.as_ref(), b"ABC");
    }

    #[test]
    fn missing_audio_content_fails() {
        assert!(reason(r#"{"audioConfig":{}}"#).contains("audioContent"));
    }

    #[test]
    fn null_document_fails() {
        assert_eq!(reason("null"), "response body is null");
    }

    #[test]
    fn non_json_fails() {
        reason("<html>bad gateway</html>");
    }

    #[test]
    fn invalid_base64_fails() {
        assert!(reason(r#"{"audioContent":"not base64!"}"#).contains("base64"));
    }
}
