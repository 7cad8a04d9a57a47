use base64::Engine;
use serde_json::{json, Value};

pub const SAMPLE_AUDIO: &[u8] = b"RIFF fake wav payload";

pub fn speech_response() -> Value {
    json!({
        "audioContent": base64::engine::general_purpose::STANDARD.encode(SAMPLE_AUDIO)
    })
}

pub fn invalid_speech_response() -> Value {
    json!({ "audioContent": "!!!not-base64!!!" })
}
