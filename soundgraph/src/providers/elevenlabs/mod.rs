//! ElevenLabs audio generation provider (music composition and speech
//! synthesis).

mod client;
mod music;
mod speech;

pub use client::{ELEVENLABS_API_BASE_URL, ElevenLabsClient, ElevenLabsClientBuilder};
pub use music::{MAX_DURATION_MS, MIN_DURATION_MS, MusicModel};
pub use speech::{DEFAULT_SPEECH_MODEL, DEFAULT_VOICE_ID, SpeechModel};

use crate::providers::{ProviderError, ProviderResult};
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use tracing::debug;

/// Concatenate a streamed audio response into a single byte buffer.
///
/// The services stream their output in chunks; the handlers want one
/// contiguous payload. A zero-byte result is an error, not an empty track.
pub(crate) async fn collect_audio(response: reqwest::Response) -> ProviderResult<Bytes> {
    let mut stream = response.bytes_stream();
    let mut audio = BytesMut::new();
    let mut chunks = 0usize;

    while let Some(chunk) = stream.next().await {
        audio.extend_from_slice(&chunk?);
        chunks += 1;
    }

    if audio.is_empty() {
        return Err(ProviderError::EmptyAudio);
    }

    debug!(bytes = audio.len(), chunks, "collected audio payload");
    Ok(audio.freeze())
}
