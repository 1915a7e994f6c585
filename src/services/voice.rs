//! Voice service

use super::client::{payload, Client};
use super::dispatch::Operation;
use super::transport::RequestOptions;
use crate::models::voice::*;
use crate::schema::Item;
use crate::utils::error::ClientResult;

const CREATE_TRANSCRIPTION: Operation = Operation::post("voice.create_transcription", "voice/v1/transcription");
const RETRIEVE_TRANSCRIPTION: Operation = Operation::get("voice.retrieve_transcription", "voice/v1/transcription/{id}");
const SPEAK: Operation = Operation::post("voice.speak", "voice/v1/speak");
const LIST_VOICES: Operation = Operation::get("voice.list_voices", "voice/v1/voices");

/// `voice/v1`
#[derive(Debug, Clone, Copy)]
pub struct VoiceService<'a> {
    client: &'a Client,
}

impl<'a> VoiceService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Submit audio for transcription
    pub async fn create_transcription(
        &self,
        params: impl Into<Item<TranscriptionCreateParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<Transcription> {
        let body = payload::<TranscriptionCreateParams>(params.into())?;
        self.client.request(&CREATE_TRANSCRIPTION, &[], Some(body), options).await
    }

    /// Fetch a transcription job
    pub async fn retrieve_transcription(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<Transcription> {
        self.client.request(&RETRIEVE_TRANSCRIPTION, &[id], None, options).await
    }

    /// Synthesize speech; returns encoded audio bytes
    pub async fn speak(
        &self,
        params: impl Into<Item<SpeakParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<Vec<u8>> {
        let body = payload::<SpeakParams>(params.into())?;
        self.client.request_bytes(&SPEAK, &[], Some(body), options).await
    }

    /// List synthesis voices
    pub async fn list_voices(&self, options: Option<RequestOptions>) -> ClientResult<VoiceListResponse> {
        self.client.request(&LIST_VOICES, &[], None, options).await
    }
}
