//! Voice models: transcription and speech synthesis

use crate::schema::enums::string_enum;
use crate::schema::{model_schema, FieldKind, FieldSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Transcription job state
    pub enum TranscriptionStatus {
        Queued => "queued",
        Processing => "processing",
        Completed => "completed",
        Error => "error",
    }
}

string_enum! {
    /// Audio container for synthesized speech
    pub enum AudioFormat {
        Mp3 => "mp3",
        Wav => "wav",
        Ogg => "ogg",
        Pcm => "pcm",
    }
}

/// Parameters for `POST voice/v1/transcription`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptionCreateParams {
    /// Publicly reachable audio file
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
    /// BCP 47 language code (optional)
    #[serde(rename = "languageCode", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Label speakers (optional)
    #[serde(rename = "speakerLabels", skip_serializing_if = "Option::is_none")]
    pub speaker_labels: Option<bool>,
    /// Expected number of speakers (optional)
    #[serde(rename = "speakersExpected", skip_serializing_if = "Option::is_none")]
    pub speakers_expected: Option<u32>,
    /// Terms to boost during recognition (optional)
    #[serde(rename = "wordBoost", skip_serializing_if = "Option::is_none")]
    pub word_boost: Option<Vec<String>>,
}

impl TranscriptionCreateParams {
    /// Create parameters from the required audio URL
    pub fn new(audio_url: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
            language_code: None,
            speaker_labels: None,
            speakers_expected: None,
            word_boost: None,
        }
    }

    /// Replace the audio URL
    pub fn with_audio_url(mut self, audio_url: impl Into<String>) -> Self {
        self.audio_url = audio_url.into();
        self
    }

    /// Set the language
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }

    /// Enable or disable speaker labels
    pub fn with_speaker_labels(mut self, speaker_labels: bool) -> Self {
        self.speaker_labels = Some(speaker_labels);
        self
    }

    /// Set the expected speaker count
    pub fn with_speakers_expected(mut self, speakers_expected: u32) -> Self {
        self.speakers_expected = Some(speakers_expected);
        self
    }

    /// Set boosted terms
    pub fn with_word_boost<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.word_boost = Some(words.into_iter().map(Into::into).collect());
        self
    }
}

model_schema!(TranscriptionCreateParams, "TranscriptionCreateParams", [
    FieldSpec::required("audioURL", FieldKind::String).wire("audioUrl"),
    FieldSpec::optional("languageCode", FieldKind::String),
    FieldSpec::optional("speakerLabels", FieldKind::Boolean),
    FieldSpec::optional("speakersExpected", FieldKind::Integer),
    FieldSpec::optional("wordBoost", FieldKind::String).list(),
]);

/// One labelled utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub speaker: String,
    pub text: String,
    /// Start offset in milliseconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// End offset in milliseconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

model_schema!(Utterance, "Utterance", [
    FieldSpec::required("speaker", FieldKind::String),
    FieldSpec::required("text", FieldKind::String),
    FieldSpec::optional("start", FieldKind::Integer),
    FieldSpec::optional("end", FieldKind::Integer),
    FieldSpec::optional("confidence", FieldKind::Number),
]);

/// A transcription job and, once completed, its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub id: String,
    pub status: TranscriptionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utterances: Option<Vec<Utterance>>,
    #[serde(rename = "audioUrl", skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Audio length in seconds (optional)
    #[serde(rename = "audioDuration", skip_serializing_if = "Option::is_none")]
    pub audio_duration: Option<f64>,
    /// Failure reason when `status` is `error` (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

model_schema!(Transcription, "Transcription", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("status", FieldKind::Enum(TranscriptionStatus::VALUES)),
    FieldSpec::optional("text", FieldKind::String),
    FieldSpec::optional("utterances", FieldKind::Model(Utterance::schema)).list(),
    FieldSpec::optional("audioURL", FieldKind::String).wire("audioUrl"),
    FieldSpec::optional("audioDuration", FieldKind::Number),
    FieldSpec::optional("error", FieldKind::String),
    FieldSpec::optional("createdAt", FieldKind::DateTime),
]);

/// Parameters for `POST voice/v1/speak`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakParams {
    /// Text to synthesize
    pub text: String,
    /// Voice to use (optional)
    #[serde(rename = "voiceId", skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    /// Output container (optional)
    #[serde(rename = "outputFormat", skip_serializing_if = "Option::is_none")]
    pub output_format: Option<AudioFormat>,
    /// Speaking rate multiplier (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl SpeakParams {
    /// Create parameters from the required text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), voice_id: None, output_format: None, speed: None }
    }

    /// Replace the text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the voice
    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, output_format: impl Into<AudioFormat>) -> Self {
        self.output_format = Some(output_format.into());
        self
    }

    /// Set the speaking rate
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }
}

model_schema!(SpeakParams, "SpeakParams", [
    FieldSpec::required("text", FieldKind::String),
    FieldSpec::optional("voiceID", FieldKind::String).wire("voiceId"),
    FieldSpec::optional("outputFormat", FieldKind::Enum(AudioFormat::VALUES)),
    FieldSpec::optional("speed", FieldKind::Number),
]);

/// A synthesis voice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    #[serde(rename = "voiceId")]
    pub voice_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Sample clip URL (optional)
    #[serde(rename = "previewUrl", skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

model_schema!(Voice, "Voice", [
    FieldSpec::required("voiceID", FieldKind::String).wire("voiceId"),
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::optional("language", FieldKind::String),
    FieldSpec::optional("gender", FieldKind::String),
    FieldSpec::optional("previewURL", FieldKind::String).wire("previewUrl"),
]);

/// Response of `GET voice/v1/voices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceListResponse {
    pub voices: Vec<Voice>,
}

model_schema!(VoiceListResponse, "VoiceListResponse", [
    FieldSpec::required("voices", FieldKind::Model(Voice::schema)).list(),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{hydrate_value, normalize_item, Item};
    use serde_json::json;

    #[test]
    fn test_audio_url_remap() {
        let wire = normalize_item(&Item::from(TranscriptionCreateParams::new("https://a.example/x.mp3"))).unwrap();
        assert_eq!(wire.get("audioUrl"), Some(&json!("https://a.example/x.mp3")));
        assert_eq!(wire.len(), 1);
    }

    #[test]
    fn test_transcription_with_utterances() {
        let t: Transcription = hydrate_value(json!({
            "id": "t1",
            "status": "completed",
            "utterances": [{"speaker": "A", "text": "Hello", "start": 0, "end": 420}],
        })).unwrap();
        assert_eq!(t.status, TranscriptionStatus::Completed);
        assert_eq!(t.utterances.unwrap()[0].end, Some(420));
    }
}
