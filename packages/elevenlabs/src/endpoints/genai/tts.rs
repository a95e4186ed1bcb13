//! Text-to-speech: convert text into MP3 audio with a given voice.
use super::*;
use audioforge_domain::{ModelId, VoiceId, VoiceSettings};

/// `POST /v1/text-to-speech/{voice_id}`, answering with raw MPEG audio.
///
/// # Example
///
/// ```no_run
/// use audioforge_elevenlabs::ElevenLabsClient;
/// use audioforge_elevenlabs::endpoints::genai::tts::*;
/// use audioforge_domain::{ModelId, VoiceId, VoiceSettings};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ElevenLabsClient::new(std::env::var("ELEVENLABS_API_KEY")?)?;
///     let body = TextToSpeechBody::new("Hello there", ModelId::default(), VoiceSettings::default());
///     let audio = client.hit(TextToSpeech::new(VoiceId::new("9BWtsMINqrJLrRacOk9x"), body)).await?;
///     println!("{} bytes", audio.len());
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct TextToSpeech {
    voice_id: VoiceId,
    body: TextToSpeechBody,
}

impl TextToSpeech {
    pub fn new(voice_id: VoiceId, body: TextToSpeechBody) -> Self {
        Self { voice_id, body }
    }
}

impl ElevenLabsEndpoint for TextToSpeech {
    const PATH: &'static str = "v1/text-to-speech/:voice_id";

    const METHOD: Method = Method::POST;

    const ACCEPT: Option<&'static str> = Some("audio/mpeg");

    type ResponseBody = Bytes;

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![(":voice_id", self.voice_id.id())]
    }

    fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(&self.body)?))
    }

    fn response_body(self, body: Bytes) -> Result<Self::ResponseBody> {
        Ok(body)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TextToSpeechBody {
    text: String,
    model_id: ModelId,
    voice_settings: VoiceSettings,
}

impl TextToSpeechBody {
    pub fn new(text: impl Into<String>, model_id: ModelId, voice_settings: VoiceSettings) -> Self {
        Self {
            text: text.into(),
            model_id,
            voice_settings,
        }
    }
}
