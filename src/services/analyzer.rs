use std::io::{Read, Seek, SeekFrom};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;

use crate::config::constants::{DEFAULT_VISION_MODEL, OPENAI_API_BASE_URL};
use crate::enums::analyzer_error::AnalyzerError;
use crate::prompts::reading_prompt::READING_PROMPT;
use crate::structs::ai::vision_content::{ImageUrl, VisionContent};
use crate::structs::ai::vision_message::VisionMessage;
use crate::structs::ai::vision_request::VisionRequest;
use crate::structs::ai::vision_response::VisionResponse;

/// Turns one monitor photo into one chat-completion call and hands back
/// the model's interpretation verbatim. Stateless apart from the
/// credential; build one per interaction.
#[derive(Clone)]
pub struct BloodPressureAnalyzer {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
}

impl BloodPressureAnalyzer {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: OPENAI_API_BASE_URL.to_string(),
            client: Client::new(),
            model: DEFAULT_VISION_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Rewinds the stream and encodes its full contents. No format
    /// validation happens here; the model judges the picture.
    pub fn encode_image<R: Read + Seek>(&self, image: &mut R) -> Result<String, AnalyzerError> {
        image.seek(SeekFrom::Start(0))?;

        let mut bytes = Vec::new();
        image.read_to_end(&mut bytes)?;

        Ok(STANDARD.encode(bytes))
    }

    // The data URI always claims image/jpeg, matching the wire format the
    // endpoint has been accepting for png uploads too.
    pub fn build_request(&self, base64_image: &str) -> VisionRequest {
        let content = vec![
            VisionContent::Text {
                text: READING_PROMPT.to_string(),
            },
            VisionContent::ImageUrl {
                image_url: ImageUrl {
                    url: format!("data:image/jpeg;base64,{}", base64_image),
                },
            },
        ];

        VisionRequest {
            model: self.model.clone(),
            messages: vec![VisionMessage {
                role: "user".to_string(),
                content,
            }],
        }
    }

    /// One blocking round trip: encode, build the payload, POST, decode.
    pub async fn analyze<R: Read + Seek>(&self, image: &mut R) -> Result<String, AnalyzerError> {
        let base64_image = self.encode_image(image)?;
        let request_body = self.build_request(&base64_image);

        let url = format!("{}/chat/completions", self.base_url);
        log::debug!("POST {} (model: {})", url, request_body.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AnalyzerError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalyzerError::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(match status.as_u16() {
                401 => AnalyzerError::Authentication(body),
                _ => AnalyzerError::Http {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let parsed: VisionResponse = serde_json::from_str(&body)
            .map_err(|e| AnalyzerError::Decode(format!("Unexpected response shape: {}", e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AnalyzerError::Decode("Response contained no choices".to_string()))?;

        Ok(choice.message.content)
    }
}
