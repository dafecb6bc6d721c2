use serde::Deserialize;

/// The slice of a chat-completion response this tool reads.
/// Anything missing here fails the decode instead of silently yielding
/// empty text.
#[derive(Deserialize, Debug, Clone)]
pub struct VisionResponse {
    pub choices: Vec<VisionChoice>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VisionChoice {
    pub message: VisionResponseMessage,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VisionResponseMessage {
    pub content: String,
}
