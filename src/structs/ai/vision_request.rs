use serde::{Deserialize, Serialize};
use crate::structs::ai::vision_message::VisionMessage;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VisionRequest {
    pub model: String,
    pub messages: Vec<VisionMessage>,
}
