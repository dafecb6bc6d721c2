use serde::{Deserialize, Serialize};
use crate::structs::ai::vision_content::VisionContent;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VisionMessage {
    pub role: String,
    pub content: Vec<VisionContent>,
}
