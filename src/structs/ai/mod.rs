pub mod vision_content;
pub mod vision_message;
pub mod vision_request;
pub mod vision_response;
