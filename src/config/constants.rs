pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_VISION_MODEL: &str = "gpt-4o";

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub const MAX_PREVIEW_COLUMNS: u32 = 80;
