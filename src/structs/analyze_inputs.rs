use std::path::PathBuf;

/// The two user inputs one analysis needs. Both live only for the
/// current invocation; nothing is persisted between runs.
#[derive(Debug, Default, Clone)]
pub struct AnalyzeInputs {
    pub api_key: Option<String>,
    pub image: Option<PathBuf>,
}

impl AnalyzeInputs {
    pub fn new(api_key: Option<String>, image: Option<PathBuf>) -> Self {
        Self { api_key, image }
    }

    /// Both inputs, or the prompts to show for whatever is still missing.
    pub fn ready(self) -> Result<(String, PathBuf), Vec<&'static str>> {
        let prompts = self.missing_prompts();

        match (self.api_key, self.image) {
            (Some(api_key), Some(image)) => Ok((api_key, image)),
            _ => Err(prompts),
        }
    }

    fn missing_prompts(&self) -> Vec<&'static str> {
        let mut prompts = Vec::new();

        if self.api_key.is_none() {
            prompts.push("Enter your OpenAI API key (--api-key or OPENAI_API_KEY).");
        }
        if self.image.is_none() {
            prompts.push("Upload a blood pressure monitor photo with --image <path> (png, jpg or jpeg).");
        }

        prompts
    }
}
