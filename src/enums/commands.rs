use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a photo of a blood pressure monitor display
    Analyze {
        /// Path to the photo (png, jpg or jpeg)
        #[clap(short, long)]
        image: Option<PathBuf>,
        /// OpenAI API key (falls back to OPENAI_API_KEY, then an interactive prompt)
        #[clap(short, long)]
        api_key: Option<String>,
        /// Override the multimodal model
        #[clap(short, long)]
        model: Option<String>,
        /// Skip the terminal image preview
        #[clap(long)]
        no_preview: bool,
    },
}
