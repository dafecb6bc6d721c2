use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use crate::enums::commands::Commands;
use crate::errors::{BplyzerError, BplyzerResult};
use crate::helpers::input_helper::InputHelper;
use crate::logger::progress_spinner::ProgressSpinner;
use crate::services::analyzer::BloodPressureAnalyzer;
use crate::structs::analyze_inputs::AnalyzeInputs;
use crate::ui::renderer::Renderer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> BplyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Analyze {
                image,
                api_key,
                model,
                no_preview,
            } => self.analyze_command(image, api_key, model, no_preview).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn analyze_command(
        &self,
        image: Option<PathBuf>,
        api_key_flag: Option<String>,
        model: Option<String>,
        no_preview: bool,
    ) -> BplyzerResult<()> {
        println!("🩺 Blood Pressure Reading Analysis");

        let inputs = AnalyzeInputs::new(InputHelper::resolve_api_key(api_key_flag), image);

        // Missing inputs are a no-op, not an error. Show what is still
        // needed and make no network call.
        let (api_key, image_path) = match inputs.ready() {
            Ok(parts) => parts,
            Err(prompts) => {
                for prompt in prompts {
                    println!("👉 {}", prompt);
                }
                return Ok(());
            }
        };

        InputHelper::validate_image_path(&image_path)?;

        let image_bytes = fs::read(&image_path).map_err(|e| {
            BplyzerError::file_error(&image_path.display().to_string(), "read", &e.to_string())
        })?;
        let file_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| image_path.display().to_string());

        if !no_preview {
            Renderer::render_image_preview(&file_name, &image_bytes);
        }

        let mut analyzer = BloodPressureAnalyzer::new(api_key);
        if let Some(model) = model {
            analyzer = analyzer.with_model(model);
        }

        let spinner = ProgressSpinner::start("Analyzing blood pressure reading...");
        let mut image_stream = Cursor::new(image_bytes);

        match analyzer.analyze(&mut image_stream).await {
            Ok(interpretation) => {
                spinner.succeed("Analysis complete").await;
                Renderer::render_result(&interpretation);
                Ok(())
            }
            Err(e) => {
                spinner.fail("Analysis failed").await;
                Err(e.into())
            }
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
