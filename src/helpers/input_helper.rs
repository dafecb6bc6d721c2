use std::env;
use std::path::Path;

use inquire::{Password, PasswordDisplayMode};

use crate::config::constants::{OPENAI_API_KEY_ENV, SUPPORTED_IMAGE_EXTENSIONS};
use crate::errors::{BplyzerError, BplyzerResult};

pub struct InputHelper;

impl InputHelper {
    /// Credential resolution order: --api-key flag, then the environment,
    /// then a masked interactive prompt. An empty or declined prompt means
    /// the input is simply still missing, not an error.
    pub fn resolve_api_key(flag_value: Option<String>) -> Option<String> {
        if let Some(key) = flag_value.filter(|k| !k.trim().is_empty()) {
            return Some(key);
        }

        if let Ok(key) = env::var(OPENAI_API_KEY_ENV) {
            if !key.trim().is_empty() {
                log::debug!("Using API key from {}", OPENAI_API_KEY_ENV);
                return Some(key);
            }
        }

        Self::prompt_api_key()
    }

    fn prompt_api_key() -> Option<String> {
        let prompt = Password::new("OPENAI API KEY:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .with_help_message("Pass --api-key or set OPENAI_API_KEY to skip this prompt");

        match prompt.prompt() {
            Ok(key) if !key.trim().is_empty() => Some(key),
            Ok(_) => None,
            Err(e) => {
                log::debug!("API key prompt not answered: {}", e);
                None
            }
        }
    }

    pub fn validate_image_path(path: &Path) -> BplyzerResult<()> {
        if !path.is_file() {
            return Err(BplyzerError::file_error(
                &path.display().to_string(),
                "open",
                "file does not exist",
            ));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension {
            Some(ref ext) if SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(BplyzerError::user_input_error(
                &path.display().to_string(),
                "a png, jpg or jpeg photo",
                "Upload a photo of the blood pressure monitor display only",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn accepts_supported_extensions_case_insensitively() {
        let dir = tempdir().unwrap();

        for name in ["reading.png", "reading.jpg", "reading.JPEG"] {
            let path = dir.path().join(name);
            fs::write(&path, b"fake image bytes").unwrap();
            assert!(InputHelper::validate_image_path(&path).is_ok(), "{}", name);
        }
    }

    #[test]
    fn rejects_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reading.gif");
        fs::write(&path, b"GIF89a").unwrap();

        let err = InputHelper::validate_image_path(&path).unwrap_err();
        assert!(matches!(err, BplyzerError::UserInputError { .. }));
    }

    #[test]
    fn rejects_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.jpg");

        let err = InputHelper::validate_image_path(&path).unwrap_err();
        assert!(matches!(err, BplyzerError::FileOperationError { .. }));
    }

    #[test]
    fn flag_value_wins_over_environment() {
        let resolved = InputHelper::resolve_api_key(Some("sk-from-flag".to_string()));
        assert_eq!(resolved.as_deref(), Some("sk-from-flag"));
    }

    #[test]
    fn blank_flag_value_is_ignored() {
        // A whitespace-only flag falls through to the environment.
        std::env::remove_var(OPENAI_API_KEY_ENV);
        std::env::set_var(OPENAI_API_KEY_ENV, "sk-from-env");
        let resolved = InputHelper::resolve_api_key(Some("   ".to_string()));
        assert_eq!(resolved.as_deref(), Some("sk-from-env"));
        std::env::remove_var(OPENAI_API_KEY_ENV);
    }
}
