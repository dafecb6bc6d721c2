pub mod reading_prompt;
