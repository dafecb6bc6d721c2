pub mod progress_spinner;
