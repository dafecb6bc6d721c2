use std::io::Write;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 150;

/// Busy indicator for the one blocking API call. Draws on stderr so the
/// result text on stdout stays clean.
pub struct ProgressSpinner {
    stop_sender: mpsc::UnboundedSender<()>,
    task_handle: JoinHandle<()>,
}

impl ProgressSpinner {
    pub fn start(message: &str) -> Self {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval =
                tokio::time::interval(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", FRAMES[frame], message);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        Self {
            stop_sender: stop_tx,
            task_handle: handle,
        }
    }

    pub async fn succeed(self, final_message: &str) {
        self.finish(&format!("✅ {}", final_message)).await;
    }

    pub async fn fail(self, error_message: &str) {
        self.finish(&format!("❌ {}", error_message)).await;
    }

    async fn finish(self, line: &str) {
        let _ = self.stop_sender.send(());
        let _ = self.task_handle.await;

        eprint!("\r\x1b[K{}\n", line);
        let _ = std::io::stderr().flush();
    }
}
