use std::io::Write;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use crate::services::upload_controller::UploadState;

/// Terminal spinner that follows the upload status while a request runs.
pub struct AnimatedLogger {
    animation_chars: Vec<&'static str>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new() -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        Self {
            animation_chars,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self, mut states: watch::Receiver<UploadState>) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let animation_chars = self.animation_chars.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(150));
            let mut message = states.borrow_and_update().message();

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r\x1b[K{} {} ", message, animation_chars[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    changed = states.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        message = states.borrow_and_update().message();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K✅ {final_message}\n");
        let _ = std::io::stderr().flush();
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K❌ {error_message}\n");
        let _ = std::io::stderr().flush();
    }
}

impl Default for AnimatedLogger {
    fn default() -> Self {
        Self::new()
    }
}
