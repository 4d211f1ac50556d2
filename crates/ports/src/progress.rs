// crates/ports/src/progress.rs
use wordlist_lines_shared_kernel::Result;

/// Receives batch progress. Called from worker threads.
pub trait ProgressSink: Send + Sync {
    /// Called once before the first file with the batch size.
    fn on_start(&self, _total: usize) -> Result<()> {
        Ok(())
    }
    fn on_file(&self, path: &std::path::Path) -> Result<()>;
    fn on_complete(&self) -> Result<()>;
}
