// crates/infra/src/progress.rs
use std::{
    io::{self, Write},
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use wordlist_lines_ports::progress::ProgressSink;
use wordlist_lines_shared_kernel::Result;

/// Print a progress line every this many files.
const REPORT_INTERVAL: usize = 100;

/// 標準エラーへの進捗表示
#[derive(Debug, Default)]
pub struct StderrProgress {
    total: AtomicUsize,
    done: AtomicUsize,
}

impl StderrProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn done(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }

    fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    fn should_report(&self, current: usize) -> bool {
        current % REPORT_INTERVAL == 0 || current == self.total()
    }

    fn line(&self, current: usize) -> String {
        format!("[{current}/{}] Validating...", self.total())
    }
}

impl ProgressSink for StderrProgress {
    fn on_start(&self, total: usize) -> Result<()> {
        self.total.store(total, Ordering::Relaxed);
        self.done.store(0, Ordering::Relaxed);
        Ok(())
    }

    fn on_file(&self, _path: &Path) -> Result<()> {
        let current = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if self.should_report(current) {
            writeln!(io::stderr().lock(), "{}", self.line(current))?;
        }
        Ok(())
    }

    fn on_complete(&self) -> Result<()> {
        let done = self.done();
        // The last file already printed the final line.
        if done != self.total() {
            writeln!(io::stderr().lock(), "{}", self.line(done))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_on_interval_and_at_the_end() {
        let progress = StderrProgress::new();
        progress.on_start(250).unwrap();
        let reported: Vec<usize> = (1..=250).filter(|&n| progress.should_report(n)).collect();
        assert_eq!(reported, [100, 200, 250]);
    }

    #[test]
    fn counts_every_file() {
        let progress = StderrProgress::new();
        progress.on_start(3).unwrap();
        for name in ["a", "b", "c"] {
            progress.on_file(Path::new(name)).unwrap();
        }
        progress.on_complete().unwrap();
        assert_eq!(progress.done(), 3);
    }

    #[test]
    fn line_format() {
        let progress = StderrProgress::new();
        progress.on_start(42).unwrap();
        assert_eq!(progress.line(7), "[7/42] Validating...");
    }
}
