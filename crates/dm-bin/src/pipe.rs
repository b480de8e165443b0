//! Named-pipe ingestion.
//!
//! The fifo is created at startup and removed on drop. It is opened
//! read+write so the descriptor never hits EOF when a compiler process
//! closes its end between builds; the reader thread just blocks until the
//! next writer shows up.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use nix::sys::stat::Mode;
use nix::unistd::mkfifo;
use std::fs::{File, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;
use tracing::{error, info, trace};

/// One read syscall per channel message; lines may span chunks.
pub const READ_BUF_SIZE: usize = 1024;

/// Owns the fifo path and unlinks it on drop.
pub struct PipeGuard {
    path: PathBuf,
}

impl PipeGuard {
    /// Create the fifo (replacing any stale file at the path) and open it.
    pub fn create(path: &Path) -> Result<(Self, File)> {
        if path.exists() {
            std::fs::remove_file(path)
                .with_context(|| format!("removing stale {}", path.display()))?;
        }
        mkfifo(path, Mode::from_bits_truncate(0o644))
            .with_context(|| format!("creating fifo {}", path.display()))?;
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("opening fifo {}", path.display()))?;
        info!(target: "pipe", path = %path.display(), "fifo ready");
        Ok((
            Self {
                path: path.to_path_buf(),
            },
            file,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PipeGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Blocking reader thread: forwards raw chunks until the channel closes.
pub fn spawn_reader(mut pipe: File, tx: Sender<Vec<u8>>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let mut buf = [0u8; READ_BUF_SIZE];
        loop {
            match pipe.read(&mut buf) {
                Ok(0) => {
                    info!(target: "pipe", "fifo closed");
                    break;
                }
                Ok(n) => {
                    trace!(target: "pipe", bytes = n, "chunk");
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    error!(target: "pipe", ?err, "read failed");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_creates_and_removes_the_fifo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagmon-test");
        {
            let (guard, _file) = PipeGuard::create(&path).unwrap();
            assert_eq!(guard.path(), path.as_path());
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn stale_regular_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagmon-test");
        std::fs::write(&path, b"leftover").unwrap();
        let (_guard, _file) = PipeGuard::create(&path).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(!meta.is_file() || meta.len() == 0);
    }

    #[test]
    fn reader_forwards_written_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagmon-test");
        let (_guard, file) = PipeGuard::create(&path).unwrap();
        let (tx, rx) = crossbeam_channel::unbounded();
        let handle = spawn_reader(file, tx);

        let mut writer = OpenOptions::new().write(true).open(&path).unwrap();
        use std::io::Write;
        writer.write_all(b"/a.c:1:1: error: boom\n").unwrap();

        let chunk = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();
        assert_eq!(chunk, b"/a.c:1:1: error: boom\n".to_vec());

        // Dropping the receiver makes the next send fail and the thread
        // exit after one more write wakes it.
        drop(rx);
        writer.write_all(b"x").unwrap();
        handle.join().unwrap();
    }
}
