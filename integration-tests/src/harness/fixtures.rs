use chrono::{TimeZone, Utc};
use logtally_core::generate::{GenerateOptions, generate_log_file};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A log file inside its own temporary directory.
pub struct LogFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl LogFixture {
    pub fn from_bytes(contents: impl AsRef<[u8]>) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("server.log");
        fs::write(&path, contents).expect("failed to write fixture");
        Self { _dir: dir, path }
    }

    pub fn from_lines(lines: &[&str]) -> Self {
        let mut contents = lines.join("\n");
        contents.push('\n');
        Self::from_bytes(contents)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        fs::metadata(&self.path).expect("fixture vanished").len()
    }
}

/// A seeded synthetic file of `lines` lines.
pub fn generated_fixture(lines: u64, seed: u64) -> LogFixture {
    let fixture = LogFixture::from_bytes(b"");
    let opts = GenerateOptions {
        lines,
        producers: workers(3),
        batch_size: 128,
        seed: Some(seed),
        start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    };
    generate_log_file(fixture.path(), &opts).expect("failed to generate fixture");
    fixture
}

pub fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("worker count must be positive")
}
