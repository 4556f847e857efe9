//! Common test utilities and helpers

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The six-column sample used across the pipeline tests
pub const SAMPLE_CSV: &str = "id,a,b,c,val,extra\n1,x,y,z,10,q\n2,p,q,r,20,s\n";

/// A scratch working directory holding input and output files
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Create a context with `data.csv` already written
    pub fn with_input(content: &str) -> Self {
        let ctx = Self::new();
        ctx.write_file("data.csv", content);
        ctx
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write_file(&self, name: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write test file");
        path
    }

    pub fn read_file(&self, name: impl AsRef<Path>) -> String {
        fs::read_to_string(self.join(name)).expect("read test file")
    }

    pub fn exists(&self, name: impl AsRef<Path>) -> bool {
        self.join(name).exists()
    }
}
