//! File system utility functions
//!
//! Provides safe file operations with proper error handling.

use crate::error::{GenerateError, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Write a payload to `path`, creating or truncating the file
    ///
    /// Parent directories are not created. The file handle is closed before
    /// this returns, on success and on error. A failure after some bytes were
    /// written leaves the partial file in place. Non-regular destinations
    /// such as `/dev/stdout` or a FIFO are accepted.
    #[instrument(skip(self, contents))]
    pub fn persist<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
        contents: &[u8],
    ) -> Result<u64> {
        let path = path.as_ref();

        debug!("Writing {} bytes to {}", contents.len(), path.display());

        let written = {
            let mut file = File::create(path).map_err(|e| GenerateError::write(path, e))?;
            write_all_and_flush(&mut file, contents).map_err(|e| GenerateError::write(path, e))?
        };

        debug!("File written successfully");
        Ok(written)
    }

    /// Read file contents as string
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path)
    }

    /// Check if a path exists and is a file
    pub fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_file()
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

fn write_all_and_flush(file: &mut File, contents: &[u8]) -> io::Result<u64> {
    file.write_all(contents)?;
    file.flush()?;
    Ok(contents.len() as u64)
}
