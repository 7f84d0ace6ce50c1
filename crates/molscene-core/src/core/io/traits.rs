use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading one part of a scene from engine text output.
pub trait SceneInput {
    /// The value produced by a successful read.
    type Output;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads and parses the whole of `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error>;

    /// Opens `path` and reads it with [`SceneInput::read_from`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Parses an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed.
    fn read_from_str(text: &str) -> Result<Self::Output, Self::Error> {
        let mut reader = text.as_bytes();
        Self::read_from(&mut reader)
    }
}
