use crate::TextSource;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the text to process from the positional argument, a file, or stdin.
///
/// # Returns
///
/// An `io::Result<String>` with the raw, un-normalized text.
pub(crate) fn read_text(source: &TextSource) -> io::Result<String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }
    if let Some(path) = &source.input {
        return fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read input file '{}': {e}", path.display()),
            )
        });
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes `contents` to `path`, replacing any existing file.
pub(crate) fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to write output file '{}': {e}", path.display()),
        )
    })
}
