use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use mail_parser::mailbox::mbox::MessageIterator;

use crate::utils::open_input_file;

const FROM_LINE_PREFIX: &[u8] = b"From ";

/// One message as stored in the archive, headers and body still encoded
#[derive(Debug, Clone)]
pub struct RawMessage {
    /// 1-based position in the archive
    pub position: usize,
    pub contents: Vec<u8>,
}

/// Lazy reader over the messages of an mbox archive, in archive order.
///
/// The file handle is owned by the reader and closed when it is dropped.
pub struct MboxReader {
    messages: MessageIterator<BufReader<File>>,
    position: usize,
    path: PathBuf,
}

/// Open an mbox archive for reading
///
/// # Errors
///
/// Returns an error if the file can't be opened, isn't a regular file, or
/// doesn't start with an mbox `From ` separator line. An empty file is a valid
/// archive with no messages.
pub fn open_mbox(path: &Path) -> Result<MboxReader> {
    let file = open_input_file(path)?;
    let mut reader = BufReader::new(file);
    ensure_mbox_format(&mut reader, path)?;

    Ok(MboxReader {
        messages: MessageIterator::new(reader),
        position: 0,
        path: path.to_path_buf(),
    })
}

/// Peek at the buffered start of the file without consuming it
fn ensure_mbox_format<R: BufRead>(reader: &mut R, path: &Path) -> Result<()> {
    // fill_buf doesn't consume, so MessageIterator still sees the first separator
    let buffered = reader
        .fill_buf()
        .with_context(|| format!("Failed to read mbox file: {}", path.display()))?;

    match buffered.iter().position(|b| !b.is_ascii_whitespace()) {
        // Empty or all-blank file: zero messages
        None => Ok(()),
        Some(start) if buffered[start..].starts_with(FROM_LINE_PREFIX) => Ok(()),
        Some(_) => bail!(
            "Not an mbox archive (no 'From ' separator at start of file): {}",
            path.display()
        ),
    }
}

impl Iterator for MboxReader {
    type Item = Result<RawMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.messages.next()?;
        self.position += 1;
        let position = self.position;

        Some(match item {
            Ok(raw) => Ok(RawMessage { position, contents: raw.contents().to_vec() }),
            Err(err) => Err(anyhow!(
                "Failed to read message {} from {}: {:?}",
                position,
                self.path.display(),
                err
            )),
        })
    }
}
