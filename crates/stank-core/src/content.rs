//! Content probes.
//!
//! Each probe works on its own reader so the caller controls how many
//! handles are opened and when they are closed. Reaching end of file is
//! an expected outcome for every probe, never an error.

use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};

use tracing::trace;

use crate::smell::LineEnding;
use crate::tables::bom::{self, MAX_BOM_LEN};

/// What the leading-content probe saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadingContent {
    pub bom: bool,
    /// Bytes up to and including the first `\n`, after any BOM. The whole
    /// remainder of the file when it has no `\n`.
    pub first_line: Vec<u8>,
    pub line_ending: LineEnding,
}

impl LeadingContent {
    /// First line with its terminator stripped, decoded lossily.
    pub fn first_line_text(&self) -> String {
        let mut end = self.first_line.len();
        while end > 0 && matches!(self.first_line[end - 1], b'\n' | b'\r') {
            end -= 1;
        }
        String::from_utf8_lossy(&self.first_line[..end]).into_owned()
    }
}

/// Probes for a BOM, then reads forward to the first line feed.
///
/// `facts` is filled in as each step completes, so on error it holds
/// everything learned before the failure.
pub fn read_leading<R: Read>(source: R, facts: &mut LeadingContent) -> io::Result<()> {
    let mut reader = BufReader::new(source);

    let mut head = Vec::with_capacity(MAX_BOM_LEN);
    (&mut reader)
        .take(MAX_BOM_LEN as u64)
        .read_to_end(&mut head)?;

    let skip = match bom::leading_bom_len(&head) {
        Some(len) => {
            trace!(len, "leading byte order mark");
            facts.bom = true;
            len
        }
        None => 0,
    };

    // CR-only and single-line files are consumed whole here.
    let mut rest = (&head[skip..]).chain(reader);
    rest.read_until(b'\n', &mut facts.first_line)?;
    facts.line_ending = LineEnding::of_line(&facts.first_line);

    Ok(())
}

/// Whether the file of `size` bytes ends in a POSIX line feed.
///
/// A trailing `\r\n` does not count, nor does a lone `\r`.
pub fn has_final_eol<R: Read + Seek>(mut source: R, size: u64) -> io::Result<bool> {
    if size == 0 {
        return Ok(false);
    }

    let tail_len = size.min(2);
    let mut tail = [0u8; 2];
    let tail = &mut tail[..tail_len as usize];

    source.seek(SeekFrom::Start(size - tail_len))?;
    source.read_exact(tail)?;

    let last_is_lf = tail[tail.len() - 1] == b'\n';
    let preceded_by_cr = tail.len() == 2 && tail[0] == b'\r';
    Ok(last_is_lf && !preceded_by_cr)
}

/// Whether any `\r` occurs anywhere in the stream.
pub fn contains_cr<R: Read>(source: R) -> io::Result<bool> {
    let mut reader = BufReader::new(source);

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            return Ok(false);
        }
        if chunk.contains(&b'\r') {
            return Ok(true);
        }
        let len = chunk.len();
        reader.consume(len);
    }
}
