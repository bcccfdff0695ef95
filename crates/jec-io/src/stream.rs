//! Framed event streams.
//!
//! Records carry no versioning of their own, so streams wrap them in a thin
//! envelope:
//!
//! ```text
//! header : b"JECR" | version: u16
//! event  : n_jets: u32 | n_jets × Jet (52 B) | Met (8 B)
//! ```
//!
//! Integers are big-endian. A stream ends cleanly only at an event boundary.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use jec_core::{Event, Jet, Met};

use crate::codec::Record;
use crate::error::{FormatError, Result};
use crate::rbuffer::RBuffer;
use crate::wbuffer::WBuffer;

/// Magic bytes at the start of every stream.
pub const MAGIC: [u8; 4] = *b"JECR";

/// Stream format version written by [`EventWriter`].
pub const FORMAT_VERSION: u16 = 1;

/// Largest jet count accepted for a single event.
pub const MAX_JETS_PER_EVENT: u32 = 10_000;

const HEADER_LEN: usize = MAGIC.len() + 2;

/// Writes events to a stream, header first.
pub struct EventWriter<W: Write> {
    inner: W,
    n_events: u64,
}

impl<W: Write> EventWriter<W> {
    /// Write the stream header and return a writer positioned for the first event.
    pub fn new(mut inner: W) -> Result<Self> {
        let mut header = WBuffer::with_capacity(HEADER_LEN);
        header.write_bytes(&MAGIC);
        header.write_u16(FORMAT_VERSION);
        inner.write_all(header.as_slice())?;
        Ok(Self { inner, n_events: 0 })
    }

    /// Append one event.
    ///
    /// Fails only on I/O errors, or when the event holds more than
    /// [`MAX_JETS_PER_EVENT`] jets (readers would reject it).
    pub fn write_event(&mut self, event: &Event) -> Result<()> {
        let n = event.jets.len();
        if n > MAX_JETS_PER_EVENT as usize {
            return Err(FormatError::Oversized {
                count: u32::try_from(n).unwrap_or(u32::MAX),
                max: MAX_JETS_PER_EVENT,
            });
        }

        let mut buf = WBuffer::with_capacity(4 + n * Jet::SIZE + Met::SIZE);
        buf.write_u32(n as u32);
        for jet in &event.jets {
            jet.write_to(&mut buf);
        }
        event.met.write_to(&mut buf);
        self.inner.write_all(buf.as_slice())?;
        self.n_events += 1;
        Ok(())
    }

    /// Number of events written so far.
    pub fn n_events(&self) -> u64 {
        self.n_events
    }

    /// Flush and return the underlying writer together with the event count.
    pub fn finish(mut self) -> Result<(W, u64)> {
        self.inner.flush()?;
        log::debug!("event stream finished: {} events", self.n_events);
        Ok((self.inner, self.n_events))
    }
}

/// Reads events from a stream, validating the header on construction.
pub struct EventReader<R: Read> {
    inner: R,
    offset: usize,
    version: u16,
    done: bool,
}

impl<R: Read> EventReader<R> {
    /// Read and check the stream header.
    pub fn new(mut inner: R) -> Result<Self> {
        let mut header = [0u8; HEADER_LEN];
        let got = read_full(&mut inner, &mut header)?;
        if got < MAGIC.len() || header[..MAGIC.len()] != MAGIC {
            return Err(FormatError::BadMagic);
        }
        if got < HEADER_LEN {
            return Err(FormatError::Truncated { offset: 0, need: HEADER_LEN, have: got });
        }
        let mut r = RBuffer::new(&header[MAGIC.len()..]);
        let version = r.read_u16()?;
        if version != FORMAT_VERSION {
            return Err(FormatError::UnsupportedVersion(version));
        }
        log::debug!("event stream opened, format version {version}");
        Ok(Self { inner, offset: HEADER_LEN, version, done: false })
    }

    /// Format version found in the header.
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Read the next event, or `None` at a clean end of stream.
    pub fn read_event(&mut self) -> Result<Option<Event>> {
        let mut count_bytes = [0u8; 4];
        match read_full(&mut self.inner, &mut count_bytes)? {
            0 => return Ok(None),
            4 => {}
            got => {
                return Err(FormatError::Truncated { offset: self.offset, need: 4, have: got });
            }
        }
        let count = u32::from_be_bytes(count_bytes);
        if count > MAX_JETS_PER_EVENT {
            return Err(FormatError::Oversized { count, max: MAX_JETS_PER_EVENT });
        }
        self.offset += 4;

        let body_len = count as usize * Jet::SIZE + Met::SIZE;
        let mut body = vec![0u8; body_len];
        let got = read_full(&mut self.inner, &mut body)?;
        if got < body_len {
            return Err(FormatError::Truncated { offset: self.offset, need: body_len, have: got });
        }

        let mut r = RBuffer::new(&body);
        let jets = (0..count).map(|_| Jet::read_from(&mut r)).collect::<Result<Vec<_>>>()?;
        let met = Met::read_from(&mut r)?;
        self.offset += body_len;
        Ok(Some(Event::new(jets, met)))
    }
}

impl<R: Read> Iterator for EventReader<R> {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_event() {
            Ok(Some(ev)) => Some(Ok(ev)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Read every event from the file at `path`.
pub fn read_events(path: impl AsRef<Path>) -> Result<Vec<Event>> {
    let file = File::open(path.as_ref())?;
    EventReader::new(BufReader::new(file))?.collect()
}

/// Write `events` to a new file at `path`, returning the number written.
///
/// Jet counts are checked before the file is created, and a partially
/// written file is removed if writing fails.
pub fn write_events(path: impl AsRef<Path>, events: &[Event]) -> Result<u64> {
    let path = path.as_ref();
    if let Some(ev) = events.iter().find(|ev| ev.jets.len() > MAX_JETS_PER_EVENT as usize) {
        return Err(FormatError::Oversized {
            count: u32::try_from(ev.jets.len()).unwrap_or(u32::MAX),
            max: MAX_JETS_PER_EVENT,
        });
    }

    let file = File::create(path)?;
    let written = write_all_events(BufWriter::new(file), events);
    if written.is_err() {
        log::debug!("removing partially written stream {}", path.display());
        let _ = std::fs::remove_file(path);
    }
    written
}

fn write_all_events<W: Write>(out: W, events: &[Event]) -> Result<u64> {
    let mut w = EventWriter::new(out)?;
    for ev in events {
        w.write_event(ev)?;
    }
    let (_, n) = w.finish()?;
    Ok(n)
}

/// Fill `buf` as far as the reader allows; returns the number of bytes read.
fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
