//! # jec-io
//!
//! Fixed-layout binary codec for [`jec_core::Jet`] and [`jec_core::Met`], and
//! framed event streams built on top of it.
//!
//! Every multi-byte value is big-endian, following ROOT. A `Jet` record is
//! 52 bytes and a `Met` record 8 bytes; see [`codec`] for the field offsets.
//!
//! ## Example
//!
//! ```
//! use jec_core::Met;
//! use jec_io::{decode, encode};
//!
//! let met = Met { pt_raw: 42.0, phi_raw: -0.5 };
//! let bytes = encode(&met);
//! assert_eq!(bytes.len(), 8);
//! assert_eq!(decode::<Met>(&bytes).unwrap(), met);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod rbuffer;
pub mod stream;
pub mod wbuffer;

pub use codec::{Record, decode, decode_many, encode, encode_many};
pub use error::{FormatError, Result};
pub use rbuffer::RBuffer;
pub use stream::{
    EventReader, EventWriter, FORMAT_VERSION, MAGIC, MAX_JETS_PER_EVENT, read_events,
    write_events,
};
pub use wbuffer::WBuffer;
