//! Fixed-layout binary codec for [`Jet`] and [`Met`].
//!
//! All multi-byte values are big-endian, as in ROOT files. Booleans take one
//! byte holding 0 or 1. There is no padding.
//!
//! `Jet` (52 bytes):
//!
//! | Offset | Field | Type |
//! |---|---|---|
//! | 0 | `pt_raw`, `eta_raw`, `phi_raw`, `mass_raw` | f32 ×4 |
//! | 16 | `jec_factor` | f32 |
//! | 20 | `area` | f32 |
//! | 24 | `is_good` | bool |
//! | 25 | `b_tag_cmva` | f32 |
//! | 29 | `b_tag_deep_csv` (bb, b, c, udsg) | f32 ×4 |
//! | 45 | `pileup_discr` | f32 |
//! | 49 | `flavour_hadron`, `flavour_parton` | i8 ×2 |
//! | 51 | `has_gen_match` | bool |
//!
//! `Met` (8 bytes): `pt_raw`, `phi_raw` as f32.

use jec_core::{DeepCsv, Jet, Met};

use crate::error::{FormatError, Result};
use crate::rbuffer::RBuffer;
use crate::wbuffer::WBuffer;

/// A value with a fixed-size binary representation.
pub trait Record: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Append the encoded record to `w`. Always writes exactly `SIZE` bytes.
    fn write_to(&self, w: &mut WBuffer);

    /// Read one record at the current position of `r`.
    fn read_from(r: &mut RBuffer) -> Result<Self>;
}

impl Record for Jet {
    const SIZE: usize = 52;

    fn write_to(&self, w: &mut WBuffer) {
        w.write_f32_slice(&[self.pt_raw, self.eta_raw, self.phi_raw, self.mass_raw]);
        w.write_f32(self.jec_factor);
        w.write_f32(self.area);
        w.write_bool(self.is_good);
        w.write_f32(self.b_tag_cmva);
        w.write_f32_slice(&self.b_tag_deep_csv.as_array());
        w.write_f32(self.pileup_discr);
        w.write_i8(self.flavour_hadron);
        w.write_i8(self.flavour_parton);
        w.write_bool(self.has_gen_match);
    }

    fn read_from(r: &mut RBuffer) -> Result<Self> {
        let [pt_raw, eta_raw, phi_raw, mass_raw] = r.read_f32_array()?;
        let jec_factor = r.read_f32()?;
        let area = r.read_f32()?;
        let is_good = r.read_bool("is_good")?;
        let b_tag_cmva = r.read_f32()?;
        let b_tag_deep_csv = DeepCsv::from_array(r.read_f32_array()?);
        let pileup_discr = r.read_f32()?;
        let flavour_hadron = r.read_i8()?;
        let flavour_parton = r.read_i8()?;
        let has_gen_match = r.read_bool("has_gen_match")?;

        Ok(Jet {
            pt_raw,
            eta_raw,
            phi_raw,
            mass_raw,
            jec_factor,
            area,
            is_good,
            b_tag_cmva,
            b_tag_deep_csv,
            pileup_discr,
            flavour_hadron,
            flavour_parton,
            has_gen_match,
        })
    }
}

impl Record for Met {
    const SIZE: usize = 8;

    fn write_to(&self, w: &mut WBuffer) {
        w.write_f32(self.pt_raw);
        w.write_f32(self.phi_raw);
    }

    fn read_from(r: &mut RBuffer) -> Result<Self> {
        let pt_raw = r.read_f32()?;
        let phi_raw = r.read_f32()?;
        Ok(Met { pt_raw, phi_raw })
    }
}

/// Encode one record into exactly `R::SIZE` bytes.
pub fn encode<R: Record>(record: &R) -> Vec<u8> {
    let mut w = WBuffer::with_capacity(R::SIZE);
    record.write_to(&mut w);
    debug_assert_eq!(w.len(), R::SIZE);
    w.into_inner()
}

/// Decode one record. `bytes` must be exactly `R::SIZE` long.
pub fn decode<R: Record>(bytes: &[u8]) -> Result<R> {
    if bytes.len() != R::SIZE {
        return Err(FormatError::LengthMismatch { expected: R::SIZE, actual: bytes.len() });
    }
    R::read_from(&mut RBuffer::new(bytes))
}

/// Encode a packed run of records with no framing.
pub fn encode_many<R: Record>(records: &[R]) -> Vec<u8> {
    let mut w = WBuffer::with_capacity(records.len() * R::SIZE);
    for rec in records {
        rec.write_to(&mut w);
    }
    w.into_inner()
}

/// Decode a packed run of records. The length must be a multiple of `R::SIZE`.
pub fn decode_many<R: Record>(bytes: &[u8]) -> Result<Vec<R>> {
    if bytes.len() % R::SIZE != 0 {
        let expected = (bytes.len() / R::SIZE + 1) * R::SIZE;
        return Err(FormatError::LengthMismatch { expected, actual: bytes.len() });
    }
    let mut r = RBuffer::new(bytes);
    let mut out = Vec::with_capacity(bytes.len() / R::SIZE);
    while r.remaining() > 0 {
        out.push(R::read_from(&mut r)?);
    }
    Ok(out)
}
