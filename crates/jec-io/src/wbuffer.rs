//! Big-endian writer, the mirror image of [`RBuffer`](crate::rbuffer::RBuffer).

/// Append-only big-endian writer over an owned `Vec<u8>`.
#[derive(Debug, Default)]
pub struct WBuffer {
    data: Vec<u8>,
}

impl WBuffer {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `n` bytes.
    pub fn with_capacity(n: usize) -> Self {
        Self { data: Vec::with_capacity(n) }
    }

    /// Bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Written bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the writer and return its bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, b: &[u8]) {
        self.data.extend_from_slice(b);
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, v: u8) {
        self.data.push(v);
    }

    /// Append a signed byte.
    pub fn write_i8(&mut self, v: i8) {
        self.write_bytes(&v.to_be_bytes());
    }

    /// Append a big-endian u16.
    pub fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_be_bytes());
    }

    /// Append a big-endian u32.
    pub fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_be_bytes());
    }

    /// Append a big-endian f32, bit for bit.
    pub fn write_f32(&mut self, v: f32) {
        self.write_bytes(&v.to_be_bytes());
    }

    /// Append a run of big-endian f32 values.
    pub fn write_f32_slice(&mut self, vs: &[f32]) {
        for &v in vs {
            self.write_f32(v);
        }
    }

    /// Append a boolean as a single 0/1 byte.
    pub fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }
}
