//! MD5 message digest (RFC 1321) in pure Rust.
//!
//! MD5 is broken as a cryptographic hash: collisions are cheap to produce.
//! Use it only for integrity checks against accidental corruption or for
//! interoperating with formats that mandate it.

use std::io;

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = 16;

/// The size of one MD5 input block in bytes.
pub const MD5_BLOCK_SIZE: usize = 64;

/// A finished MD5 digest.
pub type Md5Digest = [u8; MD5_OUTPUT_SIZE];

/// Offset of the 64-bit length field within the final block.
const LENGTH_OFFSET: usize = 56;

/// The initial values for (A, B, C, D) from RFC 1321.
const INIT_STATE: [u32; 4] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476];

/// The sine table constants (K) in MD5 (32 bits).
/// K[i] = floor(2^32 * abs(sin(i+1))) for i=0..63
#[rustfmt::skip]
static K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left rotation per step, four distinct amounts per round.
#[rustfmt::skip]
static S: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

/// Streaming MD5 state.
///
/// Feed data with [`update`](Md5::update) in chunks of any size, then call
/// [`finalize`](Md5::finalize), which consumes the context so it cannot be
/// updated afterwards. [`finalize_reset`](Md5::finalize_reset) produces the
/// digest and leaves a fresh context behind instead.
#[derive(Debug, Clone)]
pub struct Md5 {
    /// Running hash (A, B, C, D).
    state: [u32; 4],
    /// Unconsumed input, always shorter than one block between calls.
    buffer: [u8; MD5_BLOCK_SIZE],
    buffer_len: usize,
    /// Total message length in bits, wrapping at 2^64.
    length_bits: u64,
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Creates a new MD5 context.
    pub fn new() -> Self {
        Self {
            state: INIT_STATE,
            buffer: [0u8; MD5_BLOCK_SIZE],
            buffer_len: 0,
            length_bits: 0,
        }
    }

    /// Absorbs `data`, compressing every completed 64-byte block.
    pub fn update(&mut self, data: &[u8]) {
        self.length_bits = self
            .length_bits
            .wrapping_add((data.len() as u64).wrapping_mul(8));
        self.absorb(data);
    }

    /// Pads the message, compresses the final block(s) and returns the digest.
    pub fn finalize(mut self) -> Md5Digest {
        self.finish()
    }

    /// Returns the digest and resets the context for a new message.
    pub fn finalize_reset(&mut self) -> Md5Digest {
        let digest = self.finish();
        self.reset();
        digest
    }

    /// Discards all absorbed input.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn absorb(&mut self, mut data: &[u8]) {
        if self.buffer_len > 0 {
            let take = (MD5_BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < MD5_BLOCK_SIZE {
                return;
            }
            compress(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        let mut blocks = data.chunks_exact(MD5_BLOCK_SIZE);
        for block in &mut blocks {
            compress(&mut self.state, block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    fn finish(&mut self) -> Md5Digest {
        let length_bits = self.length_bits;

        // 0x80 then zeros until 56 bytes into a block; may spill into a second block.
        let mut padding = [0u8; MD5_BLOCK_SIZE];
        padding[0] = 0x80;
        let pad_len = if self.buffer_len < LENGTH_OFFSET {
            LENGTH_OFFSET - self.buffer_len
        } else {
            MD5_BLOCK_SIZE + LENGTH_OFFSET - self.buffer_len
        };
        self.absorb(&padding[..pad_len]);
        self.absorb(&length_bits.to_le_bytes());
        debug_assert_eq!(self.buffer_len, 0);

        let mut output = [0u8; MD5_OUTPUT_SIZE];
        for (chunk, word) in output.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        output
    }
}

impl io::Write for Md5 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Processes a 512-bit (64-byte) block, updating `state`.
/// The block is read as 16 little-endian 32-bit words.
fn compress(state: &mut [u32; 4], block: &[u8]) {
    debug_assert_eq!(block.len(), MD5_BLOCK_SIZE);

    let mut w = [0u32; 16];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let (f, g) = match i / 16 {
            // F function
            0 => ((b & c) | (!b & d), i),
            // G function
            1 => ((b & d) | (c & !d), (5 * i + 1) % 16),
            // H function
            2 => (b ^ c ^ d, (3 * i + 5) % 16),
            // I function
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let temp = a
            .wrapping_add(f)
            .wrapping_add(w[g])
            .wrapping_add(K[i])
            .rotate_left(S[i / 16][i % 4])
            .wrapping_add(b);

        a = d;
        d = c;
        c = b;
        b = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Convenience function to compute an MD5 digest in a single shot.
pub fn md5_digest(data: &[u8]) -> Md5Digest {
    let mut hasher = Md5::new();
    hasher.update(data);
    hasher.finalize()
}

/// MD5 of `data` as 32 lower-case hex digits.
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(md5_digest(data))
}
