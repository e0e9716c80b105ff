pub mod md5;

// Re-export MD5 functionality
pub use md5::{md5_digest, md5_hex, Md5, Md5Digest, MD5_BLOCK_SIZE, MD5_OUTPUT_SIZE};
