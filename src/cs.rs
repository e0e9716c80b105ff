pub mod ecc;
pub mod security;

// Re-export all modules
pub use ecc::crc;
pub use security::md5;
