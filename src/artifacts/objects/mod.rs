pub mod commit;
pub mod commit_id;

/// Length of a commit id in hexadecimal characters
pub const COMMIT_ID_LENGTH: usize = 40;
/// Largest accepted commit message, in bytes
pub const MESSAGE_MAX_LEN: usize = 511;
