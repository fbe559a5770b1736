//! Process exit codes

/// Sync published, or there was nothing to publish
pub const SUCCESS: u8 = 0;

/// Any precondition or operation failure
pub const FAILURE: u8 = 1;

/// Exit code for the outcome of a command
pub fn exit_code<T>(result: &anyhow::Result<T>) -> u8 {
    match result {
        Ok(_) => SUCCESS,
        Err(_) => FAILURE,
    }
}
