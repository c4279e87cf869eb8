pub mod hash_utils;
pub mod progress_utils;
#[cfg(test)]
pub mod test_utils;
pub mod time_utils;
