use crate::model::constants::{FNV_OFFSET_BASIS, FNV_PRIME};

/// 32-bit FNV-1a over the UTF-8 bytes of `input`.
pub fn fnv1a_32(input: &str) -> u32 {
    input
        .bytes()
        .fold(FNV_OFFSET_BASIS, |hash, byte| (hash ^ byte as u32).wrapping_mul(FNV_PRIME))
}
