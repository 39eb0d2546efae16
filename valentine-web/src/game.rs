//! Core types re-exported for the web front-end, plus the session seed.

pub use valentine_game::*;

/// Seed for a fresh session: browser entropy on wasm, a fixed value elsewhere.
#[must_use]
pub fn session_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let mut bytes = [0_u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => return u64::from_le_bytes(bytes),
            Err(err) => log::warn!("no entropy for session seed: {err}"),
        }
    }
    0x5EED_0214
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_seed_is_stable() {
        assert_eq!(session_seed(), session_seed());
    }
}
