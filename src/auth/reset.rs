use rand::{rngs::OsRng, RngCore};

/// Raw entropy per reset token; hex encoding doubles the length on the wire.
const RESET_TOKEN_BYTES: usize = 12;

/// Opaque single-use token for the password-reset flow. Unrelated to the
/// signed session tokens; consumed by exact equality against the stored
/// value while its expiry window is open.
pub fn generate_reset_token() -> String {
    let mut buf = [0u8; RESET_TOKEN_BYTES];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_fixed_hex_length() {
        let token = generate_reset_token();
        assert_eq!(token.len(), RESET_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(generate_reset_token(), generate_reset_token());
    }
}
