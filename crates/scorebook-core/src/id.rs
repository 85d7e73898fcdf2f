//! Record id generation.
//!
//! Ids are a base-36 millisecond timestamp followed by a base-36 random
//! suffix. Uniqueness is the creator's responsibility; the store does not
//! validate it.

use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a new opaque record id.
pub fn generate_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().unsigned_abs();
    let suffix: u64 = rand::thread_rng().gen();
    format!("{}{}", to_base36(millis), to_base36(suffix))
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // ALPHABET is ASCII, so the digits are valid UTF-8.
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_use_the_base36_alphabet() {
        let id = generate_id();
        assert!(!id.is_empty());
        assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn consecutive_ids_differ() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn base36_round_trips_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }
}
