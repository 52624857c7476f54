//! Record id generation.
//!
//! Ids are short base-36 strings cut from the random bits of a v4 UUID. They only need to be
//! unique within one collection for one session, so ten characters (about 51 bits) is plenty.
//! Ids are never persisted and never compared across sessions.

use uuid::Uuid;

pub const ID_LEN: usize = 10;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a fresh record id.
pub fn generate() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let mut id = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        id.push(ALPHABET[(bits % 36) as usize] as char);
        bits /= 36;
    }
    id
}

/// Generates an id for which `taken` returns false.
pub fn generate_unique(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate();
        if !taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_short_base36() {
        let id = generate();
        assert_eq!(id.len(), ID_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn ids_do_not_collide_at_session_scale() {
        let ids: HashSet<String> = (0..1000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn generate_unique_skips_taken_ids() {
        let first = generate();
        let second = generate_unique(|id| id == first);
        assert_ne!(first, second);
    }
}
