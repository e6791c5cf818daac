/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Numeric seeds are used as-is, anything else is hashed with FNV-1a.
pub(crate) fn seed_from_str(seed: &str) -> u64 {
    if let Ok(seed) = seed.parse() {
        return seed;
    }
    seed.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

/// Renders seconds as `m:ss`.
pub(crate) fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Columns for a roughly square board.
pub(crate) fn grid_columns(cards: usize) -> usize {
    (1..=cards).find(|cols| cols * cols >= cards).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(30), "0:30");
        assert_eq!(format_time(5), "0:05");
        assert_eq!(format_time(125), "2:05");
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn seed_from_str_accepts_numbers_and_words() {
        assert_eq!(seed_from_str("42"), 42);
        assert_eq!(seed_from_str(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(seed_from_str("pexeso"), seed_from_str("pexeso"));
        assert_ne!(seed_from_str("pexeso"), seed_from_str("Pexeso"));
    }

    #[test]
    fn grid_is_square_for_default_deck() {
        assert_eq!(grid_columns(16), 4);
        assert_eq!(grid_columns(12), 4);
        assert_eq!(grid_columns(2), 2);
    }
}
