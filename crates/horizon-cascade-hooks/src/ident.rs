//! Identifier generation for hook and condition custom properties.

/// Hash a string into a short base-36 identifier.
///
/// Uses the 31-multiplier string hash over UTF-16 code units, masked to
/// 31 bits, so identifiers are stable across runs and platforms.
pub fn hash(input: &str) -> String {
    let mut value: u32 = 0;
    for unit in input.encode_utf16() {
        value = (value << 5).wrapping_sub(value).wrapping_add(unit as u32) & 0x7fff_ffff;
    }
    to_base36(value)
}

/// Identifier for a hook's toggle properties (`--<id>-0` / `--<id>-1`).
///
/// Debug identifiers keep a sanitised copy of the hook name so the
/// generated stylesheet stays readable.
pub fn hook_id(name: &str, definition: &str, debug: bool) -> String {
    let hashed = hash(definition);
    if !debug {
        return hashed;
    }

    let readable: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{}-{}", readable, hashed)
}

/// Identifier for the helper properties of a compound condition.
pub(crate) fn condition_id(canonical: &str) -> String {
    format!("cond-{}", hash(canonical))
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = vec![];
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_rendering() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn hash_is_deterministic_and_distinct() {
        assert_eq!(hash("&:hover"), hash("&:hover"));
        assert_ne!(hash("&:hover"), hash("&:focus"));
        assert_eq!(hash(""), "0");
        // "a" is code unit 97.
        assert_eq!(hash("a"), to_base36(97));
    }

    #[test]
    fn debug_ids_are_readable() {
        let id = hook_id(":hover", "&:hover", true);
        assert!(id.starts_with("_hover-"));
        assert_eq!(hook_id(":hover", "&:hover", false), hash("&:hover"));

        let media = hook_id("@media (min-width: 768px)", "@media (min-width: 768px)", true);
        assert!(media.starts_with("_media__min-width__768px_-"));
    }
}
