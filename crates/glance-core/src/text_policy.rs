//! Text shaping for the compact notification and navigation surfaces.

use core::str;

/// Visible characters kept before the ellipsis marker.
pub const NOTIFICATION_VISIBLE_CHARS: usize = 20;
pub const ELLIPSIS: &str = "...";

/// Builds the single notification line `"title: body"`, truncated to
/// [`NOTIFICATION_VISIBLE_CHARS`] characters plus `"..."` when longer.
/// Counting is per character; `out` bounds the UTF-8 bytes.
pub fn notification_line<'a>(title: &str, body: &str, out: &'a mut [u8]) -> &'a str {
    let mut len = 0usize;
    let mut char_count = 0usize;
    let mut truncated = false;

    for ch in title.chars().chain(": ".chars()).chain(body.chars()) {
        if char_count >= NOTIFICATION_VISIBLE_CHARS {
            truncated = true;
            break;
        }

        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8).as_bytes();
        if len + encoded.len() > out.len() {
            truncated = true;
            break;
        }

        out[len..len + encoded.len()].copy_from_slice(encoded);
        len += encoded.len();
        char_count += 1;
    }

    if truncated && len + ELLIPSIS.len() <= out.len() {
        out[len..len + ELLIPSIS.len()].copy_from_slice(ELLIPSIS.as_bytes());
        len += ELLIPSIS.len();
    }

    str::from_utf8(&out[..len]).unwrap_or("?")
}

/// Splits direction text for two-line layout at the space nearest its
/// character midpoint (earlier space wins ties). Spaces that would leave
/// an empty half are not split candidates. Returns the whole string when
/// no usable space exists; the caller may let it overflow.
pub fn split_direction(text: &str) -> (&str, Option<&str>) {
    let total_chars = text.chars().count();
    if total_chars < 3 {
        return (text, None);
    }

    let mid = total_chars / 2;
    let mut best: Option<(usize, usize)> = None;

    for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
        if ch != ' ' || byte_idx == 0 || byte_idx + ch.len_utf8() == text.len() {
            continue;
        }

        let distance = char_idx.abs_diff(mid);
        match best {
            Some((_, prev)) if prev <= distance => {}
            _ => best = Some((byte_idx, distance)),
        }
    }

    match best {
        Some((byte_idx, _)) => (&text[..byte_idx], Some(&text[byte_idx + 1..])),
        None => (text, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_notification_is_kept_verbatim() {
        let mut buf = [0u8; 64];
        assert_eq!(notification_line("Mail", "Hi", &mut buf), "Mail: Hi");
    }

    #[test]
    fn long_notification_keeps_twenty_chars_plus_ellipsis() {
        let mut buf = [0u8; 64];
        let line = notification_line(
            "Mail",
            "New message from Alice regarding tomorrow",
            &mut buf,
        );
        assert_eq!(line, "Mail: New message fr...");
        assert_eq!(line.chars().count(), NOTIFICATION_VISIBLE_CHARS + 3);
    }

    #[test]
    fn notification_at_exactly_twenty_chars_has_no_ellipsis() {
        let mut buf = [0u8; 64];
        // 4 + 2 + 14 = 20 characters.
        let line = notification_line("Mail", "from Bob today", &mut buf);
        assert_eq!(line, "Mail: from Bob today");
    }

    #[test]
    fn direction_splits_at_space_nearest_midpoint() {
        let (first, second) = split_direction("Turn left onto Main Street in 200 meters");
        assert_eq!(first, "Turn left onto Main");
        assert_eq!(second, Some("Street in 200 meters"));
    }

    #[test]
    fn split_halves_reconstruct_the_original() {
        let original = "Turn left onto Main Street in 200 meters";
        let (first, second) = split_direction(original);
        let second = second.unwrap();
        assert!(!first.is_empty() && !second.is_empty());

        let mut rebuilt = std::string::String::from(first);
        rebuilt.push(' ');
        rebuilt.push_str(second);
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn spaceless_direction_stays_on_one_line() {
        assert_eq!(
            split_direction("Weiterfahren"),
            ("Weiterfahren", None)
        );
    }

    #[test]
    fn earlier_space_wins_midpoint_ties() {
        // Spaces at char 1 and 3, midpoint 2: both are 1 away.
        assert_eq!(split_direction("a b c"), ("a", Some("b c")));
    }
}
