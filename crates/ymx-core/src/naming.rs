//! Backend-bound filename derivation and sanitization.

/// Sanitizes a candidate filename for safe use on Linux.
///
/// - Replaces NUL, `/`, `\`, spaces, and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing spaces, dots, and underscores
/// - Caps the result at 255 bytes (NAME_MAX)
pub fn sanitize_filename(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let mapped = match c {
            '\0' | '/' | '\\' | ' ' | '\t' => '_',
            c if c.is_control() => '_',
            c => c,
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }

    let trimmed = out.trim_matches(|c| matches!(c, ' ' | '\t' | '.' | '_'));
    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }
    let mut cut = NAME_MAX;
    while cut > 0 && !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    trimmed[..cut].to_string()
}

/// Derived artifact filename for a video: `<title>_<id>.mp3`, sanitized.
pub fn mp3_filename(title: &str, id: &str) -> String {
    sanitize_filename(&format!("{title}_{id}.mp3"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_slashes_and_backslashes() {
        assert_eq!(sanitize_filename("a/b\\c.mp3"), "a_b_c.mp3");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_filename("  ..  song.mp3  ..  "), "song.mp3");
    }

    #[test]
    fn collapses_underscore_runs() {
        assert_eq!(sanitize_filename("my   song.mp3"), "my_song.mp3");
        assert_eq!(sanitize_filename("my___song.mp3"), "my_song.mp3");
    }

    #[test]
    fn replaces_control_chars() {
        assert_eq!(sanitize_filename("song\x00name.mp3"), "song_name.mp3");
    }

    #[test]
    fn caps_at_name_max() {
        let long = "x".repeat(400);
        assert_eq!(sanitize_filename(&long).len(), 255);
    }

    #[test]
    fn derives_mp3_filename() {
        assert_eq!(mp3_filename("Single Video", "abc123"), "Single_Video_abc123.mp3");
    }
}
