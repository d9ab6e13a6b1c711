use similar::{ChangeTag, TextDiff};

/// Render a line diff from `old` to `new`.
/// Returns None if the texts are identical.
pub fn render(old: &str, new: &str) -> Option<String> {
    if old == new {
        return None;
    }

    let diff = TextDiff::from_lines(old, new);
    let mut output = String::new();
    for change in diff.iter_all_changes() {
        let prefix = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        output.push_str(prefix);
        output.push_str(change.value());
        if change.missing_newline() {
            output.push('\n');
        }
    }
    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_is_none() {
        assert!(render("a\nb\n", "a\nb\n").is_none());
    }

    #[test]
    fn stale_destination() {
        let out = render("stale", "# Project\n\nHello world.\n").unwrap();
        assert!(out.contains("-stale\n"));
        assert!(out.contains("+# Project\n"));
        assert!(out.contains("+Hello world.\n"));
    }

    #[test]
    fn mixed() {
        let out = render("line1\nline2\nline3\n", "line1\nchanged\nline3\n").unwrap();
        assert!(out.contains(" line1\n"));
        assert!(out.contains("-line2\n"));
        assert!(out.contains("+changed\n"));
        assert!(out.contains(" line3\n"));
    }

    #[test]
    fn trailing_newline_only() {
        let out = render("a", "a\n").unwrap();
        assert!(out.contains("-a\n"));
        assert!(out.contains("+a\n"));
    }
}
