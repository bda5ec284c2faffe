//! Text layout primitives for the terminal page.

pub fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Frames `lines` in a box of `inner` columns, centered within `width`.
pub fn boxed(lines: &[String], inner: usize, width: usize) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(inner + 2));
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(centered(&border, width));
    for line in lines {
        let clipped: String = line.chars().take(inner).collect();
        let fill = inner - clipped.chars().count();
        out.push(centered(
            &format!("| {}{} |", clipped, " ".repeat(fill)),
            width,
        ));
    }
    out.push(centered(&border, width));
    out
}

/// Greedy word wrap; words longer than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn boxed_pads_every_line_to_inner_width() {
        let framed = boxed(&["ab".to_string(), "abcdef".to_string()], 4, 8);
        assert_eq!(framed, vec!["+------+", "| ab   |", "| abcd |", "+------+"]);
    }
}
