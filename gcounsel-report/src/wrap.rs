use crate::metrics::Font;

///
/// Greedy first-fit word wrap.
///
/// Words are accumulated, separated by single spaces, until the next word would push the
/// measured width past `max_width`. A word that is wider than `max_width` on its own is
/// emitted whole on a line of its own. No empty lines are produced.
///
/// # Arguments
/// - text: text to wrap; runs of whitespace count as one separator
/// - max_width: width budget in points
/// - font: font used for measuring
/// - size: font size in points
///
pub fn wrap_text(text: &str, max_width: f32, font: Font, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate_width = font.string_width(&current, size)
            + font.string_width(" ", size)
            + font.string_width(word, size);

        if candidate_width <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
