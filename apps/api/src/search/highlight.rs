const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// Wraps every occurrence of `letter` in `<mark>` tags. Display only.
pub fn highlight_letter(word: &str, letter: char) -> String {
    let mut highlighted = String::with_capacity(word.len() + 16);
    for c in word.chars() {
        if c == letter {
            highlighted.push_str(MARK_OPEN);
            highlighted.push(c);
            highlighted.push_str(MARK_CLOSE);
        } else {
            highlighted.push(c);
        }
    }
    highlighted
}
