// Display helpers for entry cards and the detail sheet.

const TITLE_WORDS: usize = 5;
const SNIPPET_CHARS: usize = 120;
const UNTITLED: &str = "Untitled Spark";

/// First few words of the entry, whitespace-normalized.
pub fn entry_title(content: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.is_empty() {
        return UNTITLED.to_string();
    }
    let title = words[..words.len().min(TITLE_WORDS)].join(" ");
    if words.len() > TITLE_WORDS {
        format!("{}...", title)
    } else {
        title
    }
}

pub fn snippet(content: &str) -> String {
    match content.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
