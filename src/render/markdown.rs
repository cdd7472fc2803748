use crate::models::{Entry, EntryKind};

/// Heading markers a note can promote into, longest first so `#####` is not
/// matched as `#`.
const MARKDOWN_HEADERS: [&str; 5] = ["#####", "####", "###", "##", "#"];

/// All marker tokens recognized at the start of a note, headings plus the
/// list marker.
const MARKDOWN_MARKERS: [&str; 6] = ["#####", "####", "###", "##", "#", "-"];

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Uppercase the first letter of promoted headings, for highlights taken
    /// from lowercase running text.
    pub lower_case_titles: bool,
}

/// Render a book's entries as a Markdown document.
///
/// Entries are sorted by [`Entry::sort_location`], which puts a note
/// immediately before the highlight it annotates. A note whose content is
/// exactly one marker token and whose successor is a highlight becomes that
/// highlight's heading prefix instead of a line of its own; every other note
/// renders as a list item, and highlights without a pending heading render
/// as block quotes.
pub fn render_markdown(entries: &[Entry], title: &str, options: &RenderOptions) -> String {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.sort_location());

    let mut lines: Vec<String> = vec![format!("# {}", title), String::new()];
    let mut pending_header: Option<&str> = None;

    for (index, entry) in sorted.iter().enumerate() {
        match entry.kind {
            EntryKind::Note { location } => {
                let marker =
                    MARKDOWN_MARKERS.iter().copied().find(|m| entry.content.starts_with(m));
                match marker {
                    Some(marker)
                        if entry.content == marker
                            && sorted.get(index + 1).is_some_and(|next| next.is_highlight()) =>
                    {
                        pending_header = Some(marker);
                    }
                    _ => {
                        lines.push(format!("- {} (location {})", entry.content, location));
                        lines.push(String::new());
                    }
                }
            }
            EntryKind::Highlight { start, end } => {
                match pending_header.take() {
                    Some(marker) => {
                        let content =
                            if MARKDOWN_HEADERS.contains(&marker) && options.lower_case_titles {
                                capitalize(&entry.content)
                            } else {
                                entry.content.clone()
                            };
                        lines.push(format!("{} {} ({}-{})", marker, content, start, end));
                    }
                    None => lines.push(format!("> {} ({}-{})", entry.content, start, end)),
                }
                lines.push(String::new());
            }
        }
    }

    lines.join("\n")
}

/// Uppercase the first letter, leaving the rest of the text alone.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
