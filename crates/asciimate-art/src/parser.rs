//! Block parser for art files.

use tracing::debug;

use crate::{ArtBlock, ArtLibrary};

/// Whether a non-blank line starts a new block.
///
/// Headers have no leading whitespace and, once trimmed, contain only ASCII
/// letters, digits and spaces. Trailing whitespace is tolerated.
pub fn is_header(line: &str) -> bool {
    if line.starts_with(char::is_whitespace) {
        return false;
    }
    let label = line.trim_end();
    !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// Parse the text of an art file.
pub fn parse(source: &str) -> ArtLibrary {
    parse_lines(source.lines())
}

/// Parse art from individual lines (without line terminators).
pub fn parse_lines<I, S>(lines: I) -> ArtLibrary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut library = ArtLibrary::new();
    let mut pending: Option<(String, Vec<String>)> = None;

    for line in lines {
        let raw = line.as_ref().trim_end_matches(['\r', '\n']);
        if raw.trim().is_empty() {
            continue;
        }

        if is_header(raw) {
            if let Some((name, content)) = pending.take() {
                commit(&mut library, name, content);
            }
            pending = Some((raw.trim().to_string(), Vec::new()));
        } else if let Some((_, content)) = pending.as_mut() {
            content.push(raw.to_string());
        } else {
            debug!(line = raw, "skipping art line before first header");
        }
    }

    if let Some((name, content)) = pending {
        commit(&mut library, name, content);
    }

    library
}

fn commit(library: &mut ArtLibrary, name: String, content: Vec<String>) {
    if content.is_empty() {
        debug!(header = %name, "dropping header without art lines");
        return;
    }
    library.insert(ArtBlock::new(name.to_lowercase(), content));
}
