//! Non-interactive output: listings, art previews, plain playback and JSON
//! export.

use std::io::{self, Write};
use std::thread;
use std::time::Instant;

use asciimate_art::{ArtBlock, ArtLibrary};
use asciimate_core::Frame;
use asciimate_effects::{Entry, Player, Registry};
use serde::Serialize;

/// Print every registered animation as `  {key}: {name}`.
pub fn write_list<W: Write>(out: &mut W, registry: &Registry) -> io::Result<()> {
    writeln!(out, "Available Animations:")?;
    for entry in registry.entries() {
        writeln!(out, "  {}: {}", entry.key, entry.name)?;
    }
    Ok(())
}

/// Print every art block whose name contains `query`, centred in
/// `max_width` columns. Returns the number of matches.
pub fn write_matches<W: Write>(
    out: &mut W,
    library: &ArtLibrary,
    query: &str,
    max_width: usize,
) -> io::Result<usize> {
    let matches = library.search(query);
    if matches.is_empty() {
        writeln!(out, "No art found matching '{query}'")?;
        return Ok(0);
    }
    for block in &matches {
        writeln!(out, "\n🎨 {} 🎨\n", block.title())?;
        write_centered(out, block, max_width)?;
    }
    Ok(matches.len())
}

fn write_centered<W: Write>(out: &mut W, block: &ArtBlock, max_width: usize) -> io::Result<()> {
    let padding = " ".repeat(max_width.saturating_sub(block.width()) / 2);
    for line in &block.lines {
        writeln!(out, "{padding}{line}")?;
    }
    Ok(())
}

/// Write frames to `out` as the player produces them, each followed by a
/// blank line. With `delay`, sleeps for every frame's hold.
pub fn play_plain<W: Write>(out: &mut W, player: &mut Player, delay: bool) -> io::Result<usize> {
    let mut written = 0;
    if let Some(frame) = player.current() {
        write_frame(out, frame)?;
        written += 1;
    }
    loop {
        let now = Instant::now();
        let Some(wait) = player.time_until_next(now) else {
            break;
        };
        if delay {
            thread::sleep(wait);
        }
        if player.tick(now + wait) {
            if let Some(frame) = player.current() {
                write_frame(out, frame)?;
                written += 1;
            }
        }
    }
    Ok(written)
}

fn write_frame<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    writeln!(out, "{}", frame.grid)?;
    writeln!(out)?;
    out.flush()
}

#[derive(Debug, Serialize)]
struct Export<'a> {
    name: &'a str,
    key: u32,
    delay_ms: u64,
    frames: Vec<String>,
}

/// Write one run of an animation as a JSON document.
pub fn write_json<W: Write>(
    out: &mut W,
    entry: &Entry,
    frames: impl Iterator<Item = Frame>,
    delay_ms: u64,
) -> serde_json::Result<()> {
    let export = Export {
        name: &entry.name,
        key: entry.key,
        delay_ms,
        frames: frames.map(|frame| frame.text()).collect(),
    };
    serde_json::to_writer(&mut *out, &export)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use asciimate_art::parse;
    use asciimate_core::AnimationSpeed;
    use asciimate_effects::RevealOptions;

    use super::*;

    fn setup() -> (ArtLibrary, Registry) {
        let library = parse("Fox\n /\\_/\\\n( o.o )\n\nBar\n---");
        let options = RevealOptions {
            include_dissolve: false,
            reveal_chunk_size: 100,
            ..RevealOptions::default()
        };
        let registry = Registry::builtin(&library, &options);
        (library, registry)
    }

    fn to_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_list() {
        let (_, registry) = setup();
        let mut out = Vec::new();
        write_list(&mut out, &registry).unwrap();
        let text = to_string(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Available Animations:");
        assert_eq!(lines[1], "  1: Orbital Motion");
        assert_eq!(lines[10], "  10: Animate Fox");
        assert_eq!(lines[11], "  11: Animate Bar");
    }

    #[test]
    fn test_view_centers_art() {
        let (library, _) = setup();
        let mut out = Vec::new();
        assert_eq!(write_matches(&mut out, &library, "FO", 17).unwrap(), 1);
        let text = to_string(out);
        assert!(text.contains("🎨 Fox 🎨"));
        // block is 7 wide, so (17 - 7) / 2 = 5 columns of padding
        assert!(text.contains("\n      /\\_/\\\n     ( o.o )\n"));
    }

    #[test]
    fn test_view_no_match() {
        let (library, _) = setup();
        let mut out = Vec::new();
        assert_eq!(write_matches(&mut out, &library, "whale", 80).unwrap(), 0);
        assert_eq!(to_string(out), "No art found matching 'whale'\n");
    }

    #[test]
    fn test_plain_playback_without_delay() {
        let (_, registry) = setup();
        let entry = registry.get(11).unwrap();
        let frames = registry.start(11, Some(1)).unwrap();
        let mut player = Player::new(&entry.name, frames, AnimationSpeed::Normal, Instant::now());
        let mut out = Vec::new();
        let written = play_plain(&mut out, &mut player, false).unwrap();
        assert_eq!(written, 2);
        assert!(player.is_finished());
        let text = to_string(out);
        assert!(text.ends_with("---\n\n"));
        assert_eq!(text.matches("\n\n").count(), 2);
    }

    #[test]
    fn test_json_export_shape() {
        let (_, registry) = setup();
        let entry = registry.get(11).unwrap();
        let frames = registry.start(11, Some(1)).unwrap();
        let mut out = Vec::new();
        write_json(&mut out, entry, frames, 100).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["name"], "Animate Bar");
        assert_eq!(value["key"], 11);
        assert_eq!(value["delay_ms"], 100);
        let frames = value["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1], "---");
    }
}
