/// A named piece of ASCII art.
///
/// Leading and trailing spaces in `lines` are part of the art and keep the
/// columns aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtBlock {
    /// Lowercase lookup key.
    pub name: String,
    /// Art rows, top to bottom.
    pub lines: Vec<String>,
}

impl ArtBlock {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Display name: every alphabetic run starts upper-case, the rest is
    /// lower-case ("big cat" -> "Big Cat", "3d box" -> "3D Box").
    pub fn title(&self) -> String {
        let mut title = String::with_capacity(self.name.len());
        let mut prev_alpha = false;
        for ch in self.name.chars() {
            if ch.is_alphabetic() {
                if prev_alpha {
                    title.extend(ch.to_lowercase());
                } else {
                    title.extend(ch.to_uppercase());
                }
                prev_alpha = true;
            } else {
                title.push(ch);
                prev_alpha = false;
            }
        }
        title
    }

    /// Width of the widest row, in characters.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }
}
