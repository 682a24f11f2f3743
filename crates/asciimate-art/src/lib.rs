//! ASCII art blocks for asciimate.
//!
//! Art files are plain UTF-8 text made of named blocks. A block starts with
//! a header line (a plain label of letters, digits and spaces with no
//! leading whitespace) and continues with every following non-blank line
//! until the next header:
//!
//! ```text
//! Cat
//!   /\_/\
//!  ( o.o )
//!
//! Fish
//!  ><(((°>
//! ```
//!
//! Blank lines are ignored. A header with no content lines is dropped, and a
//! repeated header replaces the earlier block's content.

mod block;
mod error;
mod library;
mod parser;

pub use block::ArtBlock;
pub use error::{ArtError, Result};
pub use library::{ArtLibrary, load};
pub use parser::{is_header, parse, parse_lines};
