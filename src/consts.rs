//! Project-wide constants.

use std::path::PathBuf;

/// Quote service queried by `post-quote`.
pub const QUOTE_URL: &str = "https://quotes.schollz.com/subject/friend.json";

/// Letter endpoint of the local kiki node.
pub const LETTER_URL: &str = "http://localhost:8003/letter";

/// Author shown when the quote service has no name on file.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Fill used for the greyscale profile tile set.
pub const GREY_FILL: &str = "#b7b7b7";

/// Fuzz tolerance (percent) for the color replace.
pub const DEFAULT_FUZZ_PERCENT: u8 = 50;

/// Key color replaced in the source tiles.
pub const DEFAULT_KEY_COLOR: &str = "red";

/// External image tool binary.
pub const DEFAULT_CONVERT_BIN: &str = "convert";

/// The numbered profile tile set recolored by `greyscale`.
pub fn default_tile_set() -> Vec<PathBuf> {
    (1..=8)
        .map(|i| PathBuf::from(format!("all/kikiset-0{}.png", i)))
        .collect()
}
