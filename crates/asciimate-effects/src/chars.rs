//! Character constants for animations.

/// Glyphs drawn for scrambled cells during reveal and dissolve.
pub const NOISE_CHARS: &[char] = &[
    '░', '▒', '▓', '█', '▄', '▀', '▐', '▌', '▆', '▇', '▉', '▊', '▋', '●', '◉', '✦', '✧', '*',
    '+', '#', '@',
];

/// Characters used for matrix rain.
pub const MATRIX_CHARS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ヲ', 'ン', '0', '1',
    '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Characters used for the spiral galaxy arms.
pub const GALAXY_CHARS: &[char] = &['●', '◉', '○', '*', '·', '+', '✦'];

/// Faint background dust around the galaxy.
pub const DUST_CHARS: &[char] = &['·', '‧', '∘'];

/// Characters used for wave crests.
pub const WAVE_CHARS: &[char] = &['~', '≈', '∼'];

/// Molten lava texture.
pub const LAVA_CHARS: &[char] = &['█', '▓', '▒', '░', '*'];

/// Sparks flying off the lava.
pub const EMBER_CHARS: &[char] = &['*', '+', '✦'];

/// Flame glyphs indexed by distance from the base.
pub const FIRE_GRADIENT: &[char] = &[' ', '.', ':', '*', 'o', 'O', '#', '█'];

/// Random flicker drawn over the lower half of the fire.
pub const FIRE_FLICKER_CHARS: &[char] = &['░', '▒', '▓', '█', '*', '+', '^', '~'];
