#![forbid(unsafe_code)]

//! Box-drawing glyph sets for [`crate::BorderedBox`].

/// The glyphs used to draw a bordered box's frame, including the tee
/// connectors used for the title separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_tee: char,
    pub right_tee: char,
}

impl BorderSet {
    /// Single-line border with square corners.
    pub const PLAIN: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        left_tee: '├',
        right_tee: '┤',
    };

    /// Single-line border with rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Self::PLAIN
    };

    /// Double-line border.
    pub const DOUBLE: Self = Self {
        vertical: '║',
        horizontal: '═',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        left_tee: '╠',
        right_tee: '╣',
    };
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::PLAIN
    }
}
