use std::fmt;

/// Basic ANSI terminal foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Reset,
}

impl TermColor {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            TermColor::Black => "\x1b[30m",
            TermColor::Red => "\x1b[31m",
            TermColor::Green => "\x1b[32m",
            TermColor::Yellow => "\x1b[33m",
            TermColor::Blue => "\x1b[34m",
            TermColor::Magenta => "\x1b[35m",
            TermColor::Cyan => "\x1b[36m",
            TermColor::White => "\x1b[37m",
            TermColor::Reset => "\x1b[0m",
        }
    }
}

impl fmt::Display for TermColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
