//! Tube symbols and their seven-segment glyphs
//!
//! Every symbol the display can show has a stable byte encoding, used
//! by the shared frame buffer, and a fixed segment pattern, used by the
//! scanner when it builds the shift register bytes.

/// Everything one IV-6 tube can show.
///
/// The byte values are stable: the frame buffer stores symbols as raw
/// bytes and decodes them with [`Symbol::from_u8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Symbol {
    D0 = 0,
    D1 = 1,
    D2 = 2,
    D3 = 3,
    D4 = 4,
    D5 = 5,
    D6 = 6,
    D7 = 7,
    D8 = 8,
    D9 = 9,
    /// All segments off
    Blank = 10,
    /// Separator dash, also the menu's back-to-clock marker
    Minus = 11,
    /// Degree sign for the temperature face
    Degree = 12,
    /// Color setup title
    C = 13,
    /// Time setup title, drawn like a 4
    Ch = 14,
    /// Menu screen marker
    P = 15,
}

/// Segment patterns indexed by symbol byte.
///
/// Bits 0..=6 are segments a..=g, bit 7 is the decimal point.
const SEGMENTS: [u8; 16] = [
    0b0011_1111, // 0: abcdef
    0b0000_0110, // 1: bc
    0b0101_1011, // 2: abdeg
    0b0100_1111, // 3: abcdg
    0b0110_0110, // 4: bcfg
    0b0110_1101, // 5: acdfg
    0b0111_1101, // 6: acdefg
    0b0000_0111, // 7: abc
    0b0111_1111, // 8: abcdefg
    0b0110_1111, // 9: abcdfg
    0b0000_0000, // blank
    0b0100_0000, // minus: g
    0b0110_0011, // degree: abfg
    0b0011_1001, // C: adef
    0b0110_0110, // Ch: bcfg
    0b0111_0011, // P: abefg
];

const DIGITS: [Symbol; 10] = [
    Symbol::D0,
    Symbol::D1,
    Symbol::D2,
    Symbol::D3,
    Symbol::D4,
    Symbol::D5,
    Symbol::D6,
    Symbol::D7,
    Symbol::D8,
    Symbol::D9,
];

impl Symbol {
    /// Stable byte encoding.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a byte back into a symbol.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Symbol::D0),
            1 => Some(Symbol::D1),
            2 => Some(Symbol::D2),
            3 => Some(Symbol::D3),
            4 => Some(Symbol::D4),
            5 => Some(Symbol::D5),
            6 => Some(Symbol::D6),
            7 => Some(Symbol::D7),
            8 => Some(Symbol::D8),
            9 => Some(Symbol::D9),
            10 => Some(Symbol::Blank),
            11 => Some(Symbol::Minus),
            12 => Some(Symbol::Degree),
            13 => Some(Symbol::C),
            14 => Some(Symbol::Ch),
            15 => Some(Symbol::P),
            _ => None,
        }
    }

    /// Digit symbol for `n % 10`.
    pub fn digit(n: u8) -> Self {
        DIGITS[usize::from(n % 10)]
    }

    /// Seven-segment pattern for this symbol.
    pub const fn segments(self) -> u8 {
        SEGMENTS[self as usize]
    }

    /// Raw pattern pair for this symbol on a tube position: the segment
    /// byte and the grid-select byte.
    ///
    /// `position` must be below 8 (the hardware has 5 grids). The bytes
    /// are active-high; the scanner inverts them for the wire.
    pub fn encode(self, position: u8) -> [u8; 2] {
        [self.segments(), 1 << position]
    }
}
