use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum CellFlag {
    Snake = 0x01,
    Wall = 0x02,
    Food = 0x04,
    Grass = 0x08,
}

/// A single board cell, stored as a set of flag bits. A cell with no
/// flags set is a plain cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Cell {
    flags: u8,
}

impl Cell {
    /// a cell with no flags set
    pub const fn plain() -> Self {
        Cell { flags: 0 }
    }

    const fn with_flag(flag: CellFlag) -> Self {
        Cell { flags: flag as u8 }
    }

    #[allow(missing_docs)]
    pub const fn wall() -> Self {
        Self::with_flag(CellFlag::Wall)
    }

    #[allow(missing_docs)]
    pub const fn grass() -> Self {
        Self::with_flag(CellFlag::Grass)
    }

    #[allow(missing_docs)]
    pub const fn snake() -> Self {
        Self::with_flag(CellFlag::Snake)
    }

    /// Maps a compressed-format symbol to the cell it stands for. Symbols are
    /// case sensitive
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'W' => Some(Self::wall()),
            'E' => Some(Self::plain()),
            'G' => Some(Self::grass()),
            'S' => Some(Self::snake()),
            _ => None,
        }
    }

    /// The compressed-format symbol for this cell, `None` for flag
    /// combinations the format has no symbol for
    pub fn symbol(&self) -> Option<char> {
        match *self {
            c if c == Self::wall() => Some('W'),
            c if c == Self::plain() => Some('E'),
            c if c == Self::grass() => Some('G'),
            c if c == Self::snake() => Some('S'),
            _ => None,
        }
    }

    fn has(&self, flag: CellFlag) -> bool {
        self.flags & flag as u8 != 0
    }

    /// true when no flags are set
    pub fn is_plain(&self) -> bool {
        self.flags == 0
    }

    #[allow(missing_docs)]
    pub fn is_wall(&self) -> bool {
        self.has(CellFlag::Wall)
    }

    #[allow(missing_docs)]
    pub fn is_grass(&self) -> bool {
        self.has(CellFlag::Grass)
    }

    #[allow(missing_docs)]
    pub fn is_snake(&self) -> bool {
        self.has(CellFlag::Snake)
    }

    #[allow(missing_docs)]
    pub fn is_food(&self) -> bool {
        self.has(CellFlag::Food)
    }

    /// adds the food flag, keeping any other flags
    pub fn set_food(&mut self) {
        self.flags |= CellFlag::Food as u8;
    }

    /// the raw flag bits
    pub fn bits(&self) -> u8 {
        self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_map_to_single_flags() {
        assert!(Cell::from_symbol('W').unwrap().is_wall());
        assert!(Cell::from_symbol('E').unwrap().is_plain());
        assert!(Cell::from_symbol('G').unwrap().is_grass());
        assert!(Cell::from_symbol('S').unwrap().is_snake());
        assert_eq!(Cell::from_symbol('s'), None);
        assert_eq!(Cell::from_symbol('X'), None);
    }

    #[test]
    fn test_food_has_no_symbol() {
        let mut c = Cell::plain();
        c.set_food();
        assert!(c.is_food());
        assert!(!c.is_plain());
        assert_eq!(c.symbol(), None);

        let mut g = Cell::grass();
        g.set_food();
        assert!(g.is_grass() && g.is_food());
        assert_eq!(g.bits(), 0x0c);
    }
}
