//! Module types: a structural category paired with a dark/light flag

use std::fmt;
use std::str::FromStr;

use super::MatrixError;

/// Bit that marks a module as dark in the integer projection
pub const IS_DARK: u16 = 0x800;

/// Structural category of a matrix module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Null,
    DarkModule,
    Data,
    Finder,
    Separator,
    Alignment,
    Timing,
    Format,
    Version,
    QuietZone,
    Logo,
    FinderDot,
}

impl Category {
    /// Every category, in ascending bit order
    pub const ALL: [Category; 12] = [
        Category::Null,
        Category::DarkModule,
        Category::Data,
        Category::Finder,
        Category::Separator,
        Category::Alignment,
        Category::Timing,
        Category::Format,
        Category::Version,
        Category::QuietZone,
        Category::Logo,
        Category::FinderDot,
    ];

    pub const fn bits(self) -> u16 {
        match self {
            Category::Null => 0x000,
            Category::DarkModule => 0x001,
            Category::Data => 0x002,
            Category::Finder => 0x004,
            Category::Separator => 0x008,
            Category::Alignment => 0x010,
            Category::Timing => 0x020,
            Category::Format => 0x040,
            Category::Version => 0x080,
            Category::QuietZone => 0x100,
            Category::Logo => 0x200,
            Category::FinderDot => 0x400,
        }
    }

    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.bits() == bits)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Null => "null",
            Category::DarkModule => "darkmodule",
            Category::Data => "data",
            Category::Finder => "finder",
            Category::Separator => "separator",
            Category::Alignment => "alignment",
            Category::Timing => "timing",
            Category::Format => "format",
            Category::Version => "version",
            Category::QuietZone => "quietzone",
            Category::Logo => "logo",
            Category::FinderDot => "finder-dot",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| MatrixError::UnknownCategory(s.to_string()))
    }
}

/// The type of a single module: a category and whether it is dark
///
/// Ordering follows the integer projection returned by [`ModuleType::bits`],
/// so sorted collections of module types are stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleType {
    pub category: Category,
    pub dark: bool,
}

impl ModuleType {
    pub const fn new(category: Category, dark: bool) -> Self {
        Self { category, dark }
    }

    pub const fn light(category: Category) -> Self {
        Self::new(category, false)
    }

    pub const fn dark(category: Category) -> Self {
        Self::new(category, true)
    }

    /// Integer projection: category bits OR-ed with [`IS_DARK`]
    pub const fn bits(self) -> u16 {
        if self.dark {
            self.category.bits() | IS_DARK
        } else {
            self.category.bits()
        }
    }

    pub fn from_bits(bits: u16) -> Result<Self, MatrixError> {
        Category::from_bits(bits & !IS_DARK)
            .map(|category| Self::new(category, bits & IS_DARK == IS_DARK))
            .ok_or(MatrixError::InvalidModuleValue(bits))
    }

    /// Every module type: each category in its light and dark variant
    pub fn all() -> impl Iterator<Item = ModuleType> {
        Category::ALL
            .into_iter()
            .flat_map(|c| [ModuleType::light(c), ModuleType::dark(c)])
    }
}

impl PartialOrd for ModuleType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModuleType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bits().cmp(&other.bits())
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dark {
            write!(f, "{}-dark", self.category)
        } else {
            write!(f, "{}", self.category)
        }
    }
}

impl FromStr for ModuleType {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_suffix("-dark").or_else(|| s.strip_suffix("_dark")) {
            Some(category) => Ok(ModuleType::dark(category.parse()?)),
            None => Ok(ModuleType::light(s.parse()?)),
        }
    }
}
