//! The finished symbol matrix consumed by the renderers
//!
//! A [`Matrix`] is a square grid of [`ModuleType`] values. It is produced by
//! an encoder elsewhere; this crate only reads it.

pub mod error;
pub mod module;

use std::collections::HashSet;
use std::str::FromStr;

pub use error::MatrixError;
pub use module::{Category, ModuleType, IS_DARK};

/// A square grid of module types, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    modules: Vec<ModuleType>,
}

impl Matrix {
    /// Create a `size` x `size` matrix of light null modules
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![ModuleType::light(Category::Null); size * size],
        }
    }

    /// Build a matrix from rows, top to bottom
    pub fn from_rows(rows: Vec<Vec<ModuleType>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }

        let mut modules = Vec::with_capacity(size * size);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            modules.extend(cells);
        }

        Ok(Self { size, modules })
    }

    /// Number of modules along one side
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> ModuleType {
        self.modules[y * self.size + x]
    }

    pub fn set(&mut self, x: usize, y: usize, module: ModuleType) {
        self.modules[y * self.size + x] = module;
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[ModuleType]> {
        self.modules.chunks(self.size.max(1))
    }

    /// All modules as `(x, y, type)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, ModuleType)> + '_ {
        self.modules
            .iter()
            .enumerate()
            .map(|(i, &t)| (i % self.size, i / self.size, t))
    }

    /// Whether the module at `(x, y)` is dark
    pub fn check(&self, x: usize, y: usize) -> bool {
        self.get(x, y).dark
    }

    /// Whether the category of the module at `(x, y)` is in `categories`
    pub fn check_types(&self, x: usize, y: usize, categories: &HashSet<Category>) -> bool {
        categories.contains(&self.get(x, y).category)
    }
}

/// Parse a textual dump: one row per line, whitespace-separated integers
///
/// Values may be decimal or `0x`-prefixed hex. Blank lines are skipped.
impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                line.split_whitespace()
                    .map(|token| parse_module(token, n + 1))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

fn parse_module(token: &str, line: usize) -> Result<ModuleType, MatrixError> {
    let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => token.parse::<u16>(),
    };
    let bits = parsed.map_err(|_| MatrixError::InvalidToken {
        token: token.to_string(),
        line,
    })?;
    ModuleType::from_bits(bits)
}
