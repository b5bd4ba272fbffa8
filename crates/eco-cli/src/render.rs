//! Text rendering of river snapshots.

use eco_core::{Cell, Species};
use eco_world::Snapshot;

/// Symbols used to draw each kind of cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub predator: char,
    pub prey: char,
    pub empty: char,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            predator: 'B',
            prey: 'F',
            empty: '-',
        }
    }
}

impl Palette {
    pub fn symbol(&self, cell: &Cell) -> char {
        match cell.map(|entity| entity.species) {
            Some(Species::Predator) => self.predator,
            Some(Species::Prey) => self.prey,
            None => self.empty,
        }
    }

    /// Cell symbols separated by single spaces
    pub fn frame(&self, cells: &[Cell]) -> String {
        let symbols: Vec<String> = cells.iter().map(|c| self.symbol(c).to_string()).collect();
        symbols.join(" ")
    }
}

pub fn heading(snapshot: &Snapshot) -> String {
    if snapshot.tick == 0 {
        "Initial:".to_string()
    } else {
        format!("Step {}:", snapshot.tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_core::spawn;

    #[test]
    fn test_default_frame() {
        let cells = vec![
            Some(spawn(Species::Predator)),
            None,
            Some(spawn(Species::Prey)),
        ];
        assert_eq!(Palette::default().frame(&cells), "B - F");
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette {
            predator: 'X',
            prey: 'o',
            empty: '.',
        };
        let cells = vec![None, Some(spawn(Species::Prey)), Some(spawn(Species::Predator))];
        assert_eq!(palette.frame(&cells), ". o X");
        assert_eq!(palette.frame(&[]), "");
    }

    #[test]
    fn test_headings() {
        let initial = Snapshot { tick: 0, cells: Vec::new() };
        let later = Snapshot { tick: 3, cells: Vec::new() };
        assert_eq!(heading(&initial), "Initial:");
        assert_eq!(heading(&later), "Step 3:");
    }
}
