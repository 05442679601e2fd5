//! Selection between the serial and rayon-backed generation steps.

use super::{GridState, life};

/// Boards at least this large are stepped in parallel under [`Evolution::Auto`]
pub const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// How a generation is computed. Both strategies produce identical boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Evolution {
    /// Row by row on the calling thread
    Serial,
    /// Rows spread over the rayon thread pool
    Parallel,
    /// Parallel for large boards, serial otherwise
    #[default]
    Auto,
}

impl Evolution {
    pub fn all() -> Vec<Evolution> {
        vec![Evolution::Serial, Evolution::Parallel, Evolution::Auto]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Evolution::Serial => "Serial",
            Evolution::Parallel => "Parallel",
            Evolution::Auto => "Auto",
        }
    }

    /// Concrete strategy for a board with `cells` cells
    pub fn resolve(self, cells: usize) -> Evolution {
        match self {
            Evolution::Auto if cells >= PARALLEL_THRESHOLD => Evolution::Parallel,
            Evolution::Auto => Evolution::Serial,
            other => other,
        }
    }

    /// Advance `grid` one generation with this strategy
    pub fn advance(self, grid: &mut GridState) {
        let (w, h) = grid.dimensions();
        match self.resolve(w * h) {
            Evolution::Parallel => life::advance_parallel(grid),
            _ => life::advance(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Evolution::default(), Evolution::Auto);
    }

    #[test]
    fn test_auto_resolves_by_size() {
        assert_eq!(Evolution::Auto.resolve(100), Evolution::Serial);
        assert_eq!(Evolution::Auto.resolve(PARALLEL_THRESHOLD), Evolution::Parallel);
        assert_eq!(Evolution::Serial.resolve(usize::MAX), Evolution::Serial);
        assert_eq!(Evolution::Parallel.resolve(1), Evolution::Parallel);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Evolution::all().iter().map(|e| e.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
