//! Natural decay series and their reference diagrams.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecayChain {
    /// U-238 to Pb-206.
    Uranium,
    /// Th-232 to Pb-208.
    Thorium,
    /// U-235 to Pb-207.
    Actinium,
}

impl DecayChain {
    pub const ALL: [DecayChain; 3] = [Self::Uranium, Self::Thorium, Self::Actinium];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Uranium => "Série do Urânio (U-238)",
            Self::Thorium => "Série do Tório (Th-232)",
            Self::Actinium => "Série do Actínio (U-235)",
        }
    }

    pub fn image_file(&self) -> &'static str {
        match self {
            Self::Uranium => "uranium_chain.png",
            Self::Thorium => "thorium_chain.png",
            Self::Actinium => "actinium_chain.png",
        }
    }

    /// First existing copy of the diagram, searching `dirs` in order.
    pub fn resolve_image<P: AsRef<Path>>(&self, dirs: &[P]) -> Option<PathBuf> {
        dirs.iter()
            .map(|d| d.as_ref().join(self.image_file()))
            .find(|p| p.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_files_distinct() {
        for (i, a) in DecayChain::ALL.iter().enumerate() {
            for b in &DecayChain::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.image_file(), b.image_file());
            }
        }
    }

    #[test]
    fn resolve_prefers_first_dir() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(first.path().join("thorium_chain.png"), b"png").unwrap();
        std::fs::write(second.path().join("thorium_chain.png"), b"png").unwrap();

        let found = DecayChain::Thorium
            .resolve_image(&[first.path(), second.path()])
            .unwrap();
        assert_eq!(found, first.path().join("thorium_chain.png"));
    }

    #[test]
    fn resolve_falls_back_to_assets() {
        let cwd = tempfile::tempdir().unwrap();
        let assets = tempfile::tempdir().unwrap();
        std::fs::write(assets.path().join("uranium_chain.png"), b"png").unwrap();

        let found = DecayChain::Uranium
            .resolve_image(&[cwd.path(), assets.path()])
            .unwrap();
        assert_eq!(found, assets.path().join("uranium_chain.png"));
    }

    #[test]
    fn missing_image_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(DecayChain::Actinium.resolve_image(&[dir.path()]), None);
    }

    #[test]
    fn value_enum_names() {
        assert_eq!(
            DecayChain::from_str("actinium", true).unwrap(),
            DecayChain::Actinium
        );
    }
}
