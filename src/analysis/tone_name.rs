use super::classifier::{Depth, Undertone};

pub type ToneNameEntry = (Depth, Undertone, &'static str);

pub const TONE_NAMES: &[ToneNameEntry] = &[
    (Depth::Light, Undertone::Warm, "Porcelain Warm"),
    (Depth::LightMedium, Undertone::Warm, "Fair Warm"),
    (Depth::Medium, Undertone::Warm, "Golden Beige"),
    (Depth::MediumDeep, Undertone::Warm, "Warm Bronze"),
    (Depth::Deep, Undertone::Warm, "Deep Mahogany"),
    (Depth::Light, Undertone::Cool, "Porcelain Cool"),
    (Depth::LightMedium, Undertone::Cool, "Fair Cool"),
    (Depth::Medium, Undertone::Cool, "Cool Beige"),
    (Depth::MediumDeep, Undertone::Cool, "Cool Tan"),
    (Depth::Deep, Undertone::Cool, "Deep Ebony"),
    (Depth::Light, Undertone::Neutral, "Porcelain"),
    (Depth::LightMedium, Undertone::Neutral, "Fair Neutral"),
    (Depth::Medium, Undertone::Neutral, "Natural Beige"),
    (Depth::MediumDeep, Undertone::Neutral, "Neutral Tan"),
    (Depth::Deep, Undertone::Neutral, "Rich Espresso"),
];

/// Turns a (depth, undertone) pair into a display label.
#[derive(Clone, Copy, Debug)]
pub struct ToneNamer {
    table: &'static [ToneNameEntry],
}

impl Default for ToneNamer {
    fn default() -> Self {
        ToneNamer { table: TONE_NAMES }
    }
}

impl ToneNamer {
    pub fn with_table(table: &'static [ToneNameEntry]) -> Self {
        ToneNamer { table }
    }

    /// Pairs missing from the table are named `"<depth> <undertone>"`.
    pub fn name(&self, depth: Depth, undertone: Undertone) -> String {
        self.table
            .iter()
            .find(|(d, u, _)| *d == depth && *u == undertone)
            .map(|(_, _, name)| name.to_string())
            .unwrap_or_else(|| format!("{} {}", depth, undertone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_every_pair_from_the_table() {
        let namer = ToneNamer::default();
        for depth in Depth::ALL {
            for undertone in Undertone::ALL {
                let name = namer.name(depth, undertone);
                assert_ne!(name, format!("{} {}", depth, undertone));
            }
        }
        assert_eq!(TONE_NAMES.len(), 15);
    }

    #[test]
    fn names_known_pairs() {
        let namer = ToneNamer::default();
        assert_eq!(namer.name(Depth::Deep, Undertone::Warm), "Deep Mahogany");
        assert_eq!(namer.name(Depth::Medium, Undertone::Warm), "Golden Beige");
        assert_eq!(namer.name(Depth::MediumDeep, Undertone::Cool), "Cool Tan");
        assert_eq!(namer.name(Depth::Light, Undertone::Neutral), "Porcelain");
    }

    #[test]
    fn falls_back_to_literal_composition() {
        const PARTIAL: &[ToneNameEntry] = &[(Depth::Deep, Undertone::Warm, "Deep Mahogany")];
        let namer = ToneNamer::with_table(PARTIAL);
        assert_eq!(namer.name(Depth::Deep, Undertone::Warm), "Deep Mahogany");
        assert_eq!(namer.name(Depth::MediumDeep, Undertone::Warm), "medium-deep warm");
        assert_eq!(namer.name(Depth::LightMedium, Undertone::Cool), "light-medium cool");

        let empty = ToneNamer::with_table(&[]);
        assert_eq!(empty.name(Depth::Light, Undertone::Neutral), "light neutral");
    }
}
