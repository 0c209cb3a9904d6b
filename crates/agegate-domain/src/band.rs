use agegate_types::ids::BAND_UNKNOWN;

/// Closed interval `[min, max]` of ages sharing a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgeBand {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
}

impl AgeBand {
    pub const fn new(min: u32, max: u32, label: &'static str) -> Self {
        Self { min, max, label }
    }
}

/// Upper bound of the last band; ages past any realistic human age stay in it.
pub const OPEN_ENDED: u32 = u32::MAX;

/// Ordered, non-overlapping, starting at 0.
pub const AGE_BANDS: &[AgeBand] = &[
    AgeBand::new(0, 4, "0-4"),
    AgeBand::new(5, 7, "5-7"),
    AgeBand::new(8, 12, "8-12"),
    AgeBand::new(13, 15, "13-15"),
    AgeBand::new(16, 17, "16-17"),
    AgeBand::new(18, OPEN_ENDED, "18+"),
];

pub fn band(age: u32) -> &'static str {
    band_in(AGE_BANDS, age)
}

/// First band containing `age`, or `"unknown"` when the table has a gap.
pub fn band_in(bands: &[AgeBand], age: u32) -> &'static str {
    bands
        .iter()
        .find(|b| b.min <= age && age <= b.max)
        .map(|b| b.label)
        .unwrap_or(BAND_UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_realistic_ages() {
        for age in 0..=130 {
            assert_ne!(band(age), BAND_UNKNOWN, "age {age} has no band");
        }
        assert_eq!(band(u32::MAX), "18+");
    }

    #[test]
    fn bands_do_not_overlap() {
        for age in 0..=130 {
            let hits = AGE_BANDS
                .iter()
                .filter(|b| b.min <= age && age <= b.max)
                .count();
            assert_eq!(hits, 1, "age {age} is in {hits} bands");
        }
        for pair in AGE_BANDS.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(band(0), "0-4");
        assert_eq!(band(4), "0-4");
        assert_eq!(band(5), "5-7");
        assert_eq!(band(8), "8-12");
        assert_eq!(band(12), "8-12");
        assert_eq!(band(13), "13-15");
        assert_eq!(band(17), "16-17");
        assert_eq!(band(18), "18+");
    }

    #[test]
    fn gap_in_table_yields_unknown() {
        let bands = [AgeBand::new(0, 4, "young"), AgeBand::new(10, 20, "older")];
        assert_eq!(band_in(&bands, 7), BAND_UNKNOWN);
        assert_eq!(band_in(&bands, 21), BAND_UNKNOWN);
        assert_eq!(band_in(&bands, 3), "young");
    }
}
