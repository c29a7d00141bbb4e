//! Age reserve table: a step function from inventory age to write-down percentage.

use serde::{Deserialize, Serialize};

use stockworth_core::{DomainError, DomainResult};

/// One step of the reserve table, covering ages in `[min_months, max_months)`.
///
/// `max_months = None` means the band is unbounded above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeReserveBand {
    pub min_months: f64,
    pub max_months: Option<f64>,
    pub reserve_percent: f64,
    #[serde(default)]
    pub label: String,
}

impl AgeReserveBand {
    pub fn new(
        min_months: f64,
        max_months: Option<f64>,
        reserve_percent: f64,
        label: impl Into<String>,
    ) -> Self {
        Self {
            min_months,
            max_months,
            reserve_percent,
            label: label.into(),
        }
    }

    /// Whether `age_months` falls inside this band (half-open).
    pub fn contains(&self, age_months: f64) -> bool {
        age_months >= self.min_months && self.max_months.is_none_or(|max| age_months < max)
    }
}

/// Ordered reserve bands. Lookup is a linear scan and the first match wins.
///
/// No shape checks happen on lookup; a malformed table just yields a 0%
/// reserve for ages no band covers. Use [`AgeReserveTable::validate`] when the
/// table comes from user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeReserveTable(Vec<AgeReserveBand>);

impl AgeReserveTable {
    pub fn new(bands: Vec<AgeReserveBand>) -> Self {
        Self(bands)
    }

    pub fn bands(&self) -> &[AgeReserveBand] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First band containing `age_months`, if any.
    pub fn band_for(&self, age_months: f64) -> Option<&AgeReserveBand> {
        self.0.iter().find(|band| band.contains(age_months))
    }

    /// Reserve percentage for `age_months`; 0 when no band matches.
    pub fn reserve_for(&self, age_months: f64) -> f64 {
        self.band_for(age_months)
            .map(|band| band.reserve_percent)
            .unwrap_or(0.0)
    }

    /// Check that the table is a proper step function.
    ///
    /// Bands must be non-empty, ascending and contiguous (each band starts
    /// where the previous one ends), with only the last band unbounded and
    /// every reserve within `0..=100`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.0.is_empty() {
            return Err(DomainError::invariant("reserve table has no bands"));
        }

        let last = self.0.len() - 1;
        for (i, band) in self.0.iter().enumerate() {
            let name = band_name(i, band);

            if !band.min_months.is_finite() || band.min_months < 0.0 {
                return Err(DomainError::invariant(format!(
                    "{name}: minimum age must be a non-negative number"
                )));
            }
            if !(band.reserve_percent.is_finite() && (0.0..=100.0).contains(&band.reserve_percent)) {
                return Err(DomainError::invariant(format!(
                    "{name}: reserve percent must be between 0 and 100"
                )));
            }
            match band.max_months {
                Some(max) if !(max.is_finite() && max > band.min_months) => {
                    return Err(DomainError::invariant(format!(
                        "{name}: maximum age must be greater than minimum age"
                    )));
                }
                None if i != last => {
                    return Err(DomainError::invariant(format!(
                        "{name}: only the last band may be unbounded"
                    )));
                }
                _ => {}
            }

            if i > 0 {
                // An earlier unbounded band was already rejected above.
                let prev_max = self.0[i - 1].max_months.unwrap_or(f64::INFINITY);
                if band.min_months < prev_max {
                    return Err(DomainError::invariant(format!(
                        "{name}: overlaps or precedes the previous band"
                    )));
                }
                if band.min_months > prev_max {
                    return Err(DomainError::invariant(format!(
                        "{name}: leaves a gap after the previous band"
                    )));
                }
            }
        }

        Ok(())
    }
}

fn band_name(index: usize, band: &AgeReserveBand) -> String {
    if band.label.is_empty() {
        format!("band #{}", index + 1)
    } else {
        format!("band #{} ({})", index + 1, band.label)
    }
}

impl Default for AgeReserveTable {
    /// `<3` months 0%, `3-6` 10%, `6-12` 25%, `>12` 50%.
    fn default() -> Self {
        Self(vec![
            AgeReserveBand::new(0.0, Some(3.0), 0.0, "< 3 months"),
            AgeReserveBand::new(3.0, Some(6.0), 10.0, "3-6 months"),
            AgeReserveBand::new(6.0, Some(12.0), 25.0, "6-12 months"),
            AgeReserveBand::new(12.0, None, 50.0, "> 12 months"),
        ])
    }
}

impl From<Vec<AgeReserveBand>> for AgeReserveTable {
    fn from(bands: Vec<AgeReserveBand>) -> Self {
        Self(bands)
    }
}
