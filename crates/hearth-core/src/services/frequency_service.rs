//! Normalizes amounts across billing cadences onto monthly and annual
//! bases.

use hearth_domain::Frequency;

/// Average weeks per month: 52.14 weeks per year over 12 months. Chosen
/// over a naive 4 to avoid systematically under-counting across a year.
const WEEKS_PER_MONTH: f64 = 4.345;
const BIWEEKS_PER_MONTH: f64 = 2.17;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Stateless cadence conversion. Pure math, no rounding; callers format
/// for display only.
pub struct FrequencyService;

impl FrequencyService {
    /// Converts a per-cycle amount to its monthly equivalent.
    pub fn to_monthly(amount: f64, frequency: Frequency) -> f64 {
        match frequency {
            Frequency::Daily => amount * DAYS_PER_MONTH,
            Frequency::Weekly => amount * WEEKS_PER_MONTH,
            Frequency::Biweekly => amount * BIWEEKS_PER_MONTH,
            Frequency::Monthly => amount,
            Frequency::Quarterly => amount / 3.0,
            Frequency::Annually => amount / 12.0,
        }
    }

    /// Converts a per-cycle amount to its annual equivalent.
    pub fn to_annual(amount: f64, frequency: Frequency) -> f64 {
        match frequency {
            Frequency::Daily => amount * DAYS_PER_YEAR,
            Frequency::Weekly => amount * 52.0,
            Frequency::Biweekly => amount * 26.0,
            Frequency::Monthly => amount * 12.0,
            Frequency::Quarterly => amount * 4.0,
            Frequency::Annually => amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarterly_normalizes_to_a_third_per_month() {
        assert!((FrequencyService::to_monthly(100.0, Frequency::Quarterly) * 12.0 - 400.0).abs()
            < 1e-9);
        assert!((FrequencyService::to_annual(100.0, Frequency::Quarterly) - 400.0).abs() < 1e-9);
    }

    #[test]
    fn monthly_is_the_identity() {
        assert_eq!(FrequencyService::to_monthly(123.45, Frequency::Monthly), 123.45);
        assert_eq!(FrequencyService::to_annual(100.0, Frequency::Monthly), 1200.0);
    }

    #[test]
    fn unrecognized_labels_normalize_as_monthly() {
        let frequency = Frequency::parse("bogus");
        assert_eq!(FrequencyService::to_monthly(100.0, frequency), 100.0);
        assert_eq!(FrequencyService::to_annual(100.0, frequency), 1200.0);
    }

    #[test]
    fn monthly_times_twelve_tracks_annual_within_tolerance() {
        // Weekly and biweekly use averaged month factors, so the two
        // bases drift slightly; everything else matches exactly.
        for frequency in Frequency::ALL {
            let monthly = FrequencyService::to_monthly(100.0, frequency) * 12.0;
            let annual = FrequencyService::to_annual(100.0, frequency);
            let tolerance = match frequency {
                Frequency::Weekly | Frequency::Biweekly => annual * 0.01,
                Frequency::Daily => annual * 0.02,
                _ => 1e-9,
            };
            assert!(
                (monthly - annual).abs() <= tolerance,
                "{frequency}: {monthly} vs {annual}"
            );
        }
    }

    #[test]
    fn zero_amounts_stay_zero_for_every_cadence() {
        for frequency in Frequency::ALL {
            assert_eq!(FrequencyService::to_monthly(0.0, frequency), 0.0);
            assert_eq!(FrequencyService::to_annual(0.0, frequency), 0.0);
        }
    }
}
