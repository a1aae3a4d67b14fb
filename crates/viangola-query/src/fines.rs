//! Pending-fine lookup used during roadside checks.

use viangola_plate::Plate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::filter::Filter;

/// Status value of unpaid fines.
pub const PENDING: &str = "pending";

/// Lookup of pending fines by vehicle plate, driving license, or both.
///
/// With both, a fine matching either one is returned.
///
/// # Example
///
/// ```
/// use viangola_query::PendingFineFilter;
///
/// let lookup = PendingFineFilter::new(Some("ld-35-87-ia"), Some(" LA-12345 ")).unwrap();
/// let rendered: Vec<String> = lookup.filters().iter().map(|f| f.to_string()).collect();
/// assert_eq!(
///     rendered,
///     vec![
///         "status=eq.pending",
///         "or=(vehicle_plate.eq.LD3587IA,driver_license.eq.LA-12345)",
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendingFineFilter {
    plate: Option<Plate>,
    license: Option<String>,
}

impl PendingFineFilter {
    /// Build a lookup from raw form input.
    ///
    /// Blank values count as absent. The plate is validated and
    /// normalized; the license number is trimmed.
    ///
    /// # Errors
    ///
    /// - [`QueryError::MissingCriteria`] when both values are blank
    /// - [`QueryError::InvalidPlate`] when the plate does not validate
    pub fn new(plate: Option<&str>, license: Option<&str>) -> QueryResult<Self> {
        let plate = plate.map(str::trim).filter(|p| !p.is_empty());
        let license = license.map(str::trim).filter(|l| !l.is_empty());

        if plate.is_none() && license.is_none() {
            tracing::debug!("Pending fine lookup without plate or license");
            return Err(QueryError::MissingCriteria);
        }

        let plate = plate
            .map(Plate::parse)
            .transpose()
            .inspect_err(|e| tracing::debug!(error = %e, "Pending fine lookup with invalid plate"))?;

        Ok(Self {
            plate,
            license: license.map(str::to_string),
        })
    }

    /// Normalized plate, if the lookup includes one.
    pub fn plate(&self) -> Option<&Plate> {
        self.plate.as_ref()
    }

    /// Trimmed license number, if the lookup includes one.
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    /// Row filters for the `fines` table, all of which must hold.
    pub fn filters(&self) -> Vec<Filter> {
        let by_plate = self
            .plate
            .as_ref()
            .map(|p| Filter::eq("vehicle_plate", p.as_str()));
        let by_license = self
            .license
            .as_ref()
            .map(|l| Filter::eq("driver_license", l.as_str()));

        let mut filters = vec![Filter::eq("status", PENDING)];
        match (by_plate, by_license) {
            (Some(p), Some(l)) => filters.push(Filter::Or(vec![p, l])),
            (Some(f), None) | (None, Some(f)) => filters.push(f),
            (None, None) => {}
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viangola_plate::PlateError;

    fn rendered(lookup: &PendingFineFilter) -> Vec<String> {
        lookup.filters().iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_plate_only() {
        let lookup = PendingFineFilter::new(Some("LDA-35-87-IA"), None).unwrap();
        assert_eq!(
            rendered(&lookup),
            vec!["status=eq.pending", "vehicle_plate=eq.LDA3587IA"]
        );
        assert!(lookup.license().is_none());
    }

    #[test]
    fn test_license_only() {
        let lookup = PendingFineFilter::new(Some("   "), Some("LA-12345")).unwrap();
        assert_eq!(
            rendered(&lookup),
            vec!["status=eq.pending", "driver_license=eq.LA-12345"]
        );
        assert!(lookup.plate().is_none());
    }

    #[test]
    fn test_missing_criteria() {
        assert_eq!(PendingFineFilter::new(None, None), Err(QueryError::MissingCriteria));
        assert_eq!(
            PendingFineFilter::new(Some(""), Some("  ")),
            Err(QueryError::MissingCriteria)
        );
    }

    #[test]
    fn test_invalid_plate() {
        let err = PendingFineFilter::new(Some("LD-35"), Some("LA-12345")).unwrap_err();
        assert_eq!(err, QueryError::InvalidPlate(PlateError::Invalid("LD35".into())));
        assert_eq!(err.error_code(), "PLATE_INVALID");
        assert_eq!(err.status_code(), 400);

        let err = PendingFineFilter::new(Some("--"), None).unwrap_err();
        assert_eq!(err, QueryError::InvalidPlate(PlateError::Empty));
    }
}
