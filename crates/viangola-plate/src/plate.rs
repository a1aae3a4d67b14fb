//! Validated plate value.

use std::fmt;
use std::str::FromStr;

use crate::error::{PlateError, PlateResult};
use crate::format::{self, PlateForm};

/// A registration plate known to match one of the two forms.
///
/// Held in normalized form; [`fmt::Display`] renders the hyphenated form.
/// With the `serde` feature, serializes as the normalized string and
/// re-validates on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Plate(String);

impl Plate {
    /// Parse and validate a plate from user input.
    ///
    /// # Errors
    ///
    /// - [`PlateError::Empty`] if the input has no letters or digits
    /// - [`PlateError::Invalid`] if it matches neither form
    ///
    /// # Example
    ///
    /// ```
    /// use viangola_plate::{Plate, PlateError, PlateForm};
    ///
    /// let plate = Plate::parse("ld 35 87 ia").unwrap();
    /// assert_eq!(plate.form(), PlateForm::Short);
    ///
    /// assert_eq!(Plate::parse("--"), Err(PlateError::Empty));
    /// assert_eq!(Plate::parse("ld-35"), Err(PlateError::Invalid("LD35".into())));
    /// ```
    pub fn parse(input: &str) -> PlateResult<Self> {
        let clean = format::normalize(input);
        if clean.is_empty() {
            return Err(PlateError::Empty);
        }
        match PlateForm::of_normalized(&clean) {
            Some(_) => Ok(Plate(clean)),
            None => Err(PlateError::Invalid(clean)),
        }
    }

    /// The normalized plate, e.g. `LD3587IA`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hyphenated plate, e.g. `LD-35-87-IA`.
    pub fn formatted(&self) -> String {
        format::format(&self.0)
    }

    /// Which of the two forms this plate has.
    pub fn form(&self) -> PlateForm {
        if self.0.starts_with(format::LONG_PREFIX) {
            PlateForm::Long
        } else {
            PlateForm::Short
        }
    }

    /// Consume into the normalized string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Plate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plate::parse(s)
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Plate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Plate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Plate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let plate = Plate::parse("ld-35-87-ia").unwrap();
        assert_eq!(plate.as_str(), "LD3587IA");
        assert_eq!(plate.formatted(), "LD-35-87-IA");
        assert_eq!(plate.to_string(), "LD-35-87-IA");
        assert_eq!(plate.form(), PlateForm::Short);
    }

    #[test]
    fn test_parse_long_form() {
        let plate: Plate = "LDA-35-87-IA".parse().unwrap();
        assert_eq!(plate.as_str(), "LDA3587IA");
        assert_eq!(plate.form(), PlateForm::Long);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Plate::parse(""), Err(PlateError::Empty));
        assert_eq!(Plate::parse("  - "), Err(PlateError::Empty));

        let err = Plate::parse("LD-3A-87-IA").unwrap_err();
        assert_eq!(err, PlateError::Invalid("LD3A87IA".to_string()));
        assert_eq!(err.error_code(), "PLATE_INVALID");
        assert_eq!(
            err.to_string(),
            "Invalid plate 'LD3A87IA': expected LD-00-00-AA or LDA-00-00-AA"
        );
    }

    #[test]
    fn test_equal_regardless_of_input_formatting() {
        assert_eq!(Plate::parse("LD3587IA").unwrap(), Plate::parse("ld-35-87-ia").unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_normalized_and_validated() {
        let plate = Plate::parse("LD-35-87-IA").unwrap();
        assert_eq!(serde_json::to_string(&plate).unwrap(), r#""LD3587IA""#);

        let back: Plate = serde_json::from_str(r#""LD-35-87-IA""#).unwrap();
        assert_eq!(back, plate);

        assert!(serde_json::from_str::<Plate>(r#""LD-35""#).is_err());
    }
}
