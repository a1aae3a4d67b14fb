//! # Plate formatting
//!
//! Normalization, keystroke-by-keystroke masking, and validation of
//! Angolan registration plates.
//!
//! Two shapes are accepted:
//!
//! ```text
//! Short:  LD-DD-DD-LL    8 characters unformatted
//! Long:   LDA-DD-DD-LL   9 characters unformatted
//! ```

use std::sync::LazyLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Prefix every plate starts with.
pub const PREFIX: &str = "LD";

/// Prefix of the long form.
pub const LONG_PREFIX: &str = "LDA";

static SHORT_PLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^LD[0-9]{2}[0-9]{2}[A-Z]{2}$").expect("Invalid regex pattern for short plate")
});

static LONG_PLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^LDA[0-9]{2}[0-9]{2}[A-Z]{2}$").expect("Invalid regex pattern for long plate")
});

/// The two plate shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlateForm {
    /// `LD-DD-DD-LL`
    Short,
    /// `LDA-DD-DD-LL`
    Long,
}

impl PlateForm {
    /// Detect the form of a plate, or `None` if it matches neither.
    ///
    /// # Example
    ///
    /// ```
    /// use viangola_plate::PlateForm;
    ///
    /// assert_eq!(PlateForm::of("ld-35-87-ia"), Some(PlateForm::Short));
    /// assert_eq!(PlateForm::of("LDA-35-87-IA"), Some(PlateForm::Long));
    /// assert_eq!(PlateForm::of("LD-35-87"), None);
    /// ```
    pub fn of(input: &str) -> Option<Self> {
        Self::of_normalized(&normalize(input))
    }

    pub(crate) fn of_normalized(clean: &str) -> Option<Self> {
        if clean.len() == 8
            && clean.starts_with(PREFIX)
            && !clean.starts_with(LONG_PREFIX)
            && SHORT_PLATE.is_match(clean)
        {
            return Some(PlateForm::Short);
        }
        if clean.len() == 9 && clean.starts_with(LONG_PREFIX) && LONG_PLATE.is_match(clean) {
            return Some(PlateForm::Long);
        }
        None
    }

    /// Unformatted length of a complete plate.
    pub fn char_count(&self) -> usize {
        match self {
            PlateForm::Short => 8,
            PlateForm::Long => 9,
        }
    }

    /// Indices in the unformatted string where a hyphen precedes the character.
    fn boundaries(&self) -> &'static [usize] {
        match self {
            PlateForm::Short => &[2, 4, 6],
            PlateForm::Long => &[3, 5, 7],
        }
    }

    /// Insert hyphens at this form's boundaries.
    ///
    /// A hyphen is only written when a character follows it, and input past
    /// the form's length is dropped.
    fn mask(&self, clean: &str) -> String {
        let boundaries = self.boundaries();
        let mut out = String::with_capacity(self.char_count() + boundaries.len());
        for (i, c) in clean.chars().take(self.char_count()).enumerate() {
            if boundaries.contains(&i) {
                out.push('-');
            }
            out.push(c);
        }
        out
    }
}

/// Strip everything but ASCII letters and digits, and uppercase the rest.
///
/// # Example
///
/// ```
/// use viangola_plate::normalize;
///
/// assert_eq!(normalize("ld-35-87-ia"), "LD3587IA");
/// assert_eq!(normalize(" lda 35.87/ia "), "LDA3587IA");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Format raw or partial input into a hyphenated plate.
///
/// Safe to call on every keystroke: successive prefixes of a plate produce
/// successively longer masks, with hyphens only at fixed positions.
/// Input that does not start with `LD` gets the prefix prepended, unless
/// it is itself still a prefix of `LD` (`"L"` stays `"L"`).
///
/// # Example
///
/// ```
/// use viangola_plate::format;
///
/// assert_eq!(format("LD3587IA"), "LD-35-87-IA");
/// assert_eq!(format("LDA3587IA"), "LDA-35-87-IA");
/// assert_eq!(format("LD35"), "LD-35");
/// assert_eq!(format("3587IA"), "LD-35-87-IA");
/// assert_eq!(format("L"), "L");
/// ```
pub fn format(input: &str) -> String {
    let clean = normalize(input);

    // Complete plates are grouped as-is.
    if clean.starts_with(PREFIX) {
        if clean.len() == 8 && !clean.starts_with(LONG_PREFIX) {
            return PlateForm::Short.mask(&clean);
        }
        if clean.len() == 9 && clean.starts_with(LONG_PREFIX) {
            return PlateForm::Long.mask(&clean);
        }
    }

    let mut buf = clean;
    if !buf.starts_with(PREFIX) && !PREFIX.starts_with(buf.as_str()) {
        buf.insert_str(0, PREFIX);
    }

    let form = if buf.starts_with(LONG_PREFIX) {
        PlateForm::Long
    } else {
        PlateForm::Short
    };
    form.mask(&buf)
}

/// Check whether input is a complete, well-formed plate in either form.
///
/// # Example
///
/// ```
/// use viangola_plate::validate;
///
/// assert!(validate("LD-35-87-IA"));
/// assert!(validate("LDA-35-87-IA"));
/// assert!(!validate("LD-35-87-I"));
/// assert!(!validate("LD-3A-87-IA"));
/// ```
pub fn validate(input: &str) -> bool {
    PlateForm::of(input).is_some()
}
