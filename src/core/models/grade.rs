//! Letter grades and grading scales

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade from the fixed, ordered enumeration used on transcripts.
///
/// The enumeration is closed; external data with labels outside it is
/// handled at the parsing boundary (see [`GradingScale::points_for_label`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// A
    A,
    /// A-
    AMinus,
    /// B+
    BPlus,
    /// B
    B,
    /// B-
    BMinus,
    /// C+
    CPlus,
    /// C
    C,
    /// C-
    CMinus,
    /// D+
    DPlus,
    /// D
    D,
    /// F
    F,
}

impl Grade {
    /// All grades in transcript order, best to worst.
    pub const ALL: [Self; 11] = [
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::F,
    ];

    /// The transcript label for this grade (e.g., "A-").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Parse a grade label (case-insensitive, surrounding whitespace ignored).
    ///
    /// Returns `None` for labels outside the enumeration.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "A-" => Some(Self::AMinus),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "B-" => Some(Self::BMinus),
            "C+" => Some(Self::CPlus),
            "C" => Some(Self::C),
            "C-" => Some(Self::CMinus),
            "D+" => Some(Self::DPlus),
            "D" => Some(Self::D),
            "F" => Some(Self::F),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown grade: '{s}'"))
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Grade {
    /// Deserializes leniently: labels outside the enumeration become `F`,
    /// which carries zero grade points under every scale. Stored data from
    /// partially migrated sources must not fail the whole load.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label).unwrap_or_else(|| {
            logger::warn!("Unknown grade label '{label}' treated as F (0 points)");
            Self::F
        }))
    }
}

/// A named grading scale fixing the grade→point mapping and the maximum
/// achievable average.
///
/// The scale is selected once per session via configuration; every point
/// lookup and progress computation in one run uses the same scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingScale {
    /// 5.0-point system (A = 5.0)
    #[default]
    #[serde(rename = "5.0")]
    FivePoint,
    /// 4.0-point system (A = 4.0)
    #[serde(rename = "4.0")]
    FourPoint,
}

impl GradingScale {
    /// Point value for a grade under this scale. Total over [`Grade::ALL`].
    #[must_use]
    pub const fn points(self, grade: Grade) -> f64 {
        match self {
            Self::FivePoint => match grade {
                Grade::A => 5.0,
                Grade::AMinus => 4.7,
                Grade::BPlus => 4.3,
                Grade::B => 4.0,
                Grade::BMinus => 3.7,
                Grade::CPlus => 3.3,
                Grade::C => 3.0,
                Grade::CMinus => 2.7,
                Grade::DPlus => 2.3,
                Grade::D => 2.0,
                Grade::F => 0.0,
            },
            Self::FourPoint => match grade {
                Grade::A => 4.0,
                Grade::AMinus => 3.7,
                Grade::BPlus => 3.3,
                Grade::B => 3.0,
                Grade::BMinus => 2.7,
                Grade::CPlus => 2.3,
                Grade::C => 2.0,
                Grade::CMinus => 1.7,
                Grade::DPlus => 1.3,
                Grade::D => 1.0,
                Grade::F => 0.0,
            },
        }
    }

    /// Point value for a raw grade label.
    ///
    /// Labels outside the enumeration carry zero points rather than
    /// failing; partially migrated external data flows through here.
    #[must_use]
    pub fn points_for_label(self, label: &str) -> f64 {
        Grade::parse(label).map_or(0.0, |grade| self.points(grade))
    }

    /// Maximum achievable CGPA under this scale.
    #[must_use]
    pub const fn max_cgpa(self) -> f64 {
        match self {
            Self::FivePoint => 5.0,
            Self::FourPoint => 4.0,
        }
    }
}

impl fmt::Display for GradingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FivePoint => write!(f, "5.0"),
            Self::FourPoint => write!(f, "4.0"),
        }
    }
}

impl FromStr for GradingScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5.0" | "5" => Ok(Self::FivePoint),
            "4.0" | "4" => Ok(Self::FourPoint),
            _ => Err(format!("Unknown grading scale: '{s}' (expected 5.0 or 4.0)")),
        }
    }
}
