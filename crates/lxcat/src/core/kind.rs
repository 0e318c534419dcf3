// crate modules
use crate::core::approx_eq;
use crate::error::Error;

// standard library
use std::fmt;
use std::str::FromStr;

// external crates
use serde::{Deserialize, Serialize};

/// Collision type keyword heading every LXCat cross section record
///
/// The keywords are case sensitive in the files and always appear alone on
/// the first line of a record.
///
/// | Variant      | Keyword      | Parameter line             |
/// | ------------ | ------------ | -------------------------- |
/// | `Elastic`    | `ELASTIC`    | electron/target mass ratio |
/// | `Effective`  | `EFFECTIVE`  | electron/target mass ratio |
/// | `Excitation` | `EXCITATION` | threshold energy (eV)      |
/// | `Attachment` | `ATTACHMENT` | none                       |
/// | `Ionization` | `IONIZATION` | threshold energy (eV)      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossSectionKind {
    /// Elastic momentum transfer
    Elastic,
    /// Effective (total) momentum transfer
    Effective,
    /// Electronic, vibrational or rotational excitation
    Excitation,
    /// Electron attachment
    Attachment,
    /// Electron impact ionization
    Ionization,
}

impl CrossSectionKind {
    /// Every kind, in the order the keywords are documented by LXCat
    pub const ALL: [CrossSectionKind; 5] = [
        Self::Elastic,
        Self::Effective,
        Self::Excitation,
        Self::Attachment,
        Self::Ionization,
    ];

    /// Keyword used in the file format
    ///
    /// ```rust
    /// # use lxtools_lxcat::CrossSectionKind;
    /// assert_eq!(CrossSectionKind::Ionization.keyword(), "IONIZATION");
    /// ```
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Elastic => "ELASTIC",
            Self::Effective => "EFFECTIVE",
            Self::Excitation => "EXCITATION",
            Self::Attachment => "ATTACHMENT",
            Self::Ionization => "IONIZATION",
        }
    }

    /// Whether the record carries a parameter line after the species
    pub fn has_parameter(&self) -> bool {
        !matches!(self, Self::Attachment)
    }
}

impl fmt::Display for CrossSectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for CrossSectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

/// Collision process with the parameter that belongs to its kind
///
/// The meaning of the scalar on the parameter line depends entirely on the
/// collision type, so each variant carries exactly the field that applies.
///
/// ```rust
/// # use lxtools_lxcat::{CrossSectionKind, Process};
/// let process = Process::with_parameter(CrossSectionKind::Excitation, 11.5);
///
/// assert_eq!(process.threshold(), Some(11.5));
/// assert_eq!(process.mass_ratio(), None);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Process {
    /// Elastic momentum transfer with the electron/target mass ratio
    Elastic { mass_ratio: f64 },
    /// Effective momentum transfer with the electron/target mass ratio
    Effective { mass_ratio: f64 },
    /// Excitation with its threshold energy (eV)
    Excitation { threshold: f64 },
    /// Ionization with its threshold energy (eV)
    Ionization { threshold: f64 },
    /// Attachment, which has no parameter
    Attachment,
}

impl Process {
    /// Build the process for `kind` from the value on its parameter line
    ///
    /// The value is dropped for [CrossSectionKind::Attachment].
    pub fn with_parameter(kind: CrossSectionKind, parameter: f64) -> Self {
        match kind {
            CrossSectionKind::Elastic => Self::Elastic {
                mass_ratio: parameter,
            },
            CrossSectionKind::Effective => Self::Effective {
                mass_ratio: parameter,
            },
            CrossSectionKind::Excitation => Self::Excitation {
                threshold: parameter,
            },
            CrossSectionKind::Ionization => Self::Ionization {
                threshold: parameter,
            },
            CrossSectionKind::Attachment => Self::Attachment,
        }
    }

    /// Collision type of the process
    pub fn kind(&self) -> CrossSectionKind {
        match self {
            Self::Elastic { .. } => CrossSectionKind::Elastic,
            Self::Effective { .. } => CrossSectionKind::Effective,
            Self::Excitation { .. } => CrossSectionKind::Excitation,
            Self::Ionization { .. } => CrossSectionKind::Ionization,
            Self::Attachment => CrossSectionKind::Attachment,
        }
    }

    /// Electron/target mass ratio for elastic and effective processes
    pub fn mass_ratio(&self) -> Option<f64> {
        match self {
            Self::Elastic { mass_ratio } | Self::Effective { mass_ratio } => Some(*mass_ratio),
            _ => None,
        }
    }

    /// Threshold energy (eV) for excitation and ionization processes
    pub fn threshold(&self) -> Option<f64> {
        match self {
            Self::Excitation { threshold } | Self::Ionization { threshold } => Some(*threshold),
            _ => None,
        }
    }

    /// Whichever value is written on the parameter line, if any
    pub fn parameter(&self) -> Option<f64> {
        self.mass_ratio().or(self.threshold())
    }
}

impl PartialEq for Process {
    fn eq(&self, other: &Self) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        match (self.parameter(), other.parameter()) {
            (Some(a), Some(b)) => approx_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trip() {
        for kind in CrossSectionKind::ALL {
            assert_eq!(kind.keyword().parse::<CrossSectionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert!("elastic".parse::<CrossSectionKind>().is_err());
        assert!("Ionization".parse::<CrossSectionKind>().is_err());
        assert!("ELASTICITY".parse::<CrossSectionKind>().is_err());
    }

    #[test]
    fn parameter_follows_kind() {
        let elastic = Process::with_parameter(CrossSectionKind::Elastic, 1.9e-5);
        assert_eq!(elastic.mass_ratio(), Some(1.9e-5));
        assert_eq!(elastic.threshold(), None);

        let effective = Process::with_parameter(CrossSectionKind::Effective, 1.9e-5);
        assert_eq!(effective.mass_ratio(), Some(1.9e-5));
        assert_eq!(effective.threshold(), None);

        let ionization = Process::with_parameter(CrossSectionKind::Ionization, 15.6);
        assert_eq!(ionization.mass_ratio(), None);
        assert_eq!(ionization.threshold(), Some(15.6));

        let attachment = Process::with_parameter(CrossSectionKind::Attachment, 3.0);
        assert_eq!(attachment, Process::Attachment);
        assert_eq!(attachment.parameter(), None);
    }

    #[test]
    fn equality_needs_same_kind() {
        let elastic = Process::Elastic { mass_ratio: 1.0 };
        let effective = Process::Effective { mass_ratio: 1.0 };
        assert_ne!(elastic, effective);
        assert_eq!(elastic, Process::Elastic { mass_ratio: 1.0 });
    }
}
