//! Hardware platform labels for documentation pages.
//!
//! A label designates the accelerator family a page's content applies
//! to. The derived `Ord` matches lexicographic order on the label text,
//! so sorted collections iterate in rendered order.

use serde::{Deserialize, Serialize};

/// Hardware platform a documentation page can apply to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Platform {
    /// Inf1 (inference) instances
    Inf1,
    /// Trn1 (training) instances
    Trn1,
}

impl Platform {
    /// Label text as rendered into the page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inf1 => "Inf1",
            Self::Trn1 => "Trn1",
        }
    }

    /// All known platforms, in label order.
    pub fn all() -> &'static [Platform] {
        &[Platform::Inf1, Platform::Trn1]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inf1" => Ok(Self::Inf1),
            "trn1" => Ok(Self::Trn1),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_label_order() {
        assert!(Platform::Inf1 < Platform::Trn1);
        assert_eq!(Platform::all(), &[Platform::Inf1, Platform::Trn1]);
    }

    #[test]
    fn platform_from_str() {
        assert_eq!("inf1".parse::<Platform>().unwrap(), Platform::Inf1);
        assert_eq!("Trn1".parse::<Platform>().unwrap(), Platform::Trn1);
        assert!("inf2".parse::<Platform>().is_err());
    }

    #[test]
    fn platform_display() {
        assert_eq!(Platform::Inf1.to_string(), "Inf1");
        assert_eq!(Platform::Trn1.to_string(), "Trn1");
    }
}
