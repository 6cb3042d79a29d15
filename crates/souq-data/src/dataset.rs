//! Named product datasets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of product data files the storefront can load.
///
/// The dataset selector offers exactly these; there is no free-form data
/// source configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    /// The default fifteen-product catalog.
    #[default]
    Core,
    /// The extended sixty-product catalog.
    Extended,
    /// Rotating seasonal picks.
    Seasonal,
}

impl Dataset {
    /// Get the name of the JSON file backing this dataset.
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Core => "catalog-15.json",
            Dataset::Extended => "catalog-60.json",
            Dataset::Seasonal => "catalog-seasonal.json",
        }
    }

    /// Get the label shown in the dataset selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dataset::Core => "Core catalog",
            Dataset::Extended => "Extended catalog",
            Dataset::Seasonal => "Seasonal picks",
        }
    }

    /// Resolve a dataset from its backing file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        match name {
            "catalog-15.json" => Some(Dataset::Core),
            "catalog-60.json" => Some(Dataset::Extended),
            "catalog-seasonal.json" => Some(Dataset::Seasonal),
            _ => None,
        }
    }

    /// Every selectable dataset, in selector order.
    pub fn all() -> [Dataset; 3] {
        [Dataset::Core, Dataset::Extended, Dataset::Seasonal]
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}
