use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Target,
    Competitor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandEntry {
    pub name: String,
    pub relationship: Relationship,
}

#[derive(Debug, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandEntry>,
}

/// The brands tracked in one analysis run.
///
/// Names are trimmed and lowercased on construction. Duplicate names are kept
/// as given; each occurrence is tallied separately by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandSet {
    target: String,
    competitors: Vec<String>,
}

impl BrandSet {
    /// Build a roster from a target and its competitors.
    ///
    /// Blank competitor entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the target is blank.
    pub fn new<I, S>(target: &str, competitors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let target = normalize_name(target);
        if target.is_empty() {
            return Err(ConfigError::Validation(
                "target brand must be non-empty".to_string(),
            ));
        }

        let competitors = competitors
            .into_iter()
            .map(|c| normalize_name(c.as_ref()))
            .filter(|c| !c.is_empty())
            .collect();

        Ok(Self {
            target,
            competitors,
        })
    }

    /// Build a roster from a comma-separated competitor list, e.g.
    /// `"crompton,havells,orient"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the target is blank.
    pub fn from_csv(target: &str, competitors_csv: &str) -> Result<Self, ConfigError> {
        Self::new(target, competitors_csv.split(','))
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn competitors(&self) -> &[String] {
        &self.competitors
    }

    /// Target first, then competitors in configured order.
    #[must_use]
    pub fn roster(&self) -> Vec<&str> {
        std::iter::once(self.target.as_str())
            .chain(self.competitors.iter().map(String::as_str))
            .collect()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Load and validate a brand roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brand_set(path: &Path) -> Result<BrandSet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brands_file: BrandsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BrandsFileParse)?;

    validate_brands(&brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<BrandSet, ConfigError> {
    let mut seen_names = HashSet::new();
    let mut target = None;
    let mut competitors = Vec::new();

    for brand in &brands_file.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        let lower_name = normalize_name(&brand.name);
        if !seen_names.insert(lower_name.clone()) {
            tracing::warn!(
                brand = %lower_name,
                "duplicate brand in roster; its mentions will be counted once per entry"
            );
        }

        match brand.relationship {
            Relationship::Target => {
                if target.is_some() {
                    return Err(ConfigError::Validation(format!(
                        "more than one target brand (second: '{}')",
                        brand.name
                    )));
                }
                target = Some(brand.name.as_str());
            }
            Relationship::Competitor => competitors.push(brand.name.as_str()),
        }
    }

    let target = target.ok_or_else(|| {
        ConfigError::Validation("brands file must declare exactly one target brand".to_string())
    })?;

    BrandSet::new(target, competitors)
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
