use crate::error::CatalogError;
use agegate_types::{FeatureInfo, Regulation};
use std::collections::BTreeMap;

/// Feature key -> minimum age.
pub type RuleSet = BTreeMap<String, u32>;

/// Law string reported for regions without regulatory metadata.
pub const STANDARD_PRACTICES: &str = "Standard practices";

/// Presentation metadata for a region. Stored independently of the rule tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionProfile {
    pub name: String,
    pub law: String,
    pub general_age: u32,
    pub exceptions: BTreeMap<String, u32>,
    pub description: String,
}

/// Immutable region -> feature -> minimum age mapping with default fallback.
#[derive(Clone, Debug, Default)]
pub struct RuleCatalog {
    version: String,
    defaults: RuleSet,
    regions: BTreeMap<String, RuleSet>,
    profiles: BTreeMap<String, RegionProfile>,
    features: Vec<FeatureInfo>,
}

pub fn rule_set(rows: &[(&str, u32)]) -> RuleSet {
    rows.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl RuleCatalog {
    pub fn new(version: impl Into<String>, defaults: RuleSet) -> Self {
        Self {
            version: version.into(),
            defaults,
            ..Self::default()
        }
    }

    pub fn with_region(mut self, code: impl Into<String>, rules: RuleSet) -> Self {
        self.regions.insert(code.into(), rules);
        self
    }

    pub fn with_profile(mut self, code: impl Into<String>, profile: RegionProfile) -> Self {
        self.profiles.insert(code.into(), profile);
        self
    }

    pub fn with_feature(mut self, info: FeatureInfo) -> Self {
        self.features.push(info);
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn defaults(&self) -> &RuleSet {
        &self.defaults
    }

    /// Rules declared by the region itself, without defaults merged in.
    pub fn region_rules(&self, region: &str) -> Option<&RuleSet> {
        self.regions.get(region)
    }

    pub fn profiles(&self) -> impl Iterator<Item = (&str, &RegionProfile)> {
        self.profiles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve the minimum age for `feature` in `region`.
    ///
    /// Region entry first, then the default rules. Unknown regions are never an error.
    pub fn lookup(&self, region: &str, feature: &str) -> Result<u32, CatalogError> {
        self.regions
            .get(region)
            .and_then(|rules| rules.get(feature))
            .or_else(|| self.defaults.get(feature))
            .copied()
            .ok_or_else(|| CatalogError::UnknownFeature {
                feature: feature.to_string(),
            })
    }

    /// Region entries merged over the default rules, per feature.
    pub fn effective_rules(&self, region: &str) -> RuleSet {
        let mut merged = self.defaults.clone();
        if let Some(rules) = self.regions.get(region) {
            merged.extend(rules.iter().map(|(k, v)| (k.clone(), *v)));
        }
        merged
    }

    /// Region codes with rule entries, sorted.
    pub fn all_regions(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    pub fn all_features(&self) -> &[FeatureInfo] {
        &self.features
    }

    pub fn feature(&self, key: &str) -> Option<&FeatureInfo> {
        self.features.iter().find(|f| f.key == key)
    }

    pub fn region(&self, code: &str) -> Option<&RegionProfile> {
        self.profiles.get(code)
    }

    /// A feature is known when any rule table (region or default) defines it.
    pub fn is_known_feature(&self, feature: &str) -> bool {
        self.defaults.contains_key(feature)
            || self.regions.values().any(|rules| rules.contains_key(feature))
    }

    pub fn regulation(&self, region: &str) -> Regulation {
        match self.profiles.get(region) {
            Some(p) => Regulation {
                region: region.to_string(),
                name: Some(p.name.clone()),
                law: p.law.clone(),
                general_age: Some(p.general_age),
                exceptions: p.exceptions.clone(),
                description: Some(p.description.clone()),
            },
            None => Regulation {
                region: region.to_string(),
                name: None,
                law: STANDARD_PRACTICES.to_string(),
                general_age: None,
                exceptions: BTreeMap::new(),
                description: None,
            },
        }
    }

    /// Minimum age for `feature` in every region that resolves it.
    pub fn age_requirement_across_regions(
        &self,
        feature: &str,
    ) -> Result<BTreeMap<String, u32>, CatalogError> {
        if !self.is_known_feature(feature) {
            return Err(CatalogError::UnknownFeature {
                feature: feature.to_string(),
            });
        }

        Ok(self
            .all_regions()
            .into_iter()
            .filter_map(|region| {
                self.lookup(region, feature)
                    .ok()
                    .map(|age| (region.to_string(), age))
            })
            .collect())
    }
}
