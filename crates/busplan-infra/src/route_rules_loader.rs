//! Route rule loader from TOML configuration
//!
//! ```toml
//! [[families]]
//! name = "HCM"
//! primary = "HCM01"
//! members = ["HCM01", "HCM02", "HCM03"]
//! cutoff_stations = ["suối tiên", "ngã 4 thủ đức"]
//!
//! [overrides]
//! "Nguyễn Văn An" = "HCM03"
//! ```

use std::fs;
use std::path::Path;

use busplan_domain::service::RouteRules;
use busplan_types::{ConfigError, Error, Result};
use tracing::{debug, warn};

pub struct RouteRulesLoader;

impl RouteRulesLoader {
    /// Load route rules from a TOML file
    pub fn load_from_file(path: &Path) -> Result<RouteRules> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read route rules file {}: {}",
                path.display(),
                e
            )))
        })?;

        let rules = Self::load_from_str(&content)?;
        debug!(
            path = %path.display(),
            families = rules.families.len(),
            overrides = rules.overrides.len(),
            "loaded route rules"
        );
        Ok(rules)
    }

    /// Load route rules from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<RouteRules> {
        let rules: RouteRules = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse route rules TOML: {}",
                e
            )))
        })?;

        for family in &rules.families {
            if !family
                .members
                .iter()
                .any(|m| m.trim().eq_ignore_ascii_case(family.primary.trim()))
            {
                warn!(family = %family.name, primary = %family.primary, "primary route is not listed among members");
            }
            if family.cutoff_stations.is_empty() {
                warn!(family = %family.name, "family has no cutoff stations and will never merge");
            }
        }

        Ok(rules)
    }

    /// Rules from `path` when given, otherwise the built-in families
    pub fn load_or_builtin(path: Option<&Path>) -> Result<RouteRules> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(RouteRules::builtin()),
        }
    }

    /// Serialize rules back to TOML (used to scaffold a rules file)
    pub fn to_toml(rules: &RouteRules) -> Result<String> {
        toml::to_string_pretty(rules)
            .map_err(|e| Error::Config(ConfigError::ParseError(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[families]]
name = "HCM"
primary = "HCM01"
members = ["HCM01", "HCM02"]
cutoff_stations = ["Ngã 4 Thủ Đức"]

[[families]]
name = "LA"
primary = "LA01"
members = ["LA01", "LA02"]
cutoff_stations = ["Bến Lức"]

[overrides]
"Nguyễn Văn An" = "HCM02"
"#;

    #[test]
    fn test_load_from_str() {
        let rules = RouteRulesLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(rules.families.len(), 2);
        assert_eq!(rules.overrides.len(), 1);
        assert_eq!(rules.resolve_route_label("LA02", "bến lức", "X"), "LA01");
        assert_eq!(rules.resolve_route_label("HCM02", "Ngã 4 Thủ Đức", "Nguyễn Văn An"), "HCM02");
    }

    #[test]
    fn test_overrides_only() {
        let rules = RouteRulesLoader::load_from_str("[overrides]\n\"A\" = \"BH02\"\n").unwrap();
        assert!(rules.families.is_empty());
        assert_eq!(rules.forced_route("a"), Some("BH02"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = RouteRulesLoader::load_from_str("[[families]]\nname = 1\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_builtin_round_trips_through_toml() {
        let builtin = RouteRules::builtin();
        let text = RouteRulesLoader::to_toml(&builtin).unwrap();
        let loaded = RouteRulesLoader::load_from_str(&text).unwrap();
        assert_eq!(loaded, builtin);
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        let rules = RouteRulesLoader::load_or_builtin(None).unwrap();
        assert_eq!(rules, RouteRules::builtin());
    }
}
