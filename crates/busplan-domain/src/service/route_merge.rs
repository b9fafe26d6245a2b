//! Route family merge rules
//!
//! Sub-routes of a family share their pickup leg up to an interchange
//! station. Employees boarding on that shared leg ride the family's primary
//! route; employees boarding after the interchange keep their own route.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::normalizer::normalize;

/// A group of route codes consolidated before a shared cutoff station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFamily {
    pub name: String,
    /// Route that absorbs the shared leg (e.g. "HCM01")
    pub primary: String,
    /// All route codes of the family, primary included
    pub members: Vec<String>,
    /// Stations on the shared leg, in order, ending at the cutoff station
    pub cutoff_stations: Vec<String>,
}

impl RouteFamily {
    /// Configured spelling of `route_code` if it belongs to this family
    fn member_label(&self, route_code: &str) -> Option<&str> {
        let route_code = route_code.trim();
        std::iter::once(&self.primary)
            .chain(self.members.iter())
            .map(|m| m.trim())
            .find(|m| m.eq_ignore_ascii_case(route_code))
    }

    fn is_primary(&self, member: &str) -> bool {
        self.primary.trim().eq_ignore_ascii_case(member)
    }

    /// Station lies on the shared leg (on or before the cutoff)
    fn is_on_shared_leg(&self, station_name: &str) -> bool {
        let station = normalize(station_name);
        self.cutoff_stations
            .iter()
            .map(|s| normalize(s))
            .any(|pattern| !pattern.is_empty() && station.contains(&pattern))
    }
}

/// Route resolution rules: families plus per-employee overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRules {
    #[serde(default)]
    pub families: Vec<RouteFamily>,
    /// Employee full name -> forced route label
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl RouteRules {
    /// Built-in HCM and BH families with no overrides
    pub fn builtin() -> Self {
        Self {
            families: vec![
                RouteFamily {
                    name: "HCM".to_string(),
                    primary: "HCM01".to_string(),
                    members: vec!["HCM01".into(), "HCM02".into(), "HCM03".into()],
                    cutoff_stations: vec![
                        "bến xe miền đông".into(),
                        "suối tiên".into(),
                        "ngã 4 thủ đức".into(),
                    ],
                },
                RouteFamily {
                    name: "BH".to_string(),
                    primary: "BH01".to_string(),
                    members: vec!["BH01".into(), "BH02".into(), "BH03".into()],
                    cutoff_stations: vec![
                        "ngã 4 tân phong".into(),
                        "công viên biên hùng".into(),
                        "ngã 3 vũng tàu".into(),
                    ],
                },
            ],
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, employee_name: &str, route_label: &str) -> Self {
        self.overrides
            .insert(employee_name.trim().to_string(), route_label.trim().to_string());
        self
    }

    /// Forced route for an employee, if the override table names them
    pub fn forced_route(&self, employee_name: &str) -> Option<&str> {
        let key = normalize(employee_name);
        if key.is_empty() {
            return None;
        }
        self.overrides
            .iter()
            .find(|(name, _)| normalize(name) == key)
            .map(|(_, route)| route.as_str())
    }

    /// Resolve the route label an employee is grouped and printed under.
    ///
    /// Overrides win; otherwise secondary family members boarding on the
    /// shared leg move to the family's primary route. Family codes come back
    /// in their configured spelling so "hcm01" and "HCM01" share a group.
    pub fn resolve_route_label(
        &self,
        route_code: &str,
        station_name: &str,
        employee_name: &str,
    ) -> String {
        if let Some(forced) = self.forced_route(employee_name) {
            return forced.to_string();
        }

        let route_code = route_code.trim();
        for family in &self.families {
            if let Some(member) = family.member_label(route_code) {
                if !family.is_primary(member) && family.is_on_shared_leg(station_name) {
                    return family.primary.trim().to_string();
                }
                return member.to_string();
            }
        }
        route_code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_route_on_shared_leg_moves_to_primary() {
        let rules = RouteRules::builtin();
        assert_eq!(rules.resolve_route_label("HCM02", "Ngã 4 Thủ Đức", "A"), "HCM01");
        assert_eq!(rules.resolve_route_label("HCM03", "Suối Tiên", "A"), "HCM01");
        assert_eq!(rules.resolve_route_label("BH03", "NGÃ 3 VŨNG TÀU", "A"), "BH01");
    }

    #[test]
    fn test_secondary_route_after_cutoff_keeps_route() {
        let rules = RouteRules::builtin();
        assert_eq!(rules.resolve_route_label("HCM02", "Bà Chiểu", "A"), "HCM02");
        assert_eq!(rules.resolve_route_label("BH02", "Chợ Biên Hòa", "A"), "BH02");
    }

    #[test]
    fn test_substring_match() {
        let rules = RouteRules::builtin();
        assert_eq!(
            rules.resolve_route_label("HCM02", "Trạm Ngã 4 Thủ Đức (cổng A)", "A"),
            "HCM01"
        );
    }

    #[test]
    fn test_primary_and_foreign_routes_pass_through() {
        let rules = RouteRules::builtin();
        assert_eq!(rules.resolve_route_label("HCM01", "Bà Chiểu", "A"), "HCM01");
        assert_eq!(rules.resolve_route_label("VT01", "Ngã 4 Thủ Đức", "A"), "VT01");
        assert_eq!(rules.resolve_route_label(" LA02 ", "Bến Lức", "A"), "LA02");
    }

    #[test]
    fn test_member_codes_compare_case_insensitively() {
        let rules = RouteRules::builtin();
        assert_eq!(rules.resolve_route_label("hcm02", "ngã 4 thủ đức", "A"), "HCM01");
    }

    #[test]
    fn test_member_codes_resolve_to_configured_spelling() {
        let rules = RouteRules::builtin();
        assert_eq!(rules.resolve_route_label("hcm01", "Bà Chiểu", "A"), "HCM01");
        assert_eq!(rules.resolve_route_label(" Hcm02 ", "Bà Chiểu", "A"), "HCM02");
        assert_eq!(rules.resolve_route_label("vt01", "Bà Chiểu", "A"), "vt01");
    }

    #[test]
    fn test_override_wins_over_family_rule() {
        let rules = RouteRules::builtin().with_override("Trần Thị Bích", "HCM03");
        assert_eq!(
            rules.resolve_route_label("HCM02", "Ngã 4 Thủ Đức", "TRẦN THỊ BÍCH "),
            "HCM03"
        );
        assert_eq!(rules.resolve_route_label("HCM02", "Ngã 4 Thủ Đức", "Lê Văn C"), "HCM01");
    }

    #[test]
    fn test_blank_name_never_matches_override() {
        let rules = RouteRules::default().with_override("", "HCM03");
        assert_eq!(rules.forced_route("  "), None);
    }
}
