use serde::{Deserialize, Serialize};

/// Position of a station within a route (chi tiết tuyến)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDetail {
    pub route_code: String,
    pub station_name: String,
    /// Visiting order; need not be contiguous
    pub order: i64,
}
