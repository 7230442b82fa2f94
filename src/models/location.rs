use serde::Deserialize;

/// A named geofence: coordinates plus a radius a clock-in may be constrained
/// to. Lookup and display only; the engine does not evaluate containment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
}

/// Links a user to a geofence with an on/off restriction flag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRestriction {
    pub user_id: i64,
    pub location_id: i64,
    pub restriction_status: bool,
}
