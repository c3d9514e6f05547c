/// Placeholder specialty shown when a volunteer has no skills listed
pub const DEFAULT_SPECIALTY: &str = "Volunteer";

/// Default maximum travel distance (km) when registration omits one
pub const DEFAULT_MAX_DISTANCE_KM: i32 = 10;
