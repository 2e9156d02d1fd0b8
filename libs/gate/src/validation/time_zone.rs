/// Decides whether a time zone identifier is known.
pub trait TimeZoneValidator: Send + Sync {
    fn is_valid(&self, time_zone_id: &str) -> bool;
}

const AREAS: &[&str] = &[
    "Africa",
    "America",
    "Antarctica",
    "Arctic",
    "Asia",
    "Atlantic",
    "Australia",
    "Europe",
    "Indian",
    "Pacific",
    "Etc",
];

const BARE: &[&str] = &["UTC", "GMT"];

/// Accepts `UTC`, `GMT`, and IANA-shaped `Area/Location` identifiers whose
/// area is one of the tz database's continents or oceans.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownTimeZones;

impl TimeZoneValidator for KnownTimeZones {
    fn is_valid(&self, time_zone_id: &str) -> bool {
        if BARE.contains(&time_zone_id) {
            return true;
        }

        let mut parts = time_zone_id.split('/');
        let Some(area) = parts.next() else {
            return false;
        };
        if !AREAS.contains(&area) {
            return false;
        }

        let locations: Vec<&str> = parts.collect();
        !locations.is_empty()
            && locations.iter().all(|part| {
                !part.is_empty()
                    && part
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'))
            })
    }
}
