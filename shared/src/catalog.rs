//! Catalogs - the static timezone table and the ordered style catalogs
//!
//! Both catalogs are immutable and built once at startup. Style catalogs keep
//! an explicit value-to-index map next to the ordered entry list so cycling
//! never scans by value and a stale style reference is a typed error instead
//! of a panic.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;

/// Errors raised by catalog lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// City is not present in the timezone table
    UnknownCity(String),
    /// Timezone identifier failed to resolve
    UnknownTimezone(String),
    /// Style cycling was asked about a style the catalog does not contain
    StyleNotInCatalog(PathBuf),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::UnknownCity(city) => write!(f, "Unknown city: {}", city),
            CatalogError::UnknownTimezone(id) => write!(f, "Unknown timezone: {}", id),
            CatalogError::StyleNotInCatalog(path) => {
                write!(f, "Style not in catalog: {}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Cities grouped by continent, each mapped to its IANA timezone identifier.
/// City names are unique across continents.
const TIME_ZONES_BY_CONTINENT: &[(&str, &[(&str, &str)])] = &[
    (
        "Europe",
        &[
            ("London", "Europe/London"),
            ("Paris", "Europe/Paris"),
            ("Berlin", "Europe/Berlin"),
            ("Rome", "Europe/Rome"),
            ("Moscow", "Europe/Moscow"),
            ("Athens", "Europe/Athens"),
        ],
    ),
    (
        "Asia",
        &[
            ("Tokyo", "Asia/Tokyo"),
            ("Dubai", "Asia/Dubai"),
            ("Shanghai", "Asia/Shanghai"),
            ("Mumbai", "Asia/Kolkata"),
            ("Seoul", "Asia/Seoul"),
            ("Bangkok", "Asia/Bangkok"),
            ("Tehran", "Asia/Tehran"),
        ],
    ),
    (
        "North America",
        &[
            ("New York", "America/New_York"),
            ("Toronto", "America/Toronto"),
            ("Mexico City", "America/Mexico_City"),
        ],
    ),
    ("Australia", &[("Sydney", "Australia/Sydney")]),
];

/// Background photo for each city, relative to the media root
const CITY_IMAGES: &[(&str, &str)] = &[
    ("London", "medias/backgrounds/London-clock-tower.jpg"),
    ("New York", "medias/backgrounds/New-York.jpg"),
    ("Paris", "medias/backgrounds/Paris.jpg"),
    ("Tokyo", "medias/backgrounds/Tokyo.jpg"),
    ("Sydney", "medias/backgrounds/Sydney.jpg"),
    ("Berlin", "medias/backgrounds/Berlin.jpg"),
    ("Dubai", "medias/backgrounds/Dubai.jpg"),
    ("Rome", "medias/backgrounds/Rome.jpg"),
    ("Moscow", "medias/backgrounds/Moscow.jpg"),
    ("Shanghai", "medias/backgrounds/Shanghai.jpg"),
    ("Mumbai", "medias/backgrounds/Mumbai.jpg"),
    ("Toronto", "medias/backgrounds/Toronto.jpg"),
    ("Mexico City", "medias/backgrounds/Mexico-city.jpg"),
    ("Seoul", "medias/backgrounds/Seoul.jpg"),
    ("Bangkok", "medias/backgrounds/Bangkok.jpg"),
    ("Athens", "medias/backgrounds/Athens.jpg"),
    ("Tehran", "medias/backgrounds/Tehran.jpg"),
];

/// One continent's worth of city entries
#[derive(Debug, Clone)]
pub struct Continent {
    pub name: String,
    /// Ordered (city, IANA identifier) pairs
    pub cities: Vec<(String, String)>,
}

/// Static mapping from continent to city to IANA timezone identifier
#[derive(Debug, Clone)]
pub struct TimeZoneCatalog {
    continents: Vec<Continent>,
    zone_by_city: HashMap<String, String>,
    background_by_city: HashMap<String, PathBuf>,
}

impl TimeZoneCatalog {
    pub fn new() -> Self {
        let continents: Vec<Continent> = TIME_ZONES_BY_CONTINENT
            .iter()
            .map(|(name, cities)| Continent {
                name: (*name).to_string(),
                cities: cities
                    .iter()
                    .map(|(city, zone)| ((*city).to_string(), (*zone).to_string()))
                    .collect(),
            })
            .collect();

        let zone_by_city = continents
            .iter()
            .flat_map(|c| c.cities.iter().cloned())
            .collect();

        let background_by_city = CITY_IMAGES
            .iter()
            .map(|(city, path)| ((*city).to_string(), PathBuf::from(path)))
            .collect();

        Self {
            continents,
            zone_by_city,
            background_by_city,
        }
    }

    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }

    /// Resolve a city to its timezone. Unknown cities and identifiers that
    /// chrono-tz rejects both surface as typed errors; the caller decides
    /// whether to fall back or keep its previous zone.
    pub fn resolve(&self, city: &str) -> Result<Tz, CatalogError> {
        let zone_id = self
            .zone_by_city
            .get(city)
            .ok_or_else(|| CatalogError::UnknownCity(city.to_string()))?;
        zone_id
            .parse::<Tz>()
            .map_err(|_| CatalogError::UnknownTimezone(zone_id.clone()))
    }

    /// Background photo path for a city, relative to the media root
    pub fn background_for(&self, city: &str) -> Option<&Path> {
        self.background_by_city.get(city).map(PathBuf::as_path)
    }

    /// All background paths in catalog order, for missing-asset fallback
    pub fn all_backgrounds(&self) -> impl Iterator<Item = &Path> {
        CITY_IMAGES
            .iter()
            .filter_map(|(city, _)| self.background_for(city))
    }
}

impl Default for TimeZoneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// One named style and the image resource it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Ordered, name-keyed collection of visual style resources.
///
/// Cycling compares by resource value, not name: two names may map to the
/// same image and both must be skipped as one step.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    entries: Vec<StyleEntry>,
    /// First index carrying each distinct resource value
    index_by_path: HashMap<PathBuf, usize>,
    default_index: usize,
}

impl StyleCatalog {
    /// Build a catalog from ordered (name, path) pairs. `default_name` must
    /// name one of the entries; it is the style installed on mode switch.
    pub fn new(entries: Vec<(&str, &str)>, default_name: &str) -> Self {
        let entries: Vec<StyleEntry> = entries
            .into_iter()
            .map(|(name, path)| StyleEntry {
                name: name.to_string(),
                path: PathBuf::from(path),
            })
            .collect();

        let mut index_by_path = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            index_by_path.entry(entry.path.clone()).or_insert(i);
        }

        let default_index = entries
            .iter()
            .position(|e| e.name == default_name)
            .unwrap_or(0);

        Self {
            entries,
            index_by_path,
            default_index,
        }
    }

    /// The analog dial overlays from the bundled media set
    pub fn analog_styles() -> Self {
        Self::new(
            vec![
                ("Billiard", "medias/analog_styles/Billiard-modified.png"),
                ("Blue-neon", "medias/analog_styles/Blue-neon-modified.png"),
                (
                    "Modern-pilot",
                    "medias/analog_styles/Modern-Pilot-modified.png",
                ),
                ("Omega", "medias/analog_styles/Omega-Black-Gold-modified.png"),
                ("Porsche", "medias/analog_styles/Porsche-modified.png"),
                (
                    "Purple-mystery",
                    "medias/analog_styles/Purple-Mystery-modified.png",
                ),
                (
                    "Purple-mystery-2",
                    "medias/analog_styles/Purple-Mystery-modified-2.png",
                ),
                ("Rings", "medias/analog_styles/Rings-modified.png"),
                ("Rolex", "medias/analog_styles/Rolex-modified-1.png"),
                ("Rolex2", "medias/analog_styles/Rolex-modified-2.png"),
                ("Rolex3", "medias/analog_styles/Rolex-modified-3.png"),
                ("Sun", "medias/analog_styles/Sun-modified.png"),
                ("Tux", "medias/analog_styles/Tux-modified.png"),
                ("Yalda", "medias/analog_styles/Yalda-modified.png"),
                (
                    "Simple_farsi",
                    "medias/analog_styles/Simple-Farsi-modified.png",
                ),
            ],
            "Omega",
        )
    }

    /// The digital display frames from the bundled media set
    pub fn digital_styles() -> Self {
        Self::new(
            vec![
                ("Aqua", "medias/digital_styles/Aqua-digital.png"),
                ("Coca", "medias/digital_styles/Coca-digital.png"),
                ("Emerald", "medias/digital_styles/Emerald-digital.png"),
                ("Gem", "medias/digital_styles/Gem-digital.png"),
                ("Ocean", "medias/digital_styles/Ocean-digital.png"),
                ("Red-cobalt", "medias/digital_styles/Red-cobalt-digital.png"),
                ("Wooden", "medias/digital_styles/Wooden-digital.png"),
            ],
            "Aqua",
        )
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    /// The entry installed on first load and on mode switch
    pub fn default_entry(&self) -> &StyleEntry {
        &self.entries[self.default_index]
    }

    /// Entry carrying the given resource, if the catalog contains it
    pub fn entry_for(&self, path: &Path) -> Option<&StyleEntry> {
        self.index_by_path.get(path).map(|&i| &self.entries[i])
    }

    /// Next distinct style after `current`, wrapping around and skipping
    /// entries whose resource duplicates the current one.
    ///
    /// The scan is bounded to exactly one lap; if every entry maps to the
    /// same resource as `current`, the current entry is returned unchanged.
    /// A `current` that is not in the catalog at all is a contract violation
    /// and fails with `StyleNotInCatalog`.
    pub fn next_style(&self, current: &Path) -> Result<&StyleEntry, CatalogError> {
        let &start = self
            .index_by_path
            .get(current)
            .ok_or_else(|| CatalogError::StyleNotInCatalog(current.to_path_buf()))?;

        let len = self.entries.len();
        for step in 1..=len {
            let candidate = &self.entries[(start + step) % len];
            if candidate.path != current {
                return Ok(candidate);
            }
        }
        Ok(&self.entries[start])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_zone_identifier_parses() {
        let catalog = TimeZoneCatalog::new();
        for continent in catalog.continents() {
            for (city, zone_id) in &continent.cities {
                let tz = catalog.resolve(city);
                assert!(tz.is_ok(), "{} -> {} failed to resolve", city, zone_id);
            }
        }
    }

    #[test]
    fn test_city_names_unique_across_continents() {
        let catalog = TimeZoneCatalog::new();
        let mut seen = std::collections::HashSet::new();
        for continent in catalog.continents() {
            for (city, _) in &continent.cities {
                assert!(seen.insert(city.clone()), "duplicate city: {}", city);
            }
        }
    }

    #[test]
    fn test_unknown_city_is_typed_error() {
        let catalog = TimeZoneCatalog::new();
        match catalog.resolve("Atlantis") {
            Err(CatalogError::UnknownCity(city)) => assert_eq!(city, "Atlantis"),
            other => panic!("expected UnknownCity, got {:?}", other),
        }
    }

    #[test]
    fn test_every_city_has_a_background() {
        let catalog = TimeZoneCatalog::new();
        for continent in catalog.continents() {
            for (city, _) in &continent.cities {
                assert!(
                    catalog.background_for(city).is_some(),
                    "no background for {}",
                    city
                );
            }
        }
    }

    #[test]
    fn test_cycle_visits_all_distinct_values_once() {
        let catalog = StyleCatalog::new(
            vec![("a", "1.png"), ("b", "2.png"), ("c", "3.png"), ("d", "4.png")],
            "a",
        );
        let mut current = catalog.default_entry().path.clone();
        let mut visited = Vec::new();
        for _ in 0..4 {
            let next = catalog.next_style(&current).unwrap();
            visited.push(next.path.clone());
            current = next.path.clone();
        }
        assert_eq!(current, catalog.default_entry().path);
        let distinct: std::collections::HashSet<_> = visited.iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_cycle_skips_duplicate_values() {
        // "b" and "c" share a resource; both must act as a single step.
        let catalog = StyleCatalog::new(
            vec![("a", "1.png"), ("b", "2.png"), ("c", "2.png"), ("d", "3.png")],
            "a",
        );
        let from_a = catalog.next_style(Path::new("1.png")).unwrap();
        assert_eq!(from_a.path, PathBuf::from("2.png"));
        let from_dup = catalog.next_style(Path::new("2.png")).unwrap();
        assert_eq!(from_dup.path, PathBuf::from("3.png"));
    }

    #[test]
    fn test_all_duplicates_returns_current() {
        let catalog = StyleCatalog::new(vec![("a", "1.png"), ("b", "1.png")], "a");
        let next = catalog.next_style(Path::new("1.png")).unwrap();
        assert_eq!(next.path, PathBuf::from("1.png"));
    }

    #[test]
    fn test_foreign_style_is_contract_violation() {
        let catalog = StyleCatalog::analog_styles();
        let digital_default = StyleCatalog::digital_styles().default_entry().path.clone();
        match catalog.next_style(&digital_default) {
            Err(CatalogError::StyleNotInCatalog(path)) => assert_eq!(path, digital_default),
            other => panic!("expected StyleNotInCatalog, got {:?}", other),
        }
    }

    #[test]
    fn test_default_entries() {
        assert_eq!(StyleCatalog::analog_styles().default_entry().name, "Omega");
        assert_eq!(StyleCatalog::digital_styles().default_entry().name, "Aqua");
    }
}
