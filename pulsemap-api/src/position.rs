/// Geographic extent of the map viewport used to resolve percent-based
/// fixture positions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl Default for MapBounds {
    fn default() -> MapBounds {
        // South Philadelphia sports complex area
        MapBounds {
            north: 39.92,
            south: 39.86,
            west: -75.23,
            east: -75.12,
        }
    }
}

/// Normalized venue position. Fixture venues come in two shapes (real
/// coordinates or viewport percentages); both resolve to this at load time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawPosition {
    Coordinates { lat: f64, lng: f64 },
    PercentOffset { x_pct: f64, y_pct: f64 },
}

impl RawPosition {
    pub fn resolve(&self, bounds: &MapBounds) -> Position {
        match *self {
            RawPosition::Coordinates { lat, lng } => Position { lat, lng },
            RawPosition::PercentOffset { x_pct, y_pct } => {
                let lat_span = bounds.north - bounds.south;
                let lng_span = bounds.east - bounds.west;
                Position {
                    lat: bounds.north - (y_pct / 100.0) * lat_span,
                    lng: bounds.west + (x_pct / 100.0) * lng_span,
                }
            }
        }
    }
}
