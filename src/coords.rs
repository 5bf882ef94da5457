//! Latitude and longitude coordinates and the text form they are stored in.

/// The latitude and longitude
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

impl From<(f64, f64)> for Coords {
    fn from(pair: (f64, f64)) -> Self {
        Self {
            lat: pair.0,
            lon: pair.1,
        }
    }
}

/// Parse a `"lat, lon"` location string.
///
/// Locations are stored as free text so partially typed or invalid values are a
/// normal state, not an error. Returns `None` unless the text splits on a comma
/// into exactly two pieces that each lead with a finite number. Trailing
/// non-numeric characters are ignored, so `"47.6 N, -122.3 W"` parses.
pub fn parse_coords(text: &str) -> Option<Coords> {
    let mut parts = text.split(',');

    let lat = parse_leading_f64(parts.next()?)?;
    let lon = parse_leading_f64(parts.next()?)?;

    if parts.next().is_some() {
        return None;
    }

    Some(Coords { lat, lon })
}

/// Format a coordinate pair as the canonical location string.
///
/// Five decimal places, which is what the geolocation and import boundaries
/// and map pins all produce.
pub fn format_coords(lat: f64, lon: f64) -> String {
    format!("{:.5}, {:.5}", lat, lon)
}

/// Parse the longest leading prefix of `text` that is a finite number.
pub(crate) fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim();

    (1..=text.len())
        .rev()
        .filter(|&len| text.is_char_boundary(len))
        .find_map(|len| text[..len].parse::<f64>().ok())
        .filter(|val| val.is_finite())
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
