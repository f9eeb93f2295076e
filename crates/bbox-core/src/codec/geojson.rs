//! GeoJSON codec for the selection rectangle.
//!
//! The host page only ever sees text.  A rectangle crosses the widget boundary
//! as a GeoJSON `Polygon` geometry with a single closed ring:
//!
//! ```json
//! {"type":"Polygon","coordinates":[[[-1.0,51.0],[-1.0,52.0],[1.0,52.0],[1.0,51.0],[-1.0,51.0]]]}
//! ```
//!
//! [`encode`] always writes the ring starting at the lower-left corner and
//! running clockwise.  [`decode`] is more forgiving: any winding and any
//! starting corner is accepted, as long as the ring traces an axis-aligned box.

use std::fmt;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::extent::Coordinate;
use crate::domain::rectangle::{GeometryError, Rectangle};

/// The only geometry type this codec reads or writes.
pub const POLYGON: &str = "Polygon";

/// Number of positions in a closed rectangular ring.
const RING_LEN: usize = 5;

/// Opaque GeoJSON text produced by [`encode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerializedGeometry(String);

impl SerializedGeometry {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SerializedGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SerializedGeometry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SerializedGeometry> for String {
    fn from(value: SerializedGeometry) -> Self {
        value.0
    }
}

/// The parts of a GeoJSON geometry object the decoder looks at.
#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Option<Value>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes a rectangle as a GeoJSON `Polygon`.
///
/// # Examples
///
/// ```rust
/// use bbox_core::{decode, encode, Rectangle};
///
/// let rect = Rectangle::new(-1.0, 51.0, 1.0, 52.0).unwrap();
/// let text = encode(&rect);
/// assert!(text.as_str().contains(r#""type":"Polygon""#));
/// assert_eq!(decode(text.as_str()).unwrap(), rect);
/// ```
pub fn encode(rect: &Rectangle) -> SerializedGeometry {
    let ring: Vec<[f64; 2]> = rect.ring().iter().map(|c| [c.x, c.y]).collect();
    let geometry = json!({
        "type": POLYGON,
        "coordinates": [ring],
    });
    SerializedGeometry(geometry.to_string())
}

/// Decodes GeoJSON text into a rectangle.
///
/// A JSON string literal whose contents are themselves a geometry is
/// unwrapped once, so values written by older hosts that double-encoded the
/// geometry still load.
///
/// # Errors
///
/// - [`GeometryError::Malformed`] for text that is not JSON, is not a
///   `Polygon`, has holes, an open ring, or a ring that is not an axis-aligned
///   rectangle.
/// - [`GeometryError::Degenerate`] for a rectangle with zero width or height.
pub fn decode(text: &str) -> Result<Rectangle, GeometryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GeometryError::Malformed("empty geometry text".to_string()));
    }

    let mut value: Value = serde_json::from_str(trimmed).map_err(malformed)?;
    if let Value::String(inner) = &value {
        value = serde_json::from_str(inner.trim()).map_err(malformed)?;
    }

    let raw: RawGeometry = serde_json::from_value(value).map_err(malformed)?;
    if raw.kind != POLYGON {
        return Err(GeometryError::Malformed(format!(
            "unsupported geometry type {:?}, expected {POLYGON}",
            raw.kind
        )));
    }

    let coordinates = raw
        .coordinates
        .ok_or_else(|| GeometryError::Malformed("polygon has no coordinates".to_string()))?;
    let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(coordinates).map_err(malformed)?;

    let [ring] = rings.as_slice() else {
        return Err(GeometryError::Malformed(format!(
            "expected exactly one ring, found {}",
            rings.len()
        )));
    };
    rectangle_from_ring(ring)
}

// ── Ring validation ───────────────────────────────────────────────────────────

fn malformed(err: serde_json::Error) -> GeometryError {
    GeometryError::Malformed(err.to_string())
}

fn rectangle_from_ring(positions: &[Vec<f64>]) -> Result<Rectangle, GeometryError> {
    if positions.len() != RING_LEN {
        return Err(GeometryError::Malformed(format!(
            "rectangle ring must have {RING_LEN} positions, found {}",
            positions.len()
        )));
    }

    let ring = positions
        .iter()
        .map(|p| match p.as_slice() {
            // Altitude and any further ordinates are ignored.
            [x, y, ..] => Ok(Coordinate::new(*x, *y)),
            _ => Err(GeometryError::Malformed(
                "position must have at least two ordinates".to_string(),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ring[0] != ring[RING_LEN - 1] {
        return Err(GeometryError::Malformed("ring is not closed".to_string()));
    }

    let min_x = ring.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
    let max_x = ring.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = ring.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
    let max_y = ring.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max);
    let rect = Rectangle::new(min_x, min_y, max_x, max_y)?;

    let scale = [min_x, min_y, max_x, max_y]
        .iter()
        .fold(1.0_f64, |acc, v| acc.max(v.abs()));
    // Never wider than a quarter of the side, so a narrow box keeps two
    // distinct corners per axis.
    let snap = |value: f64, low: f64, high: f64| -> Option<u8> {
        let tolerance = (scale * 1e-9).min((high - low) / 4.0);
        if (value - low).abs() <= tolerance {
            Some(0)
        } else if (value - high).abs() <= tolerance {
            Some(1)
        } else {
            None
        }
    };

    // Identify each of the first four vertices as one of the four corners.
    let mut corners = [(0u8, 0u8); 4];
    for (slot, c) in corners.iter_mut().zip(ring.iter()) {
        match (snap(c.x, min_x, max_x), snap(c.y, min_y, max_y)) {
            (Some(cx), Some(cy)) => *slot = (cx, cy),
            _ => return Err(not_rectangular()),
        }
    }

    for i in 0..corners.len() {
        if corners[i + 1..].contains(&corners[i]) {
            return Err(not_rectangular());
        }
        // Each edge must move along exactly one axis.
        let (a, b) = (corners[i], corners[(i + 1) % corners.len()]);
        if a.0 != b.0 && a.1 != b.1 {
            return Err(not_rectangular());
        }
    }

    Ok(rect)
}

fn not_rectangular() -> GeometryError {
    GeometryError::Malformed("ring is not an axis-aligned rectangle".to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
