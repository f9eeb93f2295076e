//! WMS `GetMap` tile source.
//!
//! Each tile is requested as its own `GetMap` call whose `BBOX` is exactly the
//! tile's extent and whose `WIDTH`/`HEIGHT` are the grid's tile size, so the
//! server can answer from its tile cache (`TILED=true`).
//!
//! WMS 1.3.0 changed the axis order for geographic systems such as
//! `EPSG:4258`: the `BBOX` is written latitude first.  1.1.x keeps x first
//! and names the system with `SRS` rather than `CRS`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use bbox_core::{Extent, TileCoord};

use crate::application::ports::{TileRequest, TileSource};
use crate::domain::config::WmsConfig;

/// Everything except RFC 3986 unreserved characters is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Geographic systems whose axis order WMS 1.3.0 declares as latitude first.
const LATITUDE_FIRST: &[&str] = &["EPSG:4258", "EPSG:4326"];

#[derive(Debug, Clone, PartialEq)]
pub struct WmsTileSource {
    config: WmsConfig,
    projection_code: String,
    tile_size: u32,
}

impl WmsTileSource {
    pub fn new(config: WmsConfig, projection_code: impl Into<String>, tile_size: u32) -> Self {
        Self {
            config,
            projection_code: projection_code.into(),
            tile_size,
        }
    }

    fn is_wms_13(&self) -> bool {
        self.config.version.starts_with("1.3")
    }

    fn bbox(&self, extent: &Extent) -> String {
        let [min_x, min_y, max_x, max_y] = extent.to_array();
        if self.is_wms_13() && LATITUDE_FIRST.contains(&self.projection_code.as_str()) {
            format!("{min_y},{min_x},{max_y},{max_x}")
        } else {
            format!("{min_x},{min_y},{max_x},{max_y}")
        }
    }

    /// Builds the `GetMap` URL for one tile.
    pub fn url(&self, extent: &Extent) -> String {
        let size = self.tile_size.to_string();
        let bbox = self.bbox(extent);
        let crs_key = if self.is_wms_13() { "CRS" } else { "SRS" };
        let params = [
            ("SERVICE", "WMS"),
            ("REQUEST", "GetMap"),
            ("VERSION", self.config.version.as_str()),
            ("LAYERS", self.config.layers.as_str()),
            ("STYLES", ""),
            ("FORMAT", self.config.format.as_str()),
            ("TILED", if self.config.tiled { "true" } else { "false" }),
            (crs_key, self.projection_code.as_str()),
            ("BBOX", bbox.as_str()),
            ("WIDTH", size.as_str()),
            ("HEIGHT", size.as_str()),
        ];

        let mut url = self.config.url.clone();
        let mut separator = if url.contains('?') {
            if url.ends_with('?') || url.ends_with('&') {
                ""
            } else {
                "&"
            }
        } else {
            "?"
        };
        for (key, value) in params {
            url.push_str(separator);
            url.push_str(key);
            url.push('=');
            url.extend(utf8_percent_encode(value, QUERY_VALUE));
            separator = "&";
        }
        url
    }
}

impl TileSource for WmsTileSource {
    fn request(&self, coord: TileCoord, extent: &Extent) -> TileRequest {
        TileRequest {
            coord,
            extent: *extent,
            url: self.url(extent),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
