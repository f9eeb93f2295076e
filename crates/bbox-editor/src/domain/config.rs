//! Editor configuration schema.
//!
//! [`EditorConfig`] is the single source of truth for how one widget is set
//! up: which projection it draws in, which resolutions it may render at, where
//! the view starts, which WMS layer provides the basemap and how the selection
//! is styled.  Every field has a default, so an empty TOML file (or no file at
//! all) yields a working editor over Great Britain in ETRS89.
//!
//! ```toml
//! [projection]
//! code = "EPSG:4258"
//! extent = [-30.0, 48.0, 3.5, 64.0]
//!
//! [tile_grid]
//! tile_size = 250
//!
//! [view]
//! resolution_index = 3
//!
//! [wms]
//! url = "https://example.org/geoserver/gwc/service/wms"
//! layers = "InspireETRS89"
//! ```
//!
//! The struct only carries raw values.  [`EditorConfig::build`] turns them
//! into validated domain types and fails fast on anything unusable.

use serde::{Deserialize, Serialize};

use bbox_core::{
    ConfigurationError, Coordinate, Extent, PixelSize, Projection, ResolutionLadder, TileGrid,
    ViewState,
};

/// Top-level editor configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EditorConfig {
    #[serde(default)]
    pub editor: GeneralConfig,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub tile_grid: TileGridConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub wms: WmsConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

/// Settings that are not tied to one component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Schema version string.
    #[serde(default = "default_version")]
    pub version: String,
    /// `tracing` level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Identifier of the host panel that contains the map.
    ///
    /// Visibility events for any other panel are ignored.
    #[serde(default = "default_panel_id")]
    pub panel_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionConfig {
    /// `AUTHORITY:CODE` name of the coordinate system.
    #[serde(default = "default_projection_code")]
    pub code: String,
    /// Valid area as `[min_x, min_y, max_x, max_y]`.
    ///
    /// Kept as raw numbers so a degenerate extent surfaces as a
    /// [`ConfigurationError`] from [`EditorConfig::build`].
    #[serde(default = "default_extent")]
    pub extent: [f64; 4],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TileGridConfig {
    /// Ground units per pixel, coarse to fine.
    #[serde(default = "default_resolutions")]
    pub resolutions: Vec<f64>,
    /// Edge length of a square tile in pixels.
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewConfig {
    /// Initial view centre in projection units.
    #[serde(default = "default_center")]
    pub center: [f64; 2],
    /// Initial step on the resolution ladder (0 = coarsest).
    #[serde(default = "default_resolution_index")]
    pub resolution_index: usize,
    /// Pixel size assumed until the render surface is first measured.
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

/// Parameters for the WMS basemap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WmsConfig {
    /// Base service URL.  May already carry query parameters such as an API key.
    #[serde(default = "default_wms_url")]
    pub url: String,
    #[serde(default = "default_wms_layers")]
    pub layers: String,
    #[serde(default = "default_wms_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub tiled: bool,
    #[serde(default = "default_wms_version")]
    pub version: String,
}

/// Colours are CSS colour strings; the renderer interprets them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleConfig {
    #[serde(default = "default_selection_fill")]
    pub selection_fill: String,
    #[serde(default = "default_selection_stroke")]
    pub selection_stroke: String,
    #[serde(default = "default_selection_stroke_width")]
    pub selection_stroke_width: f32,
    #[serde(default = "default_preview_stroke")]
    pub preview_stroke: String,
    #[serde(default = "default_preview_stroke_width")]
    pub preview_stroke_width: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionConfig {
    /// Pointer travel, in pixels, below which a drag is discarded.
    #[serde(default = "default_min_drag_distance_px")]
    pub min_drag_distance_px: f64,
}

/// Validated domain objects built from an [`EditorConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapSetup {
    pub projection: Projection,
    pub grid: TileGrid,
    pub view: ViewState,
}

impl EditorConfig {
    /// Validates the raw values and builds the projection, tile grid and
    /// initial view, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] encountered: a degenerate
    /// extent, a malformed projection code, a bad resolution ladder, a zero
    /// tile size, or an initial view the ladder cannot render.
    pub fn build(&self) -> Result<MapSetup, ConfigurationError> {
        let extent = Extent::from_array(self.projection.extent)?;
        let projection = Projection::new(self.projection.code.clone(), extent)?;
        let ladder = ResolutionLadder::new(self.tile_grid.resolutions.clone())?;
        let grid = TileGrid::for_extent(projection.extent(), ladder, self.tile_grid.tile_size)?;
        let view = ViewState::new(
            Coordinate::from(self.view.center),
            self.view.resolution_index,
            PixelSize::new(self.view.width, self.view.height),
            &grid,
        )?;
        Ok(MapSetup { projection, grid, view })
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_version() -> String {
    "1.0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_panel_id() -> String {
    "section-geographic".to_string()
}
fn default_projection_code() -> String {
    "EPSG:4258".to_string()
}
fn default_extent() -> [f64; 4] {
    [-30.0, 48.0, 3.5, 64.0]
}
fn default_resolutions() -> Vec<f64> {
    vec![
        0.03779740088,
        0.02519826725,
        0.01259913362,
        0.00251982672,
        0.00062995668,
        0.000188987,
    ]
}
fn default_tile_size() -> u32 {
    250
}
fn default_center() -> [f64; 2] {
    [-0.6680291327536106, 51.33129296535873]
}
fn default_resolution_index() -> usize {
    3
}
fn default_width() -> u32 {
    400
}
fn default_height() -> u32 {
    300
}
fn default_wms_url() -> String {
    "http://osinspiremappingprod.ordnancesurvey.co.uk/geoserver/gwc/service/wms".to_string()
}
fn default_wms_layers() -> String {
    "InspireETRS89".to_string()
}
fn default_wms_format() -> String {
    "image/png".to_string()
}
fn default_true() -> bool {
    true
}
fn default_wms_version() -> String {
    "1.1.1".to_string()
}
fn default_selection_fill() -> String {
    "rgba(0, 0, 255, 0.2)".to_string()
}
fn default_selection_stroke() -> String {
    "rgba(0, 0, 255, 0.6)".to_string()
}
fn default_selection_stroke_width() -> f32 {
    3.0
}
fn default_preview_stroke() -> String {
    "rgba(0, 0, 255, 1.0)".to_string()
}
fn default_preview_stroke_width() -> f32 {
    1.0
}
fn default_min_drag_distance_px() -> f64 {
    bbox_core::domain::interaction::DEFAULT_MIN_DRAG_DISTANCE_PX
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            log_level: default_log_level(),
            panel_id: default_panel_id(),
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            code: default_projection_code(),
            extent: default_extent(),
        }
    }
}

impl Default for TileGridConfig {
    fn default() -> Self {
        Self {
            resolutions: default_resolutions(),
            tile_size: default_tile_size(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            resolution_index: default_resolution_index(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for WmsConfig {
    fn default() -> Self {
        Self {
            url: default_wms_url(),
            layers: default_wms_layers(),
            format: default_wms_format(),
            tiled: default_true(),
            version: default_wms_version(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            selection_fill: default_selection_fill(),
            selection_stroke: default_selection_stroke(),
            selection_stroke_width: default_selection_stroke_width(),
            preview_stroke: default_preview_stroke(),
            preview_stroke_width: default_preview_stroke_width(),
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            min_drag_distance_px: default_min_drag_distance_px(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bbox_core::ExtentError;

    #[test]
    fn test_default_config_builds() {
        // Arrange / Act
        let setup = EditorConfig::default().build().expect("defaults must be valid");

        // Assert
        assert_eq!(setup.projection.code(), "EPSG:4258");
        assert_eq!(setup.grid.tile_size(), 250);
        assert_eq!(setup.grid.origin(), Coordinate::new(-30.0, 48.0));
        assert_eq!(setup.view.resolution_index(), 3);
        assert_eq!(setup.view.size(), PixelSize::new(400, 300));
    }

    #[test]
    fn test_default_panel_id_is_geographic_section() {
        assert_eq!(GeneralConfig::default().panel_id, "section-geographic");
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: EditorConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(cfg, EditorConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let cfg: EditorConfig = toml::from_str(
            r#"
            [view]
            resolution_index = 1

            [wms]
            layers = "Other"
            "#,
        )
        .expect("partial config parses");

        assert_eq!(cfg.view.resolution_index, 1);
        assert_eq!(cfg.view.width, 400);
        assert_eq!(cfg.wms.layers, "Other");
        assert_eq!(cfg.wms.format, "image/png");
    }

    #[test]
    fn test_build_fails_fast_on_degenerate_extent() {
        let mut cfg = EditorConfig::default();
        cfg.projection.extent = [0.0, 48.0, 0.0, 64.0];
        assert!(matches!(
            cfg.build(),
            Err(ConfigurationError::InvalidExtent(ExtentError::Degenerate { .. }))
        ));
    }

    #[test]
    fn test_build_rejects_unordered_ladder() {
        let mut cfg = EditorConfig::default();
        cfg.tile_grid.resolutions = vec![0.01, 0.02];
        assert!(matches!(
            cfg.build(),
            Err(ConfigurationError::ResolutionsNotDecreasing { index: 1, .. })
        ));
    }

    #[test]
    fn test_build_rejects_view_step_outside_ladder() {
        let mut cfg = EditorConfig::default();
        cfg.view.resolution_index = 6;
        assert_eq!(
            cfg.build(),
            Err(ConfigurationError::ResolutionIndexOutOfRange { index: 6, len: 6 })
        );
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut cfg = EditorConfig::default();
        cfg.editor.panel_id = "map-tab".to_string();
        cfg.interaction.min_drag_distance_px = 4.0;

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: EditorConfig = toml::from_str(&text).expect("deserialize");

        assert_eq!(cfg, restored);
    }
}
