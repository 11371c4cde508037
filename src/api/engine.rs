use tracing::{debug, trace};

use crate::brush::{BrushPhase, BrushState, SelectionBounds, apply_brush};
use crate::core::{StockPoint, TimeScale, ValueScale, Viewport, validate_series};
use crate::error::ChartResult;

use super::{BrushChartConfig, ChartLayout};

/// Main orchestration facade consumed by host applications.
///
/// `BrushChartEngine` owns the full series, the currently displayed
/// (filtered) series, and the brush selection, and derives the pane scales
/// on demand. Detail scales always derive from the filtered series, overview
/// scales always from the full series; both are recomputed from current
/// inputs on every access, with no hidden caching.
pub struct BrushChartEngine {
    config: BrushChartConfig,
    layout: ChartLayout,
    points: Vec<StockPoint>,
    filtered: Vec<StockPoint>,
    brush: BrushState,
}

impl BrushChartEngine {
    pub fn new(config: BrushChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            layout: ChartLayout::compute(&config),
            points: Vec::new(),
            filtered: Vec::new(),
            brush: BrushState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> BrushChartConfig {
        self.config
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    /// Replaces the full series.
    ///
    /// The series must be chronologically ordered with finite samples; it is
    /// stored as-is and never re-sorted. Any active selection is dropped and
    /// the displayed series resets to the new full series.
    pub fn set_data(&mut self, points: Vec<StockPoint>) -> ChartResult<()> {
        validate_series(&points)?;
        debug!(count = points.len(), "set series data");

        self.filtered = points.clone();
        self.points = points;
        self.brush.on_clear();
        Ok(())
    }

    /// Resizes the viewport, recomputing the pane layout.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let mut config = self.config;
        config.viewport = viewport;
        self.config = config.validate()?;
        self.layout = ChartLayout::compute(&self.config);
        Ok(())
    }

    /// Full series, in load order.
    #[must_use]
    pub fn data(&self) -> &[StockPoint] {
        &self.points
    }

    /// Currently displayed series: the full series while unselected, the
    /// brush-filtered subsequence while a selection is active.
    #[must_use]
    pub fn filtered_data(&self) -> &[StockPoint] {
        &self.filtered
    }

    #[must_use]
    pub fn brush_phase(&self) -> BrushPhase {
        self.brush.phase()
    }

    #[must_use]
    pub fn selection(&self) -> Option<SelectionBounds> {
        self.brush.selection()
    }

    /// Begins a brush drag at overview-local pixel coordinates.
    pub fn pointer_down(&mut self, pixel_x: f64, pixel_y: f64) -> ChartResult<()> {
        let (time, value) = self.overview_pixel_to_data(pixel_x, pixel_y)?;
        trace!(time, value, "brush pointer down");
        self.brush.on_pointer_down(time, value);
        Ok(())
    }

    /// Extends the brush drag to overview-local pixel coordinates.
    pub fn pointer_move(&mut self, pixel_x: f64, pixel_y: f64) -> ChartResult<()> {
        let (time, value) = self.overview_pixel_to_data(pixel_x, pixel_y)?;
        self.brush.on_pointer_move(time, value);
        Ok(())
    }

    /// Ends the brush drag, committing the selection and filtering once.
    ///
    /// A selection matching no points falls back to `Unselected` with the
    /// full series displayed.
    pub fn pointer_up(&mut self) {
        let Some(bounds) = self.brush.on_pointer_up() else {
            return;
        };

        let filtered = apply_brush(&self.points, Some(bounds));
        debug!(
            matched = filtered.len(),
            total = self.points.len(),
            "brush selection committed"
        );

        if filtered.is_empty() {
            self.clear_selection();
            return;
        }
        self.filtered = filtered;
    }

    /// Drops any selection and restores the full series, regardless of the
    /// last drawn rectangle.
    pub fn clear_selection(&mut self) {
        debug!("brush selection cleared");
        self.brush.on_clear();
        self.filtered = self.points.clone();
    }

    /// Time scale of the detail pane, fitted to the filtered series.
    pub fn detail_time_scale(&self) -> ChartResult<TimeScale> {
        TimeScale::from_series(&self.filtered)
    }

    /// Value scale of the detail pane, fitted to the filtered series with
    /// exact one-third headroom.
    pub fn detail_value_scale(&self) -> ChartResult<ValueScale> {
        ValueScale::from_series(&self.filtered, self.layout.detail_y_max)
    }

    /// Time scale of the overview pane, always fitted to the full series.
    pub fn overview_time_scale(&self) -> ChartResult<TimeScale> {
        TimeScale::from_series(&self.points)
    }

    /// Value scale of the overview pane, always fitted to the full series,
    /// with a nice-rounded upper bound.
    pub fn overview_value_scale(&self) -> ChartResult<ValueScale> {
        ValueScale::from_series_nice(&self.points, self.layout.overview_y_max)
    }

    fn overview_pixel_to_data(&self, pixel_x: f64, pixel_y: f64) -> ChartResult<(f64, f64)> {
        let time = self
            .overview_time_scale()?
            .pixel_to_time(pixel_x, self.layout.overview_x_max)?;
        let value = self.overview_value_scale()?.pixel_to_value(pixel_y)?;
        Ok((time, value))
    }
}
