// THEORY:
// The `plugin` module is the top-level adapter between a host application and the
// pure smoother. It encapsulates everything that is state rather than maths:
//
// 1.  **Configuration**: the single `window` parameter, read from and written back
//     to a host `ParamList` so that settings survive save/restore.
// 2.  **Settings rule**: the host shows a spinner for the window. Even values are
//     bumped to the next odd one as the user types. This is a convenience only;
//     `smooth` still rejects an even window on its own.
// 3.  **View updates**: instead of a process-wide host context, the caller hands in
//     a `ViewUpdater`. The "apply" action and spinner changes notify it so the host
//     can recompute and redraw.
// 4.  **Attached data**: the host attaches the outline first and runs the filter
//     later, so the filter keeps the last attached outline.

use crate::core_modules::filter_error::{FilterError, FilterResult};
use crate::core_modules::median_smoother::{CircularMedianSmoother, DEFAULT_WINDOW};
use crate::core_modules::param_list::ParamList;
use crate::core_modules::point::Point;
use std::sync::Arc;
use tracing::{debug, warn};

pub const PLUGIN_NAME: &str = "MedianFilter";
pub const WINDOW_KEY: &str = "window";
pub const HELP_TEXT: &str = "Window must be uneven. Set 1 to switch filter off.";

/// Host callback asking for the current view to be recomputed and redrawn.
pub trait ViewUpdater: Send + Sync {
    fn update_view(&self);
}

/// Range and step of the settings spinner for the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpinner {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl Default for WindowSpinner {
    fn default() -> Self {
        Self {
            min: 1,
            max: 21,
            step: 2,
        }
    }
}

impl WindowSpinner {
    /// Even values are bumped to the next odd one. Nothing else changes.
    pub fn to_odd(value: i64) -> i64 {
        if value % 2 == 0 { value + 1 } else { value }
    }

    /// The value the spinner settles on after the user enters `value`.
    pub fn normalize(&self, value: i64) -> i64 {
        Self::to_odd(value).clamp(self.min, self.max)
    }

    /// Host widget description, e.g. `spinner: 1: 21: 2: 3`.
    pub fn describe(&self, value: i64) -> String {
        format!("spinner: {}: {}: {}: {}", self.min, self.max, self.step, value)
    }
}

/// Running median filter over snake outlines, as seen by a host.
pub struct MedianSnakeFilter {
    window: i64,
    spinner: WindowSpinner,
    data: Option<Vec<Point>>,
    view_updater: Option<Arc<dyn ViewUpdater>>,
}

impl Default for MedianSnakeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MedianSnakeFilter {
    pub fn new() -> Self {
        debug!(window = DEFAULT_WINDOW, "median snake filter created");
        Self {
            window: DEFAULT_WINDOW,
            spinner: WindowSpinner::default(),
            data: None,
            view_updater: None,
        }
    }

    pub fn window(&self) -> i64 {
        self.window
    }

    pub fn spinner(&self) -> WindowSpinner {
        self.spinner
    }

    /// Attaches the outline to process. `None` keeps the previous outline.
    pub fn attach_data(&mut self, data: Option<Vec<Point>>) {
        if let Some(points) = data {
            self.data = Some(points);
        }
    }

    pub fn attach_context(&mut self, view_updater: Arc<dyn ViewUpdater>) {
        self.view_updater = Some(view_updater);
    }

    /// Smooths the attached outline with the current window.
    pub fn run_plugin(&self) -> FilterResult<Vec<Point>> {
        let points = self.data.as_deref().ok_or(FilterError::NoData)?;
        debug!(window = self.window, points = points.len(), "running median filter");
        CircularMedianSmoother::new(self.window).smooth(points)
    }

    /// Overrides the defaults with a host configuration.
    ///
    /// An even saved window is bumped to the next odd one. The value is not clamped
    /// to the spinner range: a negative or oversized window is kept and reported by
    /// `run_plugin`.
    pub fn set_plugin_config(&mut self, params: &ParamList) -> FilterResult<()> {
        debug!(?params, "setting plugin configuration");
        let value = params.get_int_value(WINDOW_KEY)?;
        self.window = WindowSpinner::to_odd(value);
        Ok(())
    }

    pub fn plugin_config(&self) -> ParamList {
        let mut params = ParamList::new();
        params.put("name", PLUGIN_NAME);
        params.put(WINDOW_KEY, self.window.to_string());
        params
    }

    /// Widget definitions the host builds the settings window from.
    pub fn ui_definition(&self) -> ParamList {
        let mut ui = ParamList::new();
        ui.put("name", PLUGIN_NAME);
        ui.put(WINDOW_KEY, self.spinner.describe(self.window));
        ui.put("help", HELP_TEXT);
        ui
    }

    /// Spinner change. Returns the value the spinner settles on.
    pub fn on_window_changed(&mut self, value: i64, window_visible: bool) -> i64 {
        self.window = self.spinner.normalize(value);
        if self.window != value {
            debug!(requested = value, window = self.window, "spinner adjusted");
        }
        if window_visible {
            self.notify_view();
        }
        self.window
    }

    /// The "apply" button.
    pub fn apply(&self) {
        self.notify_view();
    }

    fn notify_view(&self) {
        match &self.view_updater {
            Some(updater) => updater.update_view(),
            None => warn!("no view updater attached, view not refreshed"),
        }
    }

    pub fn about(&self) -> &'static str {
        "Running median filter over outline"
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
