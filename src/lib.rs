// THEORY:
// This file is the main entry point for the `median_snake_filter` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (a host application, a batch
// tool, or the `snake_tester` runner).
//
// The crate is layered:
// - `core_modules` holds the pure numeric machinery: the `Point` value type, the
//   circular index helper and the running median smoother itself. Nothing in
//   there logs, allocates shared state or knows about a host.
// - `plugin` is the thin adapter a host talks to. It owns the single configuration
//   parameter, the settings spinner rule and the view-updater hook.
// - `parallel_smoother` fans independent outlines out to a pool of workers.

pub mod core_modules;
pub mod parallel_smoother;
pub mod plugin;

pub use crate::core_modules::filter_error::{FilterError, FilterResult};
pub use crate::core_modules::median_smoother::smooth;
pub use crate::core_modules::param_list::ParamList;
pub use crate::core_modules::point::{Outline, Point};
