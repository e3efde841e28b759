//! Lowtide
//! =======
//! A real-time low-pass filter and volume effect with peak metering.
//!
//! The processing chain runs filter → smoothed gain → meter → hard clip
//! per channel per block. Parameter edits arrive on the control thread
//! through the shared [`ParameterStore`](lowtide_plugin_sdk::ParameterStore)
//! and are picked up at the next block boundary via its dirty flag; the
//! editor reads peak levels back through the shared [`PeakMeter`].

pub mod editor;
pub mod meter;
pub mod plugin;

pub use editor::{EditorModel, EditorTheme, MeterReadout};
pub use meter::PeakMeter;
pub use plugin::{
    parameter_layout, LowtideFactory, LowtidePlugin, PARAM_CUTOFF, PARAM_VOLUME,
};
