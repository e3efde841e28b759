use std::sync::Arc;

use lowtide_dsp::linear_to_db;
use lowtide_plugin_sdk::{ParameterError, ParameterStore};

use crate::meter::PeakMeter;

/// Colour scheme selectable from the editor's view menu.
///
/// An explicit per-editor setting rather than a process-wide default, so
/// two open editors can disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorTheme {
    #[default]
    Dark,
    Midnight,
    Grey,
    Light,
}

impl EditorTheme {
    pub const ALL: [EditorTheme; 4] = [
        EditorTheme::Dark,
        EditorTheme::Midnight,
        EditorTheme::Grey,
        EditorTheme::Light,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditorTheme::Dark => "Dark",
            EditorTheme::Midnight => "Midnight",
            EditorTheme::Grey => "Grey",
            EditorTheme::Light => "Light",
        }
    }
}

/// Snapshot of the meter for one display refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeterReadout {
    pub block_peak: f32,
    pub global_peak: f32,
}

impl MeterReadout {
    pub fn global_peak_db(&self) -> f32 {
        linear_to_db(self.global_peak)
    }

    pub fn block_peak_db(&self) -> f32 {
        linear_to_db(self.block_peak)
    }
}

/// Control-thread view model behind the editor UI.
///
/// Owns the theme selection and forwards slider edits to the shared
/// parameter store; the widget toolkit on top of it is out of scope here.
pub struct EditorModel {
    store: Arc<ParameterStore>,
    meter: Arc<PeakMeter>,
    theme: EditorTheme,
}

impl EditorModel {
    pub fn new(store: Arc<ParameterStore>, meter: Arc<PeakMeter>) -> Self {
        Self {
            store,
            meter,
            theme: EditorTheme::default(),
        }
    }

    pub fn theme(&self) -> EditorTheme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: EditorTheme) {
        self.theme = theme;
    }

    /// Slider edit entry point; clamping and dirty-flagging happen in the
    /// store.
    pub fn set_parameter(&self, id: &str, value: f32) -> Result<(), ParameterError> {
        self.store.set(id, value)
    }

    /// Current value for positioning a slider.
    pub fn parameter(&self, id: &str) -> Option<f32> {
        self.store.snapshot(id)
    }

    /// Polled by the display timer.
    pub fn meter_readout(&self) -> MeterReadout {
        MeterReadout {
            block_peak: self.meter.local(),
            global_peak: self.meter.global(),
        }
    }
}
