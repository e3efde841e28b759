use lowtide::editor::{EditorModel, EditorTheme};
use lowtide::plugin::{LowtidePlugin, PARAM_CUTOFF, PARAM_VOLUME};
use lowtide_engine::{AudioBuffer, AudioProcessor, BufferConfig, ChannelLayout};

#[test]
fn theme_is_per_editor_state() {
    let plugin = LowtidePlugin::new();
    let mut a = EditorModel::new(plugin.shared_store(), plugin.shared_meter());
    let mut b = EditorModel::new(plugin.shared_store(), plugin.shared_meter());

    assert_eq!(a.theme(), EditorTheme::Dark);
    a.set_theme(EditorTheme::Midnight);
    b.set_theme(EditorTheme::Light);
    assert_eq!(a.theme(), EditorTheme::Midnight);
    assert_eq!(b.theme(), EditorTheme::Light);
    assert_eq!(EditorTheme::ALL.len(), 4);
    assert_eq!(EditorTheme::Grey.label(), "Grey");
}

#[test]
fn slider_edits_reach_the_audio_thread() {
    let mut plugin = LowtidePlugin::new();
    let editor = EditorModel::new(plugin.shared_store(), plugin.shared_meter());

    plugin
        .prepare(&BufferConfig::new(44_100.0, 512, ChannelLayout::Mono))
        .expect("prepare");

    editor.set_parameter(PARAM_CUTOFF, 3_000.0).unwrap();
    assert_eq!(editor.parameter(PARAM_CUTOFF), Some(3_000.0));
    // Out-of-range edits clamp like any other control-rate write.
    editor.set_parameter(PARAM_VOLUME, 500.0).unwrap();
    assert_eq!(editor.parameter(PARAM_VOLUME), Some(40.0));
    assert!(editor.set_parameter("BOGUS", 1.0).is_err());

    let mut buffer = AudioBuffer::new(1, 512);
    buffer.as_mut_slice()[0].fill(0.001);
    plugin.process(&mut buffer).expect("process");

    let readout = editor.meter_readout();
    assert!(readout.block_peak > 0.0);
    assert!(readout.global_peak >= readout.block_peak);
    assert!(readout.global_peak_db() <= 0.0);
    assert!(readout.block_peak_db() >= -120.0);
}
