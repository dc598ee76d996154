use preonic_types::layer::Layer;

use crate::music::SCALE;

/// The config struct for the Preonic keymap.
///
/// `Default` carries the values the keymap ships with: qwerty as default
/// layer, numeric + symbol raising adjust, and the music-mode sequencer
/// starting at tempo 50 and offset 70.
#[derive(Clone, Copy, Debug)]
pub struct KeyboardConfig {
    /// Default layer used until the host restores a persisted one
    pub default_layer: Layer,
    pub behavior_config: BehaviorConfig,
    pub sequencer_config: SequencerConfig,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            default_layer: Layer::Qwerty,
            behavior_config: BehaviorConfig {
                tri_layer: Some(TriLayer::new(Layer::Numeric, Layer::Symbol, Layer::Adjust)),
            },
            sequencer_config: SequencerConfig::default(),
        }
    }
}

/// Config for configurable layer behavior
#[derive(Clone, Copy, Debug, Default)]
pub struct BehaviorConfig {
    pub tri_layer: Option<TriLayer>,
}

/// Tri layer: `adjust` is active exactly when both `lower` and `upper` are active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriLayer {
    pub lower: Layer,
    pub upper: Layer,
    pub adjust: Layer,
}

impl TriLayer {
    pub const fn new(lower: Layer, upper: Layer, adjust: Layer) -> Self {
        Self { lower, upper, adjust }
    }

    /// Whether changing `layer` requires recomputing the adjust layer
    pub fn is_trigger(&self, layer: Layer) -> bool {
        layer == self.lower || layer == self.upper
    }
}

/// Config for the music-mode step sequencer
#[derive(Clone, Copy, Debug)]
pub struct SequencerConfig {
    /// Number of ticks between two notes, must be at least 1
    pub tempo: u16,
    /// Midi note added to every scale step
    pub offset: u8,
    /// Velocity passed to the audio driver
    pub velocity: u8,
    /// Semitone steps picked by the phase clock
    pub scale: &'static [u8],
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            tempo: 50,
            offset: 70,
            velocity: 0xF,
            scale: &SCALE,
        }
    }
}
