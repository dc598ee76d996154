use crate::config::SequencerConfig;
use crate::host::Audio;
use crate::muse::{MuseClock, PhaseClock};
use crate::music::note_frequency;

/// Which sequencer parameter an encoder turn changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdjustTarget {
    /// Shift every note up or down by a semitone
    Offset,
    /// Lengthen or shorten the period between notes
    Tempo,
}

/// Music-mode step sequencer.
///
/// Every `tempo` ticks a note is computed as `offset + scale[phase]`, with the
/// phase taken from the [`PhaseClock`]. Only note changes reach the audio
/// driver: the previous note is stopped and the new one started.
pub struct Sequencer<C: PhaseClock = MuseClock> {
    enabled: bool,
    counter: u16,
    offset: u8,
    tempo: u16,
    velocity: u8,
    last_note: Option<u8>,
    scale: &'static [u8],
    clock: C,
}

impl<C: PhaseClock> Sequencer<C> {
    pub fn new(config: SequencerConfig, clock: C) -> Self {
        let tempo = if config.tempo == 0 {
            warn!("Sequencer tempo 0 is invalid, using 1");
            1
        } else {
            config.tempo
        };
        Self {
            enabled: false,
            counter: 0,
            offset: config.offset,
            tempo,
            velocity: config.velocity,
            last_note: None,
            scale: config.scale,
            clock,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn counter(&self) -> u16 {
        self.counter
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn tempo(&self) -> u16 {
        self.tempo
    }

    /// The note which is currently sounding, if any
    pub fn last_note(&self) -> Option<u8> {
        self.last_note
    }

    /// Enable or disable the sequencer.
    ///
    /// Disabling silences the sequencer right away, see [`Sequencer::tick`].
    pub fn set_enabled<A: Audio>(&mut self, enabled: bool, audio: &mut A) {
        if self.enabled != enabled {
            info!("Sequencer enabled: {}", enabled);
        }
        self.enabled = enabled;
        if !enabled {
            self.silence(audio);
        }
    }

    /// Advance the sequencer by one scan tick.
    ///
    /// A disabled sequencer that is not idle stops all notes and rewinds its
    /// counter, exactly once.
    pub fn tick<A: Audio>(&mut self, audio: &mut A) {
        if !self.enabled {
            self.silence(audio);
            return;
        }

        if self.counter == 0 {
            let note = self.next_note();
            if self.last_note != Some(note) {
                if let Some(last) = self.last_note {
                    audio.stop_note(note_frequency(last));
                }
                debug!("Sequencer note {}", note);
                audio.play_note(note_frequency(note), self.velocity);
                self.last_note = Some(note);
            }
        }
        self.counter = (self.counter + 1) % self.tempo;
    }

    /// Step the offset or the tempo by one.
    ///
    /// The offset wraps around. The tempo stays within `1..=u16::MAX`, so it
    /// can always be used as the counter's modulus.
    pub fn adjust(&mut self, target: AdjustTarget, clockwise: bool) {
        match target {
            AdjustTarget::Offset => {
                self.offset = if clockwise {
                    self.offset.wrapping_add(1)
                } else {
                    self.offset.wrapping_sub(1)
                };
            }
            AdjustTarget::Tempo => {
                let tempo = if clockwise {
                    self.tempo.checked_add(1)
                } else {
                    self.tempo.checked_sub(1).filter(|t| *t > 0)
                };
                match tempo {
                    Some(tempo) => self.tempo = tempo,
                    None => warn!("Sequencer tempo is already at its limit: {}", self.tempo),
                }
            }
        }
    }

    fn next_note(&mut self) -> u8 {
        let step = match self.scale.len() {
            0 => 0,
            len => self.scale[self.clock.next_phase() % len],
        };
        self.offset.wrapping_add(step)
    }

    fn silence<A: Audio>(&mut self, audio: &mut A) {
        if self.counter != 0 || self.last_note.is_some() {
            audio.stop_all_notes();
            self.counter = 0;
            self.last_note = None;
        }
    }
}
