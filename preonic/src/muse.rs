//! Phase clocks driving the music-mode sequencer.
//!
//! A [`PhaseClock`] decides which scale step is played each time the sequencer
//! counter wraps. [`MuseClock`] is the pseudo-random "muse" generator, a
//! handful of binary counters feeding a 31-bit shift register. [`StepClock`]
//! simply walks the scale.

/// Source of scale indices for the sequencer.
pub trait PhaseClock {
    /// Advance the clock by one pulse and return the index to play.
    fn next_phase(&mut self) -> usize;
}

/// Parity lookup: whether the 4-bit index has an even number of ones.
const EVEN_ONES: [bool; 16] = [
    true, false, false, true, false, true, true, false, false, true, true, false, true, false, false, true,
];

/// Shift register bars read for the played index, bar `n` is bit `n - 1`
const INTERVAL: [u8; 4] = [7, 19, 3, 28];
/// Shift register bars whose parity feeds the register back
const THEME: [u8; 4] = [8, 23, 18, 17];

/// Pseudo-random melody generator, returns indices in `0..16`.
#[derive(Clone, Debug, Default)]
pub struct MuseClock {
    timer_1bit: bool,
    timer_2bit: u8,
    timer_2bit_counter: u8,
    timer_4bit: u8,
    timer_31bit: u32,
}

impl MuseClock {
    pub const fn new() -> Self {
        Self {
            timer_1bit: false,
            timer_2bit: 0,
            timer_2bit_counter: 0,
            timer_4bit: 0,
            timer_31bit: 0,
        }
    }

    fn bar(&self, n: u8) -> bool {
        self.timer_31bit & (1 << (n - 1)) != 0
    }

    fn nibble(&self, bars: &[u8; 4]) -> usize {
        bars.iter()
            .enumerate()
            .fold(0, |acc, (i, n)| acc | ((self.bar(*n) as usize) << i))
    }
}

impl PhaseClock for MuseClock {
    fn next_phase(&mut self) -> usize {
        let top = EVEN_ONES[self.nibble(&THEME)];

        if !self.timer_1bit {
            if self.timer_2bit_counter == 0 {
                self.timer_2bit = (self.timer_2bit + 1) % 4;
            }
            self.timer_2bit_counter = (self.timer_2bit_counter + 1) % 3;
            self.timer_4bit = (self.timer_4bit + 1) % 16;
            self.timer_31bit = (self.timer_31bit << 1) | top as u32;
        }
        self.timer_1bit = !self.timer_1bit;

        self.nibble(&INTERVAL)
    }
}

/// Walks the scale one step per pulse and wraps at `len`.
#[derive(Clone, Debug)]
pub struct StepClock {
    len: usize,
    next: usize,
}

impl StepClock {
    pub const fn new(len: usize) -> Self {
        Self { len, next: 0 }
    }
}

impl PhaseClock for StepClock {
    fn next_phase(&mut self) -> usize {
        if self.len == 0 {
            return 0;
        }
        let phase = self.next;
        self.next = (self.next + 1) % self.len;
        phase
    }
}
