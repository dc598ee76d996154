//! Pitch helpers for music mode.

/// Five octaves of the major scale, in semitones above the root.
pub const SCALE: [u8; 35] = [
    0, 2, 4, 5, 7, 9, 11, //
    12, 14, 16, 17, 19, 21, 23, //
    24, 26, 28, 29, 31, 33, 35, //
    36, 38, 40, 41, 43, 45, 47, //
    48, 50, 52, 53, 55, 57, 59,
];

/// Concert pitch of midi note 69 (A4), in Hz
pub const PITCH_STANDARD_A: f32 = 440.0;

const A4: i32 = 69;

/// `2^(n/12)` for `n` in `0..12`
const SEMITONE_RATIO: [f32; 12] = [
    1.0,
    1.059_463_1,
    1.122_462,
    1.189_207_1,
    1.259_921,
    1.334_839_8,
    1.414_213_6,
    1.498_307,
    1.587_401,
    1.681_792_8,
    1.781_797_4,
    1.887_748_6,
];

/// Frequency of a midi note in equal temperament, `440 * 2^((note - 69) / 12)`.
pub fn note_frequency(note: u8) -> f32 {
    let semitones = note as i32 - A4;
    let octave = semitones.div_euclid(12);
    let step = semitones.rem_euclid(12) as usize;
    let freq = PITCH_STANDARD_A * SEMITONE_RATIO[step];
    if octave >= 0 {
        freq * (1u32 << octave) as f32
    } else {
        freq / (1u32 << -octave) as f32
    }
}
