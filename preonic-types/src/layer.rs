use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

/// Number of layers in the Preonic keymap
pub const NUM_LAYER: usize = 8;

/// Layers of the keymap, ordered by priority.
///
/// When several layers are active, the one with the highest discriminant wins.
/// `Qwerty`, `Colemak` and `Dvorak` are base layouts that are selected as the
/// default layer rather than activated.
#[repr(u8)]
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    #[default]
    Qwerty = 0,
    Colemak = 1,
    Dvorak = 2,
    Numeric = 3,
    Symbol = 4,
    Gui = 5,
    Nav = 6,
    Adjust = 7,
}

impl Layer {
    /// Position of the layer in the layer table
    pub const fn index(self) -> usize {
        self as usize
    }
}
