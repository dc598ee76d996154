/// A key press or release at a matrix position, as delivered by the host's matrix scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(row: u8, col: u8) -> Self {
        Self { row, col, pressed: true }
    }

    pub const fn release(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            pressed: false,
        }
    }
}
