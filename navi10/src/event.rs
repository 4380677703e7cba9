/// A key press or release at a matrix position, reported by the matrix scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}
