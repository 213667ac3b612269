use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// One physical key transition, as reported by the host's matrix scanner.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}
