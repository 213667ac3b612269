//! The canonical variant: movement and symbol layers on the space-adjacent
//! thumb keys, function layer on the far bottom-left, holding movement and
//! symbol together reaches the function layer.

use super::{COLS, ROWS};
use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::{a, k, layer, mo, shifted};

pub const BASE: u8 = 0;
pub const MOVE: u8 = 1;
pub const SYMBOL: u8 = 2;
pub const FUNCTION: u8 = 3;

pub const NUM_LAYERS: usize = 4;

pub const fn behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        tri_layer: Some([MOVE, SYMBOL, FUNCTION]),
    }
}

#[rustfmt::skip]
pub const fn keymap() -> [[[KeyAction; COLS]; ROWS]; NUM_LAYERS] {
    [
        layer!([
            [k!(Escape), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Minus)],
            [k!(Tab), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(Equal)],
            [mo!(3), k!(LCtrl), k!(LAlt), k!(LGui), mo!(2), k!(Backspace), k!(Enter), k!(Space), mo!(1), k!(RightBracket), k!(Backslash), k!(Grave)]
        ]),
        layer!([
            [k!(Escape), a!(Transparent), k!(Home), k!(Up), k!(End), a!(Transparent), a!(Transparent), k!(Home), k!(Up), k!(End), a!(Transparent), k!(Escape)],
            [k!(Delete), a!(Transparent), k!(Left), k!(Down), k!(Right), a!(Transparent), a!(Transparent), k!(Left), k!(Down), k!(Right), a!(Transparent), k!(Delete)],
            [a!(Transparent), a!(Transparent), a!(Transparent), k!(PageUp), k!(PageDown), a!(Transparent), a!(Transparent), k!(PageDown), k!(PageUp), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        layer!([
            [a!(Transparent), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), a!(Transparent)],
            [a!(Transparent), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(LeftBracket), k!(RightBracket), k!(Backslash), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        layer!([
            [k!(F12), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11)],
            [a!(Transparent), k!(MediaPlayPause), k!(MediaPrevTrack), k!(MediaNextTrack), k!(Pause), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), k!(ScrollLock), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)]
        ]),
    ]
}
