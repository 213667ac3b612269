//! The numpad variant: the movement layer is replaced by a number layer with
//! a keypad block under the right hand, and the function layer gains a key
//! that switches the default layer back to base.

use super::{COLS, ROWS};
use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::{a, df, k, layer, mo, shifted};

pub const BASE: u8 = 0;
pub const NUMBER: u8 = 1;
pub const SYMBOL: u8 = 2;
pub const FUNCTION: u8 = 3;

pub const NUM_LAYERS: usize = 4;

pub const fn behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        tri_layer: Some([NUMBER, SYMBOL, FUNCTION]),
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
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(KpSlash), k!(Kp7), k!(Kp8), k!(Kp9), k!(KpMinus), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(KpAsterisk), k!(Kp4), k!(Kp5), k!(Kp6), k!(KpPlus), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(NumLock), k!(Kp1), k!(Kp2), k!(Kp3), k!(KpEnter), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Kp0), k!(KpDot), a!(Transparent)]
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
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), df!(0)]
        ]),
    ]
}
