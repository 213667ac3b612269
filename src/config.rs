//! Per-keymap behavior configuration.

/// Config for configurable layer behavior.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BehaviorConfig {
    /// `Some([a, b, c])` enables layer `c` exactly while layers `a` and `b`
    /// are both active.
    pub tri_layer: Option<[u8; 3]>,
}
