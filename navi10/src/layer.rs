use strum::{EnumCount, EnumIter, FromRepr};

/// Layers of the navi10 keymap, ordered from bottom to top of the stack.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumCount, EnumIter, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Default layer: edit shortcuts and arrows
    Base = 0,
    /// Media controls, active while the tap dance key is held
    Media = 1,
    /// Navigation shortcuts, toggled by a single tap
    Navigation = 2,
    /// Inline editing cluster, toggled by a double tap
    InlineEdit = 3,
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer as u8
    }
}

/// Number of layers in the keymap
pub const NUM_LAYER: usize = Layer::COUNT;

/// The ordered stack of layers that the tap dance policy switches.
///
/// Layer ids are plain integers, as in the keymap. Ids out of range are ignored by implementors.
pub trait LayerStack {
    /// Activate given layer
    fn layer_on(&mut self, layer_num: u8);

    /// Deactivate given layer
    fn layer_off(&mut self, layer_num: u8);

    /// Deactivate every layer, only the default layer stays in effect
    fn layer_clear(&mut self);

    /// Whether the layer is switched on in the stack
    fn is_layer_active(&self, layer_num: u8) -> bool;

    /// Toggle given layer, returns the new state of the layer
    fn layer_toggle(&mut self, layer_num: u8) -> bool {
        if self.is_layer_active(layer_num) {
            self.layer_off(layer_num);
        } else {
            self.layer_on(layer_num);
        }
        self.is_layer_active(layer_num)
    }
}
