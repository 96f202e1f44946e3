//! Physics layer names accepted in config files.

use avian2d::prelude::LayerMask;

use crate::runner::GameLayer;

/// Map a `GameLayer` variant name to the layer.
pub fn parse_layer(name: &str) -> Option<GameLayer> {
    match name {
        "Default" => Some(GameLayer::Default),
        "Ground" => Some(GameLayer::Ground),
        "Runner" => Some(GameLayer::Runner),
        _ => None,
    }
}

/// Combine layer names into one mask. `None` when the list is empty or any
/// name is unknown.
pub fn parse_layer_mask(names: &[String]) -> Option<LayerMask> {
    if names.is_empty() {
        return None;
    }
    names.iter().try_fold(LayerMask::NONE, |mask, name| {
        parse_layer(name).map(|layer| mask | LayerMask::from(layer))
    })
}
