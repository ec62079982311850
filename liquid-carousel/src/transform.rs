use crate::stretch::Stretch;
use crate::{ItemBounds, ItemTransform, TransformConfig};

pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Computes the perspective transform of one item for a given scroll offset.
///
/// The result depends only on the arguments: distance from the item center to the viewport
/// center, normalized by `viewport_width / 2 + item width`, eased with a cubic ease-out.
pub fn item_transform(
    bounds: ItemBounds,
    offset: f32,
    viewport_width: f32,
    stretch: Stretch,
    config: &TransformConfig,
) -> ItemTransform {
    let distance = bounds.center() - (offset + viewport_width / 2.0);
    let max_distance = (viewport_width / 2.0 + bounds.width).max(f32::EPSILON);
    let signed = (distance / max_distance).clamp(-1.0, 1.0);
    let normalized = signed.abs();
    let eased = ease_out_cubic(normalized);
    let focus = 1.0 - eased;

    let centered = distance.abs() < bounds.width / config.centered_ratio.max(f32::EPSILON);
    let z_index = if centered {
        config.centered_z_index
    } else {
        (config.side_z_index as f32 * (1.0 - normalized)).floor() as i32
    };

    let scale = config.min_scale + (1.0 - config.min_scale) * focus;
    let opacity = config.min_opacity + (1.0 - config.min_opacity) * focus;

    ItemTransform {
        rotate_y_deg: signed * config.max_rotation_deg * eased,
        scale: scale * stretch.uniform(),
        opacity: opacity.max(config.min_opacity),
        z_index,
        translate_z: if centered {
            config.centered_depth
        } else {
            config.side_depth
        },
        perspective: config.perspective,
        centered,
        transition: false,
    }
}
