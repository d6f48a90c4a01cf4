//! Remap a value from one range to another while maintaining its relative position.

use color_eyre::Result;

/// Remap `value` from `[in_min, in_max]` into `[out_min, out_max]`.
///
/// The result is truncated, never rounded: the bottom of the input range maps exactly to
/// `out_min` and the top can't overshoot `out_max`. The arithmetic is done in widened integers,
/// so the truncation is the exact mathematical floor.
pub fn remap(value: u32, in_min: u32, in_max: u32, out_min: u32, out_max: u32) -> Result<u32> {
    if in_max <= in_min {
        color_eyre::eyre::bail!("Can't remap from the degenerate range [{in_min}, {in_max}]");
    }
    if value < in_min || value > in_max {
        color_eyre::eyre::bail!(
            "The value {value} is outside the observed range [{in_min}, {in_max}]"
        );
    }

    let position = u64::from(value - in_min) * u64::from(out_max - out_min);
    let scaled = position / u64::from(in_max - in_min);

    Ok(u32::try_from(scaled)? + out_min)
}
