//! Exact pixel-for-pixel template matching.

use crate::raster::Image;

/// Test whether `template` matches `reference` exactly when its top-left
/// corner is anchored at (`anchor_row`, `anchor_col`).
///
/// Returns `false` without error when the template overhangs the
/// reference boundary. A match requires bit-exact equality on every
/// channel of every pixel; the first mismatch short-circuits. There is
/// no tolerance and no partial scoring.
pub fn matches_at(reference: &Image, template: &Image, anchor_row: u32, anchor_col: u32) -> bool {
    let fits_width = reference
        .width()
        .checked_sub(anchor_col)
        .is_some_and(|room| room >= template.width());
    let fits_height = reference
        .height()
        .checked_sub(anchor_row)
        .is_some_and(|room| room >= template.height());
    if !fits_width || !fits_height {
        return false;
    }

    for template_row in 0..template.height() {
        let window = &reference.row(anchor_row + template_row)
            [anchor_col as usize..(anchor_col + template.width()) as usize];
        for (template_pixel, reference_pixel) in template.row(template_row).iter().zip(window) {
            if template_pixel.r != reference_pixel.r
                || template_pixel.g != reference_pixel.g
                || template_pixel.b != reference_pixel.b
            {
                return false;
            }
        }
    }
    true
}
