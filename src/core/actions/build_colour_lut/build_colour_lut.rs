use crate::core::data::colour::Colour;
use crate::core::data::colour_lut::{ColourLut, ColourLutError, MappingMode};
use crate::core::data::gradient::Gradient;
use log::debug;

fn stop_index(position: f64, size: usize) -> usize {
    ((position * (size - 1) as f64).round() as usize).min(size - 1)
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = (1.0 - t) * f64::from(from) + t * f64::from(to);
    value.round().clamp(0.0, 255.0) as u8
}

fn lerp_colour(from: Colour, to: Colour, t: f64) -> Colour {
    Colour {
        r: lerp_channel(from.r, to.r, t),
        g: lerp_channel(from.g, to.g, t),
        b: lerp_channel(from.b, to.b, t),
    }
}

/// Expands a sparse gradient into a `size`-entry lookup table.
///
/// Fewer than two stops give a solid fill (black for an empty gradient).
/// Otherwise stops are sorted by position, each is pinned to the nearest
/// index, and neighbouring stops are joined by a linear ramp. Where two stops
/// land on the same index the later one wins.
pub fn build_colour_lut(gradient: &Gradient, size: usize) -> Result<ColourLut, ColourLutError> {
    if size == 0 {
        return Err(ColourLutError::ZeroSize);
    }

    if gradient.len() < 2 {
        let colour = gradient
            .stops()
            .first()
            .map_or(Colour::BLACK, |stop| stop.colour());
        debug!("gradient has {} stop(s), filling LUT with {}", gradient.len(), colour);

        return ColourLut::new(vec![colour; size], MappingMode::SolidFill);
    }

    let anchors: Vec<(usize, Colour)> = gradient
        .sorted_stops()
        .iter()
        .map(|stop| (stop_index(stop.position(), size), stop.colour()))
        .collect();

    let mut entries = vec![Colour::BLACK; size];

    for pair in anchors.windows(2) {
        let (x0, c0) = pair[0];
        let (x1, c1) = pair[1];

        for (x, entry) in entries.iter_mut().enumerate().take(x1 + 1).skip(x0) {
            let t = if x1 == x0 {
                0.0
            } else {
                (x - x0) as f64 / (x1 - x0) as f64
            };
            *entry = lerp_colour(c0, c1, t);
        }
    }

    let (first_index, first_colour) = anchors[0];
    let (last_index, last_colour) = anchors[anchors.len() - 1];

    entries[..first_index].fill(first_colour);
    entries[last_index..].fill(last_colour);

    ColourLut::new(entries, MappingMode::Interpolated)
}
