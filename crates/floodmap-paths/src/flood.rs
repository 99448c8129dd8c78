use floodmap_core::Grid;

use crate::FloodError;
use crate::field::{DistanceField, Limit};
use crate::neighbors::DIRECTIONS;

/// Role of a cell in the input of a [`flood`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seed {
    /// A distance-zero origin.
    Source,
    /// Any other cell.
    #[default]
    Open,
}

impl Seed {
    /// Whether this cell is a source.
    #[inline]
    pub fn is_source(self) -> bool {
        matches!(self, Seed::Source)
    }
}

/// Flood a grid from every [`Seed::Source`] at once and return the step
/// count from each cell to its nearest source.
///
/// Moves go to any of the 8 surrounding cells at cost 1. Cells marked `true`
/// in `walls` are never entered. `limit` caps how many layers are expanded;
/// 0 means unbounded (capped internally to the grid area). See
/// [`DistanceField`] for the values held by unreached cells.
///
/// The wall mask is only read: closed-set tracking happens on a private copy.
pub fn flood(
    seeds: &Grid<Seed>,
    walls: Option<&Grid<bool>>,
    limit: i32,
) -> Result<DistanceField, FloodError> {
    if seeds.is_empty() {
        return Err(FloodError::EmptyGrid);
    }
    if let Some(w) = walls {
        if !w.same_size(seeds) {
            return Err(FloodError::DimensionMismatch {
                expected: seeds.size(),
                found: w.size(),
            });
        }
    }
    let raw = Limit::from_raw(limit)?;
    let limit = raw.resolve(seeds.size());
    let saturation = raw.raw();

    let mut dist = Grid::new(seeds.width(), seeds.height(), saturation);
    let mut closed: Vec<bool> = match walls {
        Some(w) => w.as_slice().to_vec(),
        None => vec![false; seeds.len()],
    };

    // Sources are seeded together, so every one of them sits in layer 0.
    let mut sources = Vec::new();
    {
        let cells = dist.as_mut_slice();
        for (i, seed) in seeds.as_slice().iter().enumerate() {
            if seed.is_source() {
                cells[i] = 0;
                closed[i] = true;
                sources.push(i);
            }
        }
    }

    let mut open = Vec::new();
    for &si in &sources {
        expand(seeds, &mut closed, si, &mut open);
    }

    let mut counter = 1;
    let mut next = Vec::new();
    let cells = dist.as_mut_slice();
    while counter < limit && !open.is_empty() {
        log::trace!("flood layer {counter}: {} cells", open.len());
        next.clear();
        for &ci in &open {
            cells[ci] = counter;
            expand(seeds, &mut closed, ci, &mut next);
        }
        std::mem::swap(&mut open, &mut next);
        counter += 1;
    }
    // Cells discovered but not yet processed when the cap was hit.
    for &ci in &open {
        cells[ci] = counter;
    }

    log::debug!(
        "flooded {}x{} grid from {} sources: limit {limit}, {} layers, {} cut off",
        seeds.width(),
        seeds.height(),
        sources.len(),
        counter - 1,
        open.len(),
    );

    Ok(DistanceField::new(dist, limit, saturation))
}

/// Close and enqueue every in-bounds, not-yet-closed neighbour of `ci`.
fn expand(seeds: &Grid<Seed>, closed: &mut [bool], ci: usize, next: &mut Vec<usize>) {
    let cp = seeds.point(ci);
    for d in DIRECTIONS {
        let Some(ni) = seeds.index(cp + d) else {
            continue;
        };
        if closed[ni] {
            continue;
        }
        closed[ni] = true;
        next.push(ni);
    }
}
