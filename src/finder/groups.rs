/// Connected group discovery over a binary grid
/// Scans row-major and flood-fills each unvisited ON cell with an explicit
/// work-list, so call depth stays constant no matter how large a region is.
use crate::error::Error;
use crate::models::{BinaryGrid, Coordinate, Group};

/// Find every maximal 4-connected group of ON cells
///
/// Cells are connected through shared edges only, never diagonals. Each group
/// is summarized by its size and its centroid (per-axis truncated mean of the
/// member coordinates). The result is sorted largest group first; ties rank
/// by descending centroid x, then descending centroid y.
///
/// Fails with [`Error::EmptyGrid`] when the grid has zero width or height.
/// The grid is borrowed immutably and never changed; visited state lives in a
/// scratch bitmap owned by this call.
pub fn find_connected_groups(grid: &BinaryGrid) -> Result<Vec<Group>, Error> {
    let width = grid.width();
    let height = grid.height();
    if width == 0 || height == 0 {
        return Err(Error::EmptyGrid);
    }

    let mut visited = vec![false; width * height];
    let mut groups = Vec::new();
    let mut worklist: Vec<(usize, usize)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if !grid.get(x, y) || visited[y * width + x] {
                continue;
            }

            // Seed a new group and flood it. Cells are marked visited when
            // pushed, so no cell enters the work-list twice.
            visited[y * width + x] = true;
            worklist.push((x, y));

            let mut size = 0usize;
            let mut sum_x = 0usize;
            let mut sum_y = 0usize;

            while let Some((cx, cy)) = worklist.pop() {
                size += 1;
                sum_x += cx;
                sum_y += cy;

                if cx > 0 && grid.get(cx - 1, cy) && !visited[cy * width + cx - 1] {
                    visited[cy * width + cx - 1] = true;
                    worklist.push((cx - 1, cy));
                }
                if cx + 1 < width && grid.get(cx + 1, cy) && !visited[cy * width + cx + 1] {
                    visited[cy * width + cx + 1] = true;
                    worklist.push((cx + 1, cy));
                }
                if cy > 0 && grid.get(cx, cy - 1) && !visited[(cy - 1) * width + cx] {
                    visited[(cy - 1) * width + cx] = true;
                    worklist.push((cx, cy - 1));
                }
                if cy + 1 < height && grid.get(cx, cy + 1) && !visited[(cy + 1) * width + cx] {
                    visited[(cy + 1) * width + cx] = true;
                    worklist.push((cx, cy + 1));
                }
            }

            // Truncating integer division; size is never 0 here
            let centroid = Coordinate::new(sum_x / size, sum_y / size);
            groups.push(Group::new(size, centroid));
        }
    }

    groups.sort_unstable_by(|a, b| b.cmp(a));
    Ok(groups)
}
