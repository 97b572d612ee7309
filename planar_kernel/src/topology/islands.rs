use super::Polygon;
use crate::{
    core::traits::Real,
    error::{InconsistencyError, TopologyResult},
    shape::{Box2, EdgeShape},
};
use static_aabb2d_index::StaticAABB2DIndexBuilder;
use std::cmp::Ordering;

/// One face loop detached from its polygon.
struct Ring<T> {
    /// Position of the face in the source polygon's face iteration order.
    index: usize,
    shapes: Vec<EdgeShape<T>>,
    signed_area: T,
    bbox: Box2<T>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Split into islands, each returned polygon holding one island face plus the hole faces it
    /// covers.
    ///
    /// Faces are taken in order of descending area. The orientation of the largest face is the
    /// island orientation, every face with that orientation seeds an island and every other face is
    /// a hole. A hole goes to the first (largest) island that covers all of its shapes, taking the
    /// holes already assigned to that island into account so that holes of an island nested in
    /// another island's hole land on the right island.
    ///
    /// Fails with [InconsistencyError::OrphanHole] if some hole is covered by no island.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::math::*;
    /// # use planar_kernel::core::traits::*;
    /// # use planar_kernel::topology::Polygon;
    /// let a = [vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0), vec2(0.0, 10.0)];
    /// let hole = [vec2(2.0, 2.0), vec2(2.0, 4.0), vec2(4.0, 4.0), vec2(4.0, 2.0)];
    /// let b = [vec2(20.0, 0.0), vec2(25.0, 0.0), vec2(25.0, 5.0), vec2(20.0, 5.0)];
    /// let polygon: Polygon = Polygon::from_loops(&[&a[..], &hole[..], &b[..]]).unwrap();
    /// let islands = polygon.split_to_islands().unwrap();
    /// assert_eq!(islands.len(), 2);
    /// assert_eq!(islands[0].face_count(), 2);
    /// assert!(islands[0].area().fuzzy_eq(96.0));
    /// assert!(islands[1].area().fuzzy_eq(25.0));
    /// ```
    pub fn split_to_islands(&self) -> TopologyResult<Vec<Self>> {
        let mut rings: Vec<Ring<T>> = self
            .faces()
            .enumerate()
            .map(|(index, f)| {
                let face = self.face_ref(f);
                Ring {
                    index,
                    shapes: self.face_shapes(f),
                    signed_area: face.signed_area,
                    bbox: face.bbox,
                }
            })
            .collect();

        if rings.is_empty() {
            return Ok(Vec::new());
        }

        rings.sort_by(|a, b| {
            b.signed_area
                .abs()
                .partial_cmp(&a.signed_area.abs())
                .unwrap_or(Ordering::Equal)
        });

        let island_positive = rings[0].signed_area > T::zero();
        let (island_rings, hole_rings): (Vec<_>, Vec<_>) = rings
            .into_iter()
            .partition(|r| (r.signed_area > T::zero()) == island_positive);

        let mut islands: Vec<Self> = island_rings
            .iter()
            .map(|r| {
                let mut island = Polygon::with_options(*self.options());
                island.insert_loop(r.shapes.iter().copied());
                island
            })
            .collect();

        let island_index = {
            let mut b = StaticAABB2DIndexBuilder::new(island_rings.len());
            for r in island_rings.iter() {
                b.add(r.bbox.xmin, r.bbox.ymin, r.bbox.xmax, r.bbox.ymax);
            }
            b.build()
                .expect("failed to build spatial index of island bounds")
        };

        // rings were partitioned from the sorted order so holes are still largest first
        for hole in hole_rings {
            let mut candidates = island_index.query(
                hole.bbox.xmin,
                hole.bbox.ymin,
                hole.bbox.xmax,
                hole.bbox.ymax,
            );
            candidates.sort_unstable();

            let owner = candidates.into_iter().find(|&i| {
                island_rings[i].bbox.contains_box(&hole.bbox)
                    && hole.shapes.iter().all(|s| islands[i].contains_shape(s))
            });

            match owner {
                Some(i) => {
                    islands[i].insert_loop(hole.shapes.iter().copied());
                }
                None => {
                    log::warn!(
                        "hole ring {} ({} edges) is not covered by any of {} islands",
                        hole.index,
                        hole.shapes.len(),
                        islands.len()
                    );
                    return Err(InconsistencyError::OrphanHole {
                        hole_index: hole.index,
                    }
                    .into());
                }
            }
        }

        log::debug!(
            "split {} faces into {} islands",
            self.face_count(),
            islands.len()
        );

        Ok(islands)
    }
}
