//! Positional slice of an active collision snapshot.
//!
//! [`CollisionSlicer`] splits its input into a contiguous `sliced` run and the
//! order-preserved `remaining` elements. A negative `start_index` counts from
//! the end (`-1` is the last element). The slice is clamped so it never reads
//! past the end of the input.
//!
//! Results are written into buffers owned by the slicer and reused across
//! calls; copy them if they must outlive the next call.

use std::ops::Range;

use bevy_ecs::prelude::Component;

use crate::components::collisionevent::CollisionEvent;

#[derive(Component, Clone, Debug)]
pub struct CollisionSlicer {
    pub enabled: bool,
    pub start_index: isize,
    pub length: usize,
    sliced: Vec<CollisionEvent>,
    remaining: Vec<CollisionEvent>,
}

impl CollisionSlicer {
    pub fn new(start_index: isize, length: usize) -> Self {
        Self {
            enabled: true,
            start_index,
            length,
            sliced: Vec::new(),
            remaining: Vec::new(),
        }
    }

    /// Index range of the slice within an input of `count` elements.
    pub fn bounds(&self, count: usize) -> Range<usize> {
        let count_signed = count as isize;
        let start = if self.start_index < 0 {
            count_signed + self.start_index
        } else {
            self.start_index
        };
        let start = start.clamp(0, count_signed) as usize;
        let length = self.length.min(count - start);
        start..start + length
    }

    /// Split `input` into `(sliced, remaining)`.
    ///
    /// Returns `None` when disabled. The input is never modified.
    pub fn slice(
        &mut self,
        input: &[CollisionEvent],
    ) -> Option<(&[CollisionEvent], &[CollisionEvent])> {
        if !self.enabled {
            return None;
        }
        let range = self.bounds(input.len());
        self.sliced.clear();
        self.remaining.clear();
        self.sliced.extend_from_slice(&input[range.clone()]);
        self.remaining.extend_from_slice(&input[..range.start]);
        self.remaining.extend_from_slice(&input[range.end..]);
        Some((&self.sliced, &self.remaining))
    }
}
