//! The step-admissibility rule and the pathers that apply it to a map.

use hillwalk_core::{Elevation, HeightMap, Point};

use crate::traits::Pather;

/// Search configuration: how far a single step may climb.
///
/// A move from elevation `from` to elevation `to` is legal when
/// `to <= from + max_step_up`. Downward moves are always legal, however steep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClimbRule {
    pub max_step_up: u32,
}

impl Default for ClimbRule {
    fn default() -> Self {
        Self { max_step_up: 1 }
    }
}

impl ClimbRule {
    /// Create a rule allowing climbs of at most `max_step_up` per step.
    pub const fn new(max_step_up: u32) -> Self {
        Self { max_step_up }
    }

    /// Whether one step from elevation `from` to elevation `to` is legal.
    #[inline]
    pub fn can_step(self, from: Elevation, to: Elevation) -> bool {
        to.value() <= from.value().saturating_add(self.max_step_up)
    }
}

/// Forward pather: moves to in-bounds cardinal neighbours the rule allows
/// climbing to.
#[derive(Debug, Clone, Copy)]
pub struct Climber<'a> {
    map: &'a HeightMap,
    rule: ClimbRule,
}

impl<'a> Climber<'a> {
    pub fn new(map: &'a HeightMap, rule: ClimbRule) -> Self {
        Self { map, rule }
    }
}

impl Pather for Climber<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(here) = self.map.at(p) else {
            return;
        };
        for n in p.neighbors_4() {
            if let Some(there) = self.map.at(n) {
                if self.rule.can_step(here, there) {
                    buf.push(n);
                }
            }
        }
    }
}

/// Reversed pather: yields the neighbours from which `p` can be entered.
///
/// A search with a `Descender` seeded at a target measures distances *to* that
/// target, which answers "closest of many starts" with a single pass.
#[derive(Debug, Clone, Copy)]
pub struct Descender<'a> {
    map: &'a HeightMap,
    rule: ClimbRule,
}

impl<'a> Descender<'a> {
    pub fn new(map: &'a HeightMap, rule: ClimbRule) -> Self {
        Self { map, rule }
    }
}

impl Pather for Descender<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(here) = self.map.at(p) else {
            return;
        };
        for n in p.neighbors_4() {
            if let Some(there) = self.map.at(n) {
                if self.rule.can_step(there, here) {
                    buf.push(n);
                }
            }
        }
    }
}
