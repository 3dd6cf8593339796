//! Per-interaction touch bookkeeping.

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

/// A contact point as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub position: Vec2,
}

impl TouchPoint {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
        }
    }
}

pub type TouchPoints = SmallVec<[TouchPoint; 4]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub start: Vec2,
    pub current: Vec2,
    pub start_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureMode {
    /// Two fingers; scale follows the distance ratio between the contacts
    /// in `pair`. Further fingers are tracked but never measured.
    Pinch {
        pair: [i32; 2],
        initial_distance: f32,
        initial_scale: f32,
    },
    /// One finger on a zoomed item; moves the viewport.
    Pan { last: Vec2 },
    /// One finger on an idle item; may become a navigation swipe.
    Swipe,
    /// Leftover fingers after a pinch; ignored until all lift.
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    pub position: Vec2,
    pub time_ms: f64,
}

impl Tap {
    #[inline]
    pub fn pairs_with(&self, other: &Tap, window_ms: f64, slop: f32) -> bool {
        let dt = other.time_ms - self.time_ms;
        dt >= 0.0 && dt <= window_ms && self.position.distance(other.position) <= slop
    }
}

/// Created on the first touch-start, dropped when the last contact lifts.
#[derive(Clone, Debug)]
pub struct GestureSession {
    pub contacts: FnvHashMap<i32, Contact>,
    pub mode: GestureMode,
}

impl GestureSession {
    pub fn new(mode: GestureMode) -> Self {
        Self {
            contacts: FnvHashMap::default(),
            mode,
        }
    }

    pub fn track(&mut self, points: &[TouchPoint], now_ms: f64) {
        for p in points {
            self.contacts.entry(p.id).or_insert(Contact {
                start: p.position,
                current: p.position,
                start_ms: now_ms,
            });
        }
    }

    pub fn update(&mut self, points: &[TouchPoint]) {
        for p in points {
            if let Some(c) = self.contacts.get_mut(&p.id) {
                c.current = p.position;
            }
        }
    }

    /// Removes lifted contacts, returning their records.
    pub fn release(&mut self, points: &[TouchPoint]) -> SmallVec<[Contact; 2]> {
        let mut lifted = SmallVec::new();
        for p in points {
            if let Some(mut c) = self.contacts.remove(&p.id) {
                c.current = p.position;
                lifted.push(c);
            }
        }
        lifted
    }

    /// The two earliest contacts still down, oldest first.
    pub fn pinch_pair(&self) -> Option<[i32; 2]> {
        let mut order: SmallVec<[(f64, i32); 4]> = self
            .contacts
            .iter()
            .map(|(id, c)| (c.start_ms, *id))
            .collect();
        order.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        match order.as_slice() {
            [a, b, ..] => Some([a.1, b.1]),
            _ => None,
        }
    }

    /// Current positions of the given contacts, if all are still down.
    pub fn points(&self, ids: [i32; 2]) -> Option<[TouchPoint; 2]> {
        let point = |id: i32| {
            self.contacts.get(&id).map(|c| TouchPoint {
                id,
                position: c.current,
            })
        };
        Some([point(ids[0])?, point(ids[1])?])
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Distance between the first two points, if there are two.
#[inline]
pub fn pinch_distance(points: &[TouchPoint]) -> Option<f32> {
    match points {
        [a, b, ..] => Some(a.position.distance(b.position)),
        _ => None,
    }
}

/// Damped pinch scale: `initial * (1 + (ratio - 1) * sensitivity)`.
#[inline]
pub fn pinch_scale(initial_scale: f32, initial_distance: f32, distance: f32, sensitivity: f32) -> f32 {
    let ratio = distance / initial_distance;
    initial_scale * (1.0 + (ratio - 1.0) * sensitivity)
}
