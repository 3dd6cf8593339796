//! Zoom / pan / pinch / swipe state machine for one media viewer.
//!
//! The controller owns the [`ViewportState`] of a single mounted viewer.
//! Shells feed it raw input and read back the state to render; navigation
//! and dismissal come back as [`GestureIntent`]s for the shell to act on.

use crate::config::GestureConfig;
use crate::constants::PINCH_MIN_DISTANCE;
use crate::geometry::{unresist_axis, Geometry, PanBounds};
use crate::gesture::{pinch_distance, pinch_scale, GestureMode, GestureSession, Tap, TouchPoint};
use crate::media::{wrap_index, MediaKind, NavDirection};
use crate::spring::OffsetSpring;
use crate::viewport::{ViewportPhase, ViewportState};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureIntent {
    Navigate(NavDirection),
    NavigateTo(usize),
    Dismiss,
}

pub struct MediaGestureController {
    config: GestureConfig,
    kinds: Vec<MediaKind>,
    state: ViewportState,
    // Offset before resistance; what the finger/mouse has actually moved.
    raw_offset: Vec2,
    session: Option<GestureSession>,
    last_tap: Option<Tap>,
    spring: Option<OffsetSpring>,
}

impl MediaGestureController {
    pub fn new(config: GestureConfig, kinds: Vec<MediaKind>) -> Self {
        let state = ViewportState::new(config.min_scale);
        Self {
            config,
            kinds,
            state,
            raw_offset: Vec2::ZERO,
            session: None,
            last_tap: None,
            spring: None,
        }
    }

    // ---------------- Queries ----------------
    #[inline]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
    #[inline]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }
    #[inline]
    pub fn scale(&self) -> f32 {
        self.state.scale
    }
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.state.offset
    }
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }
    #[inline]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }
    #[inline]
    pub fn item_count(&self) -> usize {
        self.kinds.len()
    }
    #[inline]
    pub fn phase(&self) -> ViewportPhase {
        self.state.phase(self.config.min_scale)
    }
    /// A touch interaction is in progress.
    #[inline]
    pub fn is_gesturing(&self) -> bool {
        self.session.is_some()
    }
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    pub fn active_kind(&self) -> Option<MediaKind> {
        self.kinds.get(self.state.active_index).copied()
    }

    pub fn is_zoomable(&self) -> bool {
        self.active_kind()
            .map(|k| k.is_zoomable(self.config.zoom_videos))
            .unwrap_or(false)
    }

    /// Zoom level for display, e.g. `150` for 1.5×.
    pub fn zoom_percent(&self) -> u32 {
        (self.state.scale * 100.0).round().max(0.0) as u32
    }

    // ---------------- Media / navigation ----------------
    /// Replaces the media sequence and returns to the first item.
    pub fn set_media(&mut self, kinds: Vec<MediaKind>) {
        self.kinds = kinds;
        self.set_active(0);
    }

    /// Normalizes `target` with wrap-around and makes it active. Single-item
    /// and empty collections are left untouched.
    pub fn request_navigate(&mut self, target: isize) -> usize {
        let count = self.kinds.len();
        if count <= 1 {
            return self.state.active_index;
        }
        let index = wrap_index(target, count);
        self.set_active(index);
        log::debug!("[gesture] navigate -> {}/{}", index + 1, count);
        index
    }

    pub fn navigate(&mut self, direction: NavDirection) -> usize {
        self.request_navigate(self.state.active_index as isize + direction.step())
    }

    /// Applies a navigation intent; returns the new index, or `None` for
    /// intents the shell handles itself (dismissal).
    pub fn apply_intent(&mut self, intent: GestureIntent) -> Option<usize> {
        match intent {
            GestureIntent::Navigate(direction) => Some(self.navigate(direction)),
            GestureIntent::NavigateTo(index) => Some(self.request_navigate(index as isize)),
            GestureIntent::Dismiss => None,
        }
    }

    /// Drops all gesture/zoom state; the active index is kept.
    pub fn reset(&mut self) {
        self.state.reset(self.config.min_scale);
        self.raw_offset = Vec2::ZERO;
        self.session = None;
        self.last_tap = None;
        self.spring = None;
    }

    fn set_active(&mut self, index: usize) {
        self.reset();
        self.state.active_index = index;
    }

    // ---------------- Zoom ----------------
    pub fn on_wheel(&mut self, delta_y: f64) {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return;
        }
        if delta_y < 0.0 {
            self.zoom_in();
        } else {
            self.zoom_out();
        }
    }

    pub fn zoom_in(&mut self) {
        if !self.is_zoomable() {
            return;
        }
        let next = self.state.scale * self.config.zoom_step;
        self.state.scale = self.config.clamp_scale(next);
    }

    pub fn zoom_out(&mut self) {
        if !self.is_zoomable() {
            return;
        }
        let next = self.state.scale / self.config.zoom_step;
        self.state.scale = self.config.clamp_scale(next);
        self.settle_scale();
    }

    pub fn zoom_reset(&mut self) {
        self.spring = None;
        self.state.reset(self.config.min_scale);
        self.raw_offset = Vec2::ZERO;
        if let Some(session) = self.session.as_mut() {
            session.mode = GestureMode::Settling;
        }
        log::debug!("[gesture] zoom reset");
    }

    // Zoomed -> Idle once the scale is within tolerance of the minimum.
    fn settle_scale(&mut self) {
        if self.state.scale <= self.config.settle_threshold() {
            self.state.scale = self.config.min_scale;
            self.recenter();
        }
    }

    fn recenter(&mut self) {
        self.spring = None;
        self.state.offset = Vec2::ZERO;
        self.raw_offset = Vec2::ZERO;
    }

    // ---------------- Drag ----------------
    /// Begins a mouse/finger drag. Only a zoomed viewport can be dragged.
    pub fn drag_start<G: Geometry + ?Sized>(&mut self, geometry: &G) -> bool {
        if self.phase() != ViewportPhase::Zoomed {
            return false;
        }
        self.spring = None;
        self.state.is_dragging = true;
        // Resume from wherever a spring may have left the offset.
        self.raw_offset = match PanBounds::measure(geometry, self.state.scale) {
            PanBounds::Unconstrained => self.state.offset,
            PanBounds::Limit(limit) => {
                let r = self.config.drag_resistance;
                Vec2::new(
                    unresist_axis(self.state.offset.x, limit.x, r),
                    unresist_axis(self.state.offset.y, limit.y, r),
                )
            }
        };
        true
    }

    pub fn drag_move<G: Geometry + ?Sized>(&mut self, delta: Vec2, geometry: &G) {
        if !self.state.is_dragging || self.phase() != ViewportPhase::Zoomed {
            return;
        }
        self.raw_offset += delta;
        let bounds = PanBounds::measure(geometry, self.state.scale);
        self.state.offset = bounds.resist(self.raw_offset, self.config.drag_resistance);
    }

    /// Ends a drag; springs back if released outside the boundary.
    pub fn drag_end<G: Geometry + ?Sized>(&mut self, geometry: &G) -> bool {
        if !self.state.is_dragging {
            return false;
        }
        self.state.is_dragging = false;
        self.settle_offset(geometry)
    }

    /// Starts a spring toward the nearest in-bounds offset if needed.
    /// Returns whether an animation is now running.
    pub fn settle_offset<G: Geometry + ?Sized>(&mut self, geometry: &G) -> bool {
        if self.phase() == ViewportPhase::Idle {
            self.recenter();
            return false;
        }
        let bounds = PanBounds::measure(geometry, self.state.scale);
        let target = bounds.clamp(self.state.offset);
        if target == self.state.offset {
            self.raw_offset = target;
            return self.spring.is_some();
        }
        self.spring = Some(OffsetSpring::new(
            self.state.offset,
            target,
            self.config.spring_omega,
            self.config.spring_damping,
        ));
        true
    }

    /// Advances the offset animation by one frame. Returns whether another
    /// frame is needed.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        let Some(spring) = self.spring.as_mut() else {
            return false;
        };
        let done = spring.step(dt_sec);
        self.state.offset = spring.position;
        self.raw_offset = spring.position;
        if done {
            self.spring = None;
        }
        !done
    }

    pub fn cancel_animation(&mut self) {
        self.spring = None;
    }

    // ---------------- Touch ----------------
    /// `points` are the contacts that just went down.
    pub fn touch_start<G: Geometry + ?Sized>(
        &mut self,
        points: &[TouchPoint],
        now_ms: f64,
        geometry: &G,
    ) {
        let Some(first) = points.first().copied() else {
            return;
        };
        let session = self
            .session
            .get_or_insert_with(|| GestureSession::new(GestureMode::Settling));
        session.track(points, now_ms);

        if session.contacts.len() >= 2 {
            // A third finger joining an active pinch does not restart it.
            if matches!(session.mode, GestureMode::Pinch { .. }) {
                return;
            }
            let pinch = session.pinch_pair().and_then(|pair| {
                let distance = pinch_distance(&session.points(pair)?)?;
                Some((pair, distance))
            });
            match pinch {
                Some((pair, distance)) => self.begin_pinch(pair, distance),
                None => self.set_mode(GestureMode::Settling),
            }
            return;
        }

        let tap = Tap {
            position: first.position,
            time_ms: now_ms,
        };
        let double_tap = self.last_tap.is_some_and(|prev| {
            prev.pairs_with(&tap, self.config.double_tap_window_ms, self.config.double_tap_slop)
        });
        if double_tap {
            self.last_tap = None;
            self.zoom_reset();
            return;
        }
        self.last_tap = Some(tap);

        let mode = match self.phase() {
            ViewportPhase::Idle => GestureMode::Swipe,
            ViewportPhase::Zoomed => {
                self.drag_start(geometry);
                GestureMode::Pan {
                    last: first.position,
                }
            }
        };
        self.set_mode(mode);
    }

    fn begin_pinch(&mut self, pair: [i32; 2], distance: f32) {
        self.last_tap = None;
        self.state.is_dragging = false;
        let mode = if self.is_zoomable() && distance >= PINCH_MIN_DISTANCE {
            self.spring = None;
            log::debug!("[gesture] pinch start d0={:.1} s0={:.2}", distance, self.state.scale);
            GestureMode::Pinch {
                pair,
                initial_distance: distance,
                initial_scale: self.state.scale,
            }
        } else {
            GestureMode::Settling
        };
        self.set_mode(mode);
    }

    fn set_mode(&mut self, mode: GestureMode) {
        if let Some(session) = self.session.as_mut() {
            session.mode = mode;
        }
    }

    /// `points` are the contacts that moved.
    pub fn touch_move<G: Geometry + ?Sized>(&mut self, points: &[TouchPoint], geometry: &G) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.update(points);
        let mode = session.mode;

        match mode {
            GestureMode::Pinch {
                pair,
                initial_distance,
                initial_scale,
            } => {
                let Some(distance) = session.points(pair).and_then(|p| pinch_distance(&p)) else {
                    return;
                };
                let scale = pinch_scale(
                    initial_scale,
                    initial_distance,
                    distance,
                    self.config.pinch_sensitivity,
                );
                self.state.scale = self.config.clamp_scale(scale);
                if self.state.scale <= self.config.min_scale {
                    self.recenter();
                }
            }
            GestureMode::Pan { last } => {
                let Some(current) = session.contacts.values().next().map(|c| c.current) else {
                    return;
                };
                session.mode = GestureMode::Pan { last: current };
                self.drag_move(current - last, geometry);
            }
            GestureMode::Swipe | GestureMode::Settling => {}
        }
    }

    /// `points` are the contacts that lifted. Returns a navigation intent
    /// when the interaction completed as a swipe.
    pub fn touch_end<G: Geometry + ?Sized>(
        &mut self,
        points: &[TouchPoint],
        now_ms: f64,
        geometry: &G,
    ) -> Option<GestureIntent> {
        let session = self.session.as_mut()?;
        let lifted = session.release(points);
        let remaining = session.contacts.len();
        let mode = session.mode;
        let pair_broken = match mode {
            GestureMode::Pinch { pair, .. } => pair.iter().any(|id| !session.contacts.contains_key(id)),
            _ => false,
        };

        let mut intent = None;
        match mode {
            GestureMode::Pinch { .. } if pair_broken => {
                self.set_mode(GestureMode::Settling);
                self.settle_scale();
                self.settle_offset(geometry);
            }
            GestureMode::Pan { .. } if remaining == 0 => {
                self.drag_end(geometry);
            }
            GestureMode::Swipe if remaining == 0 => {
                intent = lifted
                    .first()
                    .and_then(|c| self.classify_swipe(c.current - c.start, now_ms - c.start_ms));
            }
            _ => {}
        }
        if remaining == 0 {
            self.session = None;
        }
        intent
    }

    /// Abandons the interaction (e.g. the browser took over the touch).
    pub fn touch_cancel<G: Geometry + ?Sized>(&mut self, geometry: &G) {
        let Some(session) = self.session.take() else {
            return;
        };
        match session.mode {
            GestureMode::Pinch { .. } => {
                self.settle_scale();
                self.settle_offset(geometry);
            }
            GestureMode::Pan { .. } => {
                self.drag_end(geometry);
            }
            GestureMode::Swipe | GestureMode::Settling => {}
        }
    }

    fn classify_swipe(&self, delta: Vec2, duration_ms: f64) -> Option<GestureIntent> {
        if self.phase() != ViewportPhase::Idle || self.kinds.len() <= 1 {
            return None;
        }
        let horizontal = delta.x.abs();
        if horizontal > self.config.swipe_min_distance
            && horizontal > delta.y.abs()
            && duration_ms < self.config.swipe_max_duration_ms
        {
            // Finger travelling left pulls the next item in.
            let direction = if delta.x < 0.0 {
                NavDirection::Next
            } else {
                NavDirection::Previous
            };
            log::debug!("[gesture] swipe {:?} dx={:.0} t={:.0}ms", direction, delta.x, duration_ms);
            return Some(GestureIntent::Navigate(direction));
        }
        None
    }

    // ---------------- Keyboard ----------------
    pub fn key_down(&mut self, key: &str) -> Option<GestureIntent> {
        let several = self.kinds.len() > 1;
        match key {
            "Escape" | "Esc" => Some(GestureIntent::Dismiss),
            "ArrowLeft" if several => Some(GestureIntent::Navigate(NavDirection::Previous)),
            "ArrowRight" if several => Some(GestureIntent::Navigate(NavDirection::Next)),
            "+" | "=" => {
                self.zoom_in();
                None
            }
            "-" | "_" => {
                self.zoom_out();
                None
            }
            "0" => {
                self.zoom_reset();
                None
            }
            _ => None,
        }
    }
}
