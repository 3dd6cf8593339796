// Gesture and zoom tuning defaults behind `GestureConfig`. Call sites that
// need different tuning override fields on the config instead.

// Zoom bounds (scale factors, 1.0 = fitted)
pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 4.0;
pub const CARD_MAX_SCALE: f32 = 2.5;

// Multiplicative step per wheel notch or zoom button press
pub const ZOOM_STEP: f32 = 1.4;

// Zoom-out settles back to min scale below min * tolerance
pub const RECENTER_TOLERANCE: f32 = 1.1;

// Fraction of movement kept past the pan boundary (rubber band)
pub const DRAG_RESISTANCE: f32 = 0.5;

// Damping applied to the pinch distance ratio to reduce jitter
pub const PINCH_SENSITIVITY: f32 = 0.5;
// Pinches that start closer than this (px) are ignored
pub const PINCH_MIN_DISTANCE: f32 = 10.0;

// Swipe classification
pub const SWIPE_MIN_DISTANCE: f32 = 50.0; // px
pub const CARD_SWIPE_MIN_DISTANCE: f32 = 40.0; // px
pub const SWIPE_MAX_DURATION_MS: f64 = 500.0;

// Double-tap detection
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;
pub const DOUBLE_TAP_SLOP: f32 = 30.0; // px between the two taps

// Offset spring (drag release)
pub const SPRING_OMEGA: f32 = 18.0; // natural frequency, rad/s
pub const SPRING_DAMPING_RATIO: f32 = 1.0; // 1 = critically damped
pub const SPRING_MAX_DT_SEC: f32 = 1.0 / 30.0;
pub const SPRING_SETTLE_DISTANCE: f32 = 0.5; // px
pub const SPRING_SETTLE_SPEED: f32 = 5.0; // px/s
