// Tuning constants for pointer smoothing and the lens/image transforms.

// Smoothing: new = old + (raw - old) * α, applied once per frame
pub const SMOOTHING_ALPHA: f64 = 0.2;

// Lens translation, as a half-range in percent of the lens box
pub const LENS_TRAVEL_X_PCT: f64 = 90.0; // [-90, 90]
pub const LENS_TRAVEL_Y_PCT: f64 = 45.0; // [-45, 45]

// Image scale: 1 + |norm_x * 2s - s|, driven by horizontal position only
pub const IMAGE_SCALE_X_SPAN: f64 = 0.4; // [1.0, 1.4]
pub const IMAGE_SCALE_Y_SPAN: f64 = 0.25; // [1.0, 1.25]

// Image rotation half-ranges in degrees
pub const IMAGE_ROTATE_X_DEG: f64 = 10.0;
pub const IMAGE_ROTATE_Y_DEG: f64 = 60.0;

// Fixed centering offset applied before scale/rotation
pub const IMAGE_CENTER_OFFSET_PCT: f64 = -50.0;
