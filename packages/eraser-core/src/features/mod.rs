/// Feature slices
pub mod field_resolution;
pub mod lockset;
pub mod race_detection;
pub mod shadow_state;
