// Version information for the Gesture Inference Node

/// Semantic version number
pub const VERSION: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-05";
