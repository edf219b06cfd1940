//! Configuration constants for the relay.

/// Filename prefix for persisted command entries.
pub const ENTRY_PREFIX: &str = "command_";

/// File extension for persisted command entries.
pub const ENTRY_EXTENSION: &str = "json";

/// chrono format string for entry timestamps (second resolution).
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Default store directory when none is configured.
pub const DEFAULT_STORE_DIR: &str = "commands";

/// Shape tag used when parsing yields nothing usable.
pub const UNKNOWN_SHAPE_TAG: &str = "unknown";

// Construction defaults, applied by the dispatcher when a parameter key is
// absent from a command. Defaults are a construction-domain concern, so the
// parser never fills them in.

/// Default center X/Y coordinate.
pub const DEFAULT_CENTER: f64 = 0.0;

/// Default circle radius.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// Default rectangle width.
pub const DEFAULT_WIDTH: f64 = 10.0;

/// Default rectangle height.
pub const DEFAULT_HEIGHT: f64 = 5.0;

/// Default ellipse major radius.
pub const DEFAULT_MAJOR_RADIUS: f64 = 10.0;

/// Default ellipse minor radius.
pub const DEFAULT_MINOR_RADIUS: f64 = 5.0;
