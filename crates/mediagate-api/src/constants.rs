//! API constants

/// API version segment used in every versioned route
pub const API_VERSION: &str = "v0";

/// API base path prefix including version
pub const API_PREFIX: &str = "/api/v0";

/// Multipart field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

/// Allowance on top of the largest file limit for multipart framing.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;
