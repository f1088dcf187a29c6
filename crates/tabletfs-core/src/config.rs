//! Library configuration.
//!
//! Centralizes the constants that describe the device's HTTP interface.

use std::time::Duration;

// =============================================================================
// Device Configuration
// =============================================================================

/// Address the tablet exposes its web interface on when connected over USB.
pub const DEFAULT_HOST: &str = "10.11.99.1";

/// Environment variable consulted by front ends for the device host.
pub const HOST_ENV: &str = "TABLETFS_HOST";

/// Scheme prepended to hosts given without one.
pub const DEFAULT_SCHEME: &str = "http://";

// =============================================================================
// Network Configuration
// =============================================================================

/// Path segment of the listing endpoint (`<host>/documents/<location>`).
pub const DOCUMENTS_ENDPOINT: &str = "documents";

/// Per-request timeout for the HTTP transport.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Wire Discriminants
// =============================================================================

/// `Type` value of folder descriptors.
pub const FOLDER_TYPE: &str = "CollectionType";

/// `Type` value of file descriptors.
pub const FILE_TYPE: &str = "DocumentType";
