//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (local SQLite file, created on demand)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://xanadu.db?mode=rwc";

/// Default size of the connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// CORS
// =============================================================================

/// Methods accepted from any origin
pub const CORS_ALLOWED_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"];

/// Request headers accepted from any origin
pub const CORS_ALLOWED_HEADERS: &[&str] = &["origin", "content-type", "accept", "authorization"];

// =============================================================================
// Demo accounts
// =============================================================================

/// Accounts ensured at startup: (first name, last name, email, password)
pub const DEMO_USERS: &[(&str, &str, &str, &str)] = &[
    ("Vincent", "CAUSSE", "vincent.causse@xanadu.com", "Xanadu2025!"),
    ("Youcef", "AFANE", "youcef.afane@xanadu.com", "Xanadu2025!"),
];
