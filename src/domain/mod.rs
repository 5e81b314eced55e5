// Derived analytics domain
pub mod analytics;

// Core trading domain
pub mod trading;

// Domain-specific error types
pub mod errors;
