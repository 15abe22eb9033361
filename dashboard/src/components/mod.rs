//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod sidebar;

pub use header::Header;
pub use sidebar::Sidebar;
