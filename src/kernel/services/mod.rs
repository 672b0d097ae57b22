//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the editor core.
//! - `adapters`: OS specific implementations (IO).

pub mod adapters;
pub mod ports;
