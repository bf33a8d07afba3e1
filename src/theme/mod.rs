//! Theme for the Newdle desktop client.

mod styles;

pub use styles::GLOBAL_STYLES;
