//! Engine modules: the part that turns a validated brief into a pack.
//!
//! `selection` draws hooks and calls to action from a framework's pools;
//! `pack` orchestrates the catalog, token map and section synthesizers into
//! the final `CreativePack`.

pub mod pack;
pub mod selection;

pub use pack::{CreativePack, ScriptSection, generate_from_raw, generate_pack};
pub use selection::{select_call_to_action, select_hook};
