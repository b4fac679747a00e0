mod arena;
mod handle;
mod node;
mod raw_osrb_tree;
mod size;

pub use node::Color;

pub(crate) use handle::Handle;
pub(crate) use raw_osrb_tree::RawOSRBTree;
