/*!
Collision root module.

Axis-aligned body boxes moving against the solid tiles of a [`TileGrid`](crate::tilemap::TileGrid).
The code is split for clarity:

- types:    shared data types (Aabb, AxisMove)
- settings: tolerances and probe distances
- sweep:    per-axis sweep that stops at the first solid tile edge
- ground:   standing probe below a body
*/

pub mod ground;
pub mod settings;
pub mod sweep;
pub mod types;

pub use ground::is_supported;
pub use sweep::{Axis, sweep_axis};
pub use types::{Aabb, AxisMove};
