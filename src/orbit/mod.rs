mod archetype;
mod classifier;

pub use archetype::{OrbitArchetype, OrbitClass};
pub use classifier::classify;
