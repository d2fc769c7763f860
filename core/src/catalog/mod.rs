pub mod facts;
pub mod linker;
pub mod playable;
pub mod shapes;

pub use facts::{FactIndex, FactsRecord};
pub use linker::{LinkReport, LinkTier, best_match, link};
pub use playable::{Catalog, PlayableEntry, format_population};
pub use shapes::{RawShape, ShapeEntry, build_shape_catalog};
