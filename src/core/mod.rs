pub mod content;
pub mod markup;
pub mod news;
pub mod particles;
pub mod schedule;
pub mod sections;

pub use particles::*;
pub use schedule::*;
pub use sections::*;
