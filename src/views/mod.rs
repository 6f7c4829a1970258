mod notfound;
pub use notfound::NotFound;

mod pie;
pub use pie::PieDemo;

mod progress;
pub use progress::ProgressDemo;
