mod navbar;
pub use navbar::Shell;

mod numberinput;
pub use numberinput::NumberInput;

mod pie;
pub use pie::PiePanel;

mod piechart;
pub use piechart::{Legend, PieChartView};

mod progress;
pub use progress::ProgressPanel;

mod progressbar;
pub use progressbar::{ProgressBar, ProgressRing};
