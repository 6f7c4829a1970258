use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    pub const TOP: ScrollPosition = ScrollPosition { x: 0.0, y: 0.0 };

    /// Script run in the page to move the viewport here.
    pub fn script(&self) -> String {
        format!("window.scrollTo({}, {});", self.x, self.y)
    }
}

/// What happens to the viewport once a navigation completes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    #[default]
    Top,
    Preserve,
}

impl ScrollBehavior {
    /// Position to scroll to after a successful navigation, `None` keeps the viewport where it is.
    pub fn target(&self) -> Option<ScrollPosition> {
        match self {
            ScrollBehavior::Top => Some(ScrollPosition::TOP),
            ScrollBehavior::Preserve => None,
        }
    }
}
