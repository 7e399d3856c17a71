pub mod gradient_background;
pub mod nav_bar;
pub mod countdown_banner;
pub mod tag_picker;
pub mod step_progress;

pub use gradient_background::GradientBackground;
pub use nav_bar::NavBar;
pub use countdown_banner::CountdownBanner;
pub use tag_picker::{TagOption, TagPicker};
pub use step_progress::StepProgress;
