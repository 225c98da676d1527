pub mod controller;
pub mod controls;
pub mod settings;
pub mod status;

pub use controller::{ViewController, step_view};
pub use controls::{InputSnapshot, PressLatch};
pub use settings::{NavigationSettings, NavigationSettingsError};
pub use status::{NavigationWarning, ViewUpdateReport};
