pub mod page_controller;

pub use page_controller::{PageController, PageControllerArgs, PageControllerMessage, PageSnapshot};
