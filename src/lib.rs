pub mod article;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod fetch;
pub mod formatting;
pub mod grabber;
pub mod logging;
pub mod paths;
pub mod title;

pub use article::Article;
pub use config::GrabberConfig;
pub use error::{GrabError, Result};
pub use grabber::TextGrabber;
