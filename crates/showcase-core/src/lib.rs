pub mod config;
pub mod error;
pub mod pages;
pub mod paging;
pub mod roster;

pub use config::{AppConfig, EasingType, PagingConfig, ScrollConfig};
pub use error::{Error, Result};
pub use pages::{PageKind, PageSet};
pub use roster::{BrowserState, Character, Roster, Transformation};
