pub mod align;
pub mod console;
pub mod palette;
pub mod progress;
pub mod table;
pub mod theme;

pub use align::{align_text, align_text_token, Alignment};
pub use console::{Console, LineSource, StdinLines, WriteOptions};
pub use progress::ProgressBar;
pub use table::Table;
pub use theme::{SharedTheme, Theme, DEFAULT_THEME};
