//! Application configuration

use crate::gfx::{camera::ViewState, scene::SKY};

/// Window and initial view settings for [`FigureApp`](crate::app::FigureApp).
///
/// ```
/// use figurine::config::AppConfig;
///
/// let config = AppConfig::default().with_title("Figure").with_size(800, 800);
/// assert_eq!(config.width, 800);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: [f32; 4],
    pub view: ViewState,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Figurine".to_string(),
            width: 1024,
            height: 1024,
            clear_color: SKY,
            view: ViewState::default(),
        }
    }
}

impl AppConfig {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_view(mut self, view: ViewState) -> Self {
        self.view = view;
        self
    }
}
