use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Items shown in the carousel, in display order
    #[serde(default = "default_books")]
    pub books: Vec<BookEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            carousel: CarouselConfig::default(),
            form: FormConfig::default(),
            ui: UiConfig::default(),
            books: default_books(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Axis along which the item stack is offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Number of items visible at once
    #[serde(default = "default_visible_count")]
    pub visible_count: usize,
    /// Extent of one item including the gap to the next one
    #[serde(default = "default_item_stride")]
    pub item_stride: i32,
    /// Axis the offset is applied on
    #[serde(default)]
    pub axis: Axis,
    /// Auto-scroll period in milliseconds
    #[serde(default = "default_auto_scroll_period")]
    pub auto_scroll_period_ms: u64,
    /// Minimum viewport width for auto-scroll
    #[serde(default = "default_desktop_min_width")]
    pub desktop_min_width: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_count: default_visible_count(),
            item_stride: default_item_stride(),
            axis: Axis::default(),
            auto_scroll_period_ms: default_auto_scroll_period(),
            desktop_min_width: default_desktop_min_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// How long the confirmation message stays visible, in milliseconds
    #[serde(default = "default_message_hide")]
    pub message_hide_ms: u64,
    #[serde(default = "default_success_message")]
    pub success_message: String,
    /// Hex color, e.g. "#2B5F6F"
    #[serde(default = "default_success_color")]
    pub success_color: String,
    #[serde(default = "default_error_message")]
    pub error_message: String,
    #[serde(default = "default_error_color")]
    pub error_color: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            message_hide_ms: default_message_hide(),
            success_message: default_success_message(),
            success_color: default_success_color(),
            error_message: default_error_message(),
            error_color: default_error_color(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Approximate width of one terminal cell, used to turn columns into viewport units
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            cell_width_px: default_cell_width(),
        }
    }
}

/// A single carousel item
/// Can be specified as a plain string (the title) or as a table with a tagline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookEntry {
    pub title: String,
    pub tagline: String,
}

impl BookEntry {
    pub fn new(title: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: tagline.into(),
        }
    }
}

// Accept either a string or a table
impl<'de> Deserialize<'de> for BookEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct BookEntryVisitor;

        impl<'de> Visitor<'de> for BookEntryVisitor {
            type Value = BookEntry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (book title) or a map with 'title' and optional 'tagline'")
            }

            fn visit_str<E>(self, value: &str) -> Result<BookEntry, E>
            where
                E: de::Error,
            {
                Ok(BookEntry::new(value, ""))
            }

            fn visit_map<M>(self, mut map: M) -> Result<BookEntry, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut title: Option<String> = None;
                let mut tagline: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "title" => {
                            title = Some(map.next_value()?);
                        }
                        "tagline" => {
                            tagline = Some(map.next_value()?);
                        }
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                let title = title.ok_or_else(|| de::Error::missing_field("title"))?;
                Ok(BookEntry {
                    title,
                    tagline: tagline.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(BookEntryVisitor)
    }
}

fn default_books() -> Vec<BookEntry> {
    vec![
        BookEntry::new("Ducky Hug and the Rainy Day", "Puddles are better with a friend"),
        BookEntry::new("Ducky Hug Goes to School", "A first day full of brave little steps"),
        BookEntry::new("The Big Pond Adventure", "Paddling past the reeds to somewhere new"),
        BookEntry::new("Ducky Hug Learns to Share", "One slice of bread, two happy ducks"),
        BookEntry::new("A Hug for Every Friend", "Counting the ways to say you matter"),
        BookEntry::new("Ducky Hug and the Night Sky", "Wishing on stars before bedtime"),
        BookEntry::new("The Lost Little Feather", "A search that ends in a surprise"),
    ]
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("duckyhug")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_visible_count() -> usize {
    3
}

fn default_item_stride() -> i32 {
    330 // card height + gap
}

fn default_auto_scroll_period() -> u64 {
    5000
}

fn default_desktop_min_width() -> u32 {
    1280
}

fn default_message_hide() -> u64 {
    5000
}

fn default_success_message() -> String {
    "🎉 Welcome to the Story Circle! Check your inbox for a special welcome message.".to_string()
}

fn default_success_color() -> String {
    "#2B5F6F".to_string()
}

fn default_error_message() -> String {
    "❌ Oops! Something went wrong. Please try again.".to_string()
}

fn default_error_color() -> String {
    "#D32F2F".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_cell_width() -> u32 {
    8 // 160 columns ~ 1280 units
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        tracing::info!(path = %path.display(), "Configuration written");
        Ok(())
    }

    /// Serialize configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/duckyhug/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("duckyhug")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("duckyhug.log")
    }

    fn validate(&self) -> crate::Result<()> {
        if self.carousel.visible_count == 0 {
            return Err(crate::Error::Config(
                "carousel.visible_count must be at least 1".to_string(),
            ));
        }
        if self.carousel.auto_scroll_period_ms == 0 {
            return Err(crate::Error::Config(
                "carousel.auto_scroll_period_ms must be greater than 0".to_string(),
            ));
        }
        if self.carousel.item_stride <= 0 {
            return Err(crate::Error::Config(
                "carousel.item_stride must be greater than 0".to_string(),
            ));
        }
        // The offset of the last position has to fit the surface's i32 units
        let max_index = self.books.len().saturating_sub(self.carousel.visible_count);
        let furthest = max_index as i64 * i64::from(self.carousel.item_stride);
        if furthest > i64::from(i32::MAX) {
            return Err(crate::Error::Config(format!(
                "carousel.item_stride {} is too large for {} books",
                self.carousel.item_stride,
                self.books.len()
            )));
        }
        if self.ui.cell_width_px == 0 {
            return Err(crate::Error::Config(
                "ui.cell_width_px must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.carousel.visible_count, 3);
        assert_eq!(config.carousel.item_stride, 330);
        assert_eq!(config.carousel.axis, Axis::Vertical);
        assert_eq!(config.carousel.auto_scroll_period_ms, 5000);
        assert_eq!(config.carousel.desktop_min_width, 1280);
        assert_eq!(config.form.message_hide_ms, 5000);
        assert_eq!(config.form.success_color, "#2B5F6F");
        assert_eq!(config.books.len(), 7);
    }

    #[test]
    fn test_partial_sections_fall_back() {
        let config = AppConfig::parse(
            r#"
            [carousel]
            item_stride = 120
            axis = "horizontal"

            [general]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.item_stride, 120);
        assert_eq!(config.carousel.axis, Axis::Horizontal);
        assert_eq!(config.carousel.visible_count, 3);
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.form.error_color, "#D32F2F");
    }

    #[test]
    fn test_books_accept_string_or_table() {
        let config = AppConfig::parse(
            r#"
            books = [
                "Plain Title",
                { title = "With Tagline", tagline = "quack", cover = "ignored.png" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.books,
            vec![
                BookEntry::new("Plain Title", ""),
                BookEntry::new("With Tagline", "quack"),
            ]
        );
    }

    #[test]
    fn test_book_without_title_is_rejected() {
        let err = AppConfig::parse(r#"books = [{ tagline = "no title" }]"#).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_zero_visible_count_is_rejected() {
        let err = AppConfig::parse("[carousel]\nvisible_count = 0").unwrap_err();
        assert!(err.to_string().contains("visible_count"));
    }

    #[test]
    fn test_non_positive_stride_is_rejected() {
        for stride in ["0", "-330"] {
            let err = AppConfig::parse(&format!("[carousel]\nitem_stride = {stride}")).unwrap_err();
            assert!(err.to_string().contains("item_stride"));
        }
    }

    #[test]
    fn test_stride_overflowing_last_offset_is_rejected() {
        // 7 books, 3 visible: the last offset is 4 strides
        let err = AppConfig::parse("[carousel]\nitem_stride = 2000000000").unwrap_err();
        assert!(err.to_string().contains("too large"));

        let fits = AppConfig::parse(&format!("[carousel]\nitem_stride = {}", i32::MAX / 4));
        assert!(fits.is_ok());
    }

    #[test]
    fn test_zero_cell_width_is_rejected() {
        let err = AppConfig::parse("[ui]\ncell_width_px = 0").unwrap_err();
        assert!(err.to_string().contains("cell_width_px"));
    }

    #[test]
    fn test_save_to_writes_loadable_file() {
        let dir = std::env::temp_dir().join(format!("duckyhug-save-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.carousel.item_stride = 120;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.carousel.item_stride, 120);
        assert_eq!(loaded.books, config.books);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("duckyhug-config-that-does-not-exist.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.books.len(), 7);
    }

    #[test]
    fn test_toml_roundtrip_keeps_books() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::parse(&text).unwrap();
        assert_eq!(parsed.books, config.books);
    }
}
