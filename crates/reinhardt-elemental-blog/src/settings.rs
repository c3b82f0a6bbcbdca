//! Block settings
//!
//! Each block variant carries its own defaults. Settings files only override
//! the keys they name, so an empty file yields the built-in configuration.
//!
//! ```toml
//! [overview]
//! default_title = "News"
//! show_widgets_field = true
//!
//! [pagination]
//! page_length = 20
//! ```

use crate::block::BlockVariant;
use crate::error::{ElementalError, ElementalResult};
use crate::pagination::DEFAULT_PAGE_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of one block variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSettings {
	/// Title given to new blocks and shown as the block type label
	pub default_title: String,

	/// Whether new blocks get `default_title` as their title
	pub set_default_title: bool,

	/// Whether authors may toggle pagination
	pub show_pagination_field: bool,

	/// Initial pagination toggle
	pub pagination_field_default: bool,

	/// Whether authors may toggle widgets
	pub show_widgets_field: bool,

	/// Initial widgets toggle
	pub widgets_field_default: bool,

	/// Whether authors see the info message
	pub show_info_message_field: bool,

	/// Info message text
	pub info_message_field_default: String,

	/// Page length for lists the block paginates itself
	pub page_length: usize,
}

impl BlockSettings {
	/// Built-in settings for a variant
	pub fn for_variant(variant: BlockVariant) -> Self {
		match variant {
			BlockVariant::Overview => Self {
				default_title: "Blog Overview".to_string(),
				set_default_title: true,
				show_pagination_field: true,
				pagination_field_default: true,
				show_widgets_field: false,
				widgets_field_default: false,
				show_info_message_field: true,
				info_message_field_default:
					"This block will automatically display Blog Posts and pagination".to_string(),
				page_length: DEFAULT_PAGE_LENGTH,
			},
			BlockVariant::Pagination => Self {
				default_title: "Blog Pagination".to_string(),
				set_default_title: true,
				show_pagination_field: false,
				pagination_field_default: true,
				show_widgets_field: false,
				widgets_field_default: false,
				show_info_message_field: true,
				info_message_field_default:
					"This block will automatically display pagination for Blog Posts".to_string(),
				page_length: DEFAULT_PAGE_LENGTH,
			},
			BlockVariant::Widgets => Self {
				default_title: "Blog Widgets".to_string(),
				set_default_title: true,
				show_pagination_field: false,
				pagination_field_default: false,
				show_widgets_field: false,
				widgets_field_default: true,
				show_info_message_field: true,
				info_message_field_default: "This block will automatically display Blog Widgets"
					.to_string(),
				page_length: DEFAULT_PAGE_LENGTH,
			},
		}
	}

	/// Check the settings are usable
	pub fn validate(&self) -> ElementalResult<()> {
		if self.set_default_title && self.default_title.trim().is_empty() {
			return Err(ElementalError::InvalidSettings(
				"default_title cannot be empty when set_default_title is enabled".to_string(),
			));
		}
		Ok(())
	}

	fn apply(&mut self, overrides: BlockSettingsOverrides) {
		let BlockSettingsOverrides {
			default_title,
			set_default_title,
			show_pagination_field,
			pagination_field_default,
			show_widgets_field,
			widgets_field_default,
			show_info_message_field,
			info_message_field_default,
			page_length,
		} = overrides;

		if let Some(value) = default_title {
			self.default_title = value;
		}
		if let Some(value) = set_default_title {
			self.set_default_title = value;
		}
		if let Some(value) = show_pagination_field {
			self.show_pagination_field = value;
		}
		if let Some(value) = pagination_field_default {
			self.pagination_field_default = value;
		}
		if let Some(value) = show_widgets_field {
			self.show_widgets_field = value;
		}
		if let Some(value) = widgets_field_default {
			self.widgets_field_default = value;
		}
		if let Some(value) = show_info_message_field {
			self.show_info_message_field = value;
		}
		if let Some(value) = info_message_field_default {
			self.info_message_field_default = value;
		}
		if let Some(value) = page_length {
			self.page_length = value;
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlockSettingsOverrides {
	default_title: Option<String>,
	set_default_title: Option<bool>,
	show_pagination_field: Option<bool>,
	pagination_field_default: Option<bool>,
	show_widgets_field: Option<bool>,
	widgets_field_default: Option<bool>,
	show_info_message_field: Option<bool>,
	info_message_field_default: Option<String>,
	page_length: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
	#[serde(default)]
	overview: BlockSettingsOverrides,
	#[serde(default)]
	pagination: BlockSettingsOverrides,
	#[serde(default)]
	widgets: BlockSettingsOverrides,
}

/// Settings for every block variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementalBlogSettings {
	/// Overview block settings
	pub overview: BlockSettings,

	/// Pagination block settings
	pub pagination: BlockSettings,

	/// Widgets block settings
	pub widgets: BlockSettings,
}

impl ElementalBlogSettings {
	/// Parse settings from TOML, layering them over the built-in defaults
	pub fn from_toml_str(source: &str) -> ElementalResult<Self> {
		let file: SettingsFile = toml::from_str(source)?;

		let mut settings = Self::default();
		settings.overview.apply(file.overview);
		settings.pagination.apply(file.pagination);
		settings.widgets.apply(file.widgets);
		settings.validate()?;

		tracing::debug!("loaded elemental blog settings");
		Ok(settings)
	}

	/// Read and parse a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> ElementalResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		Self::from_toml_str(&source).inspect_err(|e| {
			tracing::warn!("invalid settings file {}: {}", path.display(), e);
		})
	}

	/// Settings for a variant
	pub fn block(&self, variant: BlockVariant) -> &BlockSettings {
		match variant {
			BlockVariant::Overview => &self.overview,
			BlockVariant::Pagination => &self.pagination,
			BlockVariant::Widgets => &self.widgets,
		}
	}

	/// Mutable settings for a variant
	pub fn block_mut(&mut self, variant: BlockVariant) -> &mut BlockSettings {
		match variant {
			BlockVariant::Overview => &mut self.overview,
			BlockVariant::Pagination => &mut self.pagination,
			BlockVariant::Widgets => &mut self.widgets,
		}
	}

	/// Validate every variant
	pub fn validate(&self) -> ElementalResult<()> {
		for variant in BlockVariant::ALL {
			self.block(variant).validate()?;
		}
		Ok(())
	}
}

impl Default for ElementalBlogSettings {
	fn default() -> Self {
		Self {
			overview: BlockSettings::for_variant(BlockVariant::Overview),
			pagination: BlockSettings::for_variant(BlockVariant::Pagination),
			widgets: BlockSettings::for_variant(BlockVariant::Widgets),
		}
	}
}
