//! Blog content blocks
//!
//! One block type covers the overview, pagination and widgets blocks. The
//! variant only selects which [`BlockSettings`] supply defaults; resolution
//! behaves identically for all of them.

use crate::posts::Timestamp;
use crate::settings::{BlockSettings, ElementalBlogSettings};
use serde::{Deserialize, Serialize};

/// Which flavour of blog block this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockVariant {
	/// Posts with optional pagination and widgets
	Overview,
	/// Pagination controls only
	Pagination,
	/// Widget sidebar only
	Widgets,
}

impl BlockVariant {
	/// Every variant
	pub const ALL: [BlockVariant; 3] = [
		BlockVariant::Overview,
		BlockVariant::Pagination,
		BlockVariant::Widgets,
	];

	/// Type identifier used in cache keys
	pub fn block_type(self) -> &'static str {
		match self {
			BlockVariant::Overview => "BlogOverviewBlock",
			BlockVariant::Pagination => "BlogPaginationBlock",
			BlockVariant::Widgets => "BlogWidgetsBlock",
		}
	}
}

/// Author-editable field of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "message", rename_all = "snake_case")]
pub enum EditableField {
	/// The pagination toggle
	ShowPagination,
	/// The widgets toggle
	ShowWidgets,
	/// Read-only explanation of what the block renders
	InfoMessage(String),
}

/// A blog content block placed on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogBlock {
	id: u64,
	variant: BlockVariant,
	title: String,
	show_pagination: bool,
	show_widgets: bool,
	last_edited: Timestamp,
}

impl BlogBlock {
	/// Create a block with its variant's defaults applied
	pub fn new(id: u64, variant: BlockVariant, settings: &ElementalBlogSettings) -> Self {
		let mut block = Self {
			id,
			variant,
			title: String::new(),
			show_pagination: false,
			show_widgets: false,
			last_edited: Timestamp::now(),
		};
		block.populate_defaults(settings.block(variant));
		block
	}

	/// Reset title and toggles to the given defaults
	pub fn populate_defaults(&mut self, settings: &BlockSettings) {
		if settings.set_default_title {
			self.title = settings.default_title.clone();
		}
		self.show_pagination = settings.pagination_field_default;
		self.show_widgets = settings.widgets_field_default;
	}

	/// Set the modification time, e.g. when loading a stored block
	pub fn with_last_edited(mut self, last_edited: impl Into<Timestamp>) -> Self {
		self.last_edited = last_edited.into();
		self
	}

	/// Block ID
	pub fn id(&self) -> u64 {
		self.id
	}

	/// Block variant
	pub fn variant(&self) -> BlockVariant {
		self.variant
	}

	/// Display title
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Whether pagination is rendered
	pub fn show_pagination(&self) -> bool {
		self.show_pagination
	}

	/// Whether widgets are rendered
	pub fn show_widgets(&self) -> bool {
		self.show_widgets
	}

	/// Last modification time
	pub fn last_edited(&self) -> &Timestamp {
		&self.last_edited
	}

	/// Type identifier used in cache keys
	pub fn block_type(&self) -> &'static str {
		self.variant.block_type()
	}

	/// Human label for the block type
	pub fn type_label<'a>(&self, settings: &'a ElementalBlogSettings) -> &'a str {
		&settings.block(self.variant).default_title
	}

	/// Fields an author may edit, in display order
	pub fn editable_fields(&self, settings: &ElementalBlogSettings) -> Vec<EditableField> {
		let settings = settings.block(self.variant);
		let mut fields = Vec::new();
		if settings.show_pagination_field {
			fields.push(EditableField::ShowPagination);
		}
		if settings.show_widgets_field {
			fields.push(EditableField::ShowWidgets);
		}
		if settings.show_info_message_field {
			fields.push(EditableField::InfoMessage(
				settings.info_message_field_default.clone(),
			));
		}
		fields
	}

	/// Change the title
	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
		self.touch();
	}

	/// Toggle pagination
	pub fn set_show_pagination(&mut self, show: bool) {
		self.show_pagination = show;
		self.touch();
	}

	/// Toggle widgets
	pub fn set_show_widgets(&mut self, show: bool) {
		self.show_widgets = show;
		self.touch();
	}

	/// Mark the block as edited now
	pub fn touch(&mut self) {
		self.last_edited = Timestamp::now();
	}
}
