//! Template context for rendering a block

use crate::error::ElementalResult;
use crate::pagination::PaginationSummary;
use crate::posts::BlogPost;
use crate::widgets::WidgetArea;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Serializable snapshot of a resolved block.
///
/// Built by [`BlockResolver::template_context`](crate::resolver::BlockResolver::template_context).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockTemplateContext {
	/// Block type identifier
	pub block_type: String,

	/// Display title
	pub title: String,

	/// Pagination toggle
	pub show_pagination: bool,

	/// Widgets toggle
	pub show_widgets: bool,

	/// Partial cache key
	pub cache_key: String,

	/// Posts to render: the current page when paginated, otherwise all of them
	pub posts: Vec<BlogPost>,

	/// Pagination state, when shown and available
	pub pagination: Option<PaginationSummary>,

	/// Sidebar, when shown and available
	pub sidebar: Option<WidgetArea>,
}

impl BlockTemplateContext {
	/// Convert to JSON for template engines
	pub fn to_json(&self) -> ElementalResult<JsonValue> {
		Ok(serde_json::to_value(self)?)
	}
}
