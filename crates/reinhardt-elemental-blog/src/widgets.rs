//! Widgets and widget areas
//!
//! A widget area is owned by exactly one page; child pages may render their
//! parent's area by reference when they inherit the sidebar.

use serde::{Deserialize, Serialize};

/// A sidebar widget record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
	/// Widget ID
	pub id: u64,

	/// Widget type identifier (e.g. "ArchiveWidget")
	pub kind: String,

	/// Display title
	pub title: String,

	/// Position within the area
	#[serde(default)]
	pub sort: u32,

	/// Disabled widgets stay in the area but are not rendered
	#[serde(default = "default_enabled")]
	pub enabled: bool,
}

fn default_enabled() -> bool {
	true
}

impl Widget {
	/// Create an enabled widget
	pub fn new(id: u64, kind: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id,
			kind: kind.into(),
			title: title.into(),
			sort: 0,
			enabled: true,
		}
	}

	/// Set the sort position
	pub fn with_sort(mut self, sort: u32) -> Self {
		self.sort = sort;
		self
	}

	/// Disable the widget
	pub fn disabled(mut self) -> Self {
		self.enabled = false;
		self
	}
}

/// Ordered collection of widgets belonging to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetArea {
	/// Area ID
	pub id: u64,

	widgets: Vec<Widget>,
}

impl WidgetArea {
	/// Create an empty area
	pub fn new(id: u64) -> Self {
		Self {
			id,
			widgets: Vec::new(),
		}
	}

	/// Add a widget, builder style
	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widgets.push(widget);
		self
	}

	/// Add a widget
	pub fn push(&mut self, widget: Widget) {
		self.widgets.push(widget);
	}

	/// All widgets in insertion order
	pub fn widgets(&self) -> &[Widget] {
		&self.widgets
	}

	/// Mutable access for extension hooks
	pub fn widgets_mut(&mut self) -> &mut Vec<Widget> {
		&mut self.widgets
	}

	/// Enabled widgets ordered by `sort`
	pub fn enabled_widgets(&self) -> Vec<&Widget> {
		let mut enabled: Vec<&Widget> = self.widgets.iter().filter(|w| w.enabled).collect();
		enabled.sort_by_key(|w| w.sort);
		enabled
	}

	/// Number of widgets
	pub fn len(&self) -> usize {
		self.widgets.len()
	}

	/// Whether the area has no widgets
	pub fn is_empty(&self) -> bool {
		self.widgets.is_empty()
	}

	/// Whether the area holds anything worth rendering a sidebar for
	pub fn exists(&self) -> bool {
		!self.is_empty()
	}
}
