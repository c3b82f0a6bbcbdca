//! Extension points for resolved block values
//!
//! Every resolution method hands its candidate result to the observers
//! connected to its extension point before memoizing it. Observers run
//! synchronously, in connection order, with a mutable handle they may edit or
//! replace.

use crate::pagination::PaginatedView;
use crate::posts::PostCollection;
use crate::widgets::WidgetArea;
use std::fmt;

type Hook<T> = Box<dyn Fn(&mut T)>;

struct ConnectedHook<T> {
	hook: Hook<T>,
	dispatch_uid: Option<String>,
}

/// Ordered list of observers for one resolution method.
pub struct ExtensionPoint<T> {
	name: &'static str,
	hooks: Vec<ConnectedHook<T>>,
}

impl<T> ExtensionPoint<T> {
	/// Create an extension point with no observers
	pub fn new(name: &'static str) -> Self {
		Self {
			name,
			hooks: Vec::new(),
		}
	}

	/// Extension point name, e.g. `updateCacheKey`
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Connect an observer at the end of the list
	pub fn connect<F>(&mut self, hook: F) -> &mut Self
	where
		F: Fn(&mut T) + 'static,
	{
		self.hooks.push(ConnectedHook {
			hook: Box::new(hook),
			dispatch_uid: None,
		});
		self
	}

	/// Connect an observer under a unique id.
	///
	/// An observer already connected with the same id is replaced and the new
	/// one moves to the end of the list.
	pub fn connect_with_uid<F>(&mut self, dispatch_uid: impl Into<String>, hook: F) -> &mut Self
	where
		F: Fn(&mut T) + 'static,
	{
		let dispatch_uid = dispatch_uid.into();
		self.hooks
			.retain(|h| h.dispatch_uid.as_deref() != Some(dispatch_uid.as_str()));
		self.hooks.push(ConnectedHook {
			hook: Box::new(hook),
			dispatch_uid: Some(dispatch_uid),
		});
		self
	}

	/// Disconnect the observer with the given id
	pub fn disconnect(&mut self, dispatch_uid: &str) -> bool {
		let original_len = self.hooks.len();
		self.hooks
			.retain(|h| h.dispatch_uid.as_deref() != Some(dispatch_uid));
		self.hooks.len() < original_len
	}

	/// Number of connected observers
	pub fn len(&self) -> usize {
		self.hooks.len()
	}

	/// Whether no observers are connected
	pub fn is_empty(&self) -> bool {
		self.hooks.is_empty()
	}

	/// Run every observer against the candidate
	pub fn invoke(&self, candidate: &mut T) {
		if self.hooks.is_empty() {
			return;
		}
		tracing::trace!(
			extension_point = self.name,
			observers = self.hooks.len(),
			"invoking extension point"
		);
		for connected in &self.hooks {
			(connected.hook)(candidate);
		}
	}
}

impl<T> fmt::Debug for ExtensionPoint<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExtensionPoint")
			.field("name", &self.name)
			.field("observers", &self.hooks.len())
			.finish()
	}
}

/// Extension points of a blog block, one per resolution method.
#[derive(Debug)]
pub struct BlockExtensions {
	/// Rewrites the post collection
	pub update_blog_posts: ExtensionPoint<PostCollection>,

	/// Rewrites the paginated list, which may be absent
	pub update_paginated_list: ExtensionPoint<Option<PaginatedView>>,

	/// Rewrites a resolved widget area
	pub update_widget_area: ExtensionPoint<WidgetArea>,

	/// Rewrites the cache key
	pub update_cache_key: ExtensionPoint<String>,
}

impl BlockExtensions {
	/// Create extension points with no observers
	pub fn new() -> Self {
		Self {
			update_blog_posts: ExtensionPoint::new("updateBlogPosts"),
			update_paginated_list: ExtensionPoint::new("updatePaginatedList"),
			update_widget_area: ExtensionPoint::new("updateWidgetArea"),
			update_cache_key: ExtensionPoint::new("updateCacheKey"),
		}
	}
}

impl Default for BlockExtensions {
	fn default() -> Self {
		Self::new()
	}
}
