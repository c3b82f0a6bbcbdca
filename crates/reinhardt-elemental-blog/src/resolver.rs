//! Block resolution
//!
//! [`BlockResolver`] works out what a block renders for the current request:
//! its posts, their paginated view, the sidebar widget area and a cache key for
//! partial caching. Blocks are frequently rendered away from the blog page they
//! were designed for, so every lookup walks from the most specific collaborator
//! to the most general and never fails merely because a capability is missing.
//!
//! Each value is computed at most once per resolver and extension observers
//! run once, just before the value is memoized. Create one resolver per
//! request; nothing is shared between instances.

use crate::block::BlogBlock;
use crate::capabilities::{HostPage, PostSource, RequestContext};
use crate::context::BlockTemplateContext;
use crate::error::{ElementalError, ElementalResult};
use crate::extensions::BlockExtensions;
use crate::pagination::PaginatedView;
use crate::posts::PostCollection;
use crate::settings::{BlockSettings, ElementalBlogSettings};
use crate::widgets::WidgetArea;
use once_cell::unsync::OnceCell;
use std::any::Any;
use std::fmt;

/// Separator between cache key segments
pub const CACHE_KEY_SEPARATOR: &str = "-";

const SIDEBAR_ACCESSOR: &str = "SideBarView";

/// Request-scoped resolver for one blog block.
pub struct BlockResolver<'a> {
	block: &'a BlogBlock,
	settings: &'a BlockSettings,
	source: &'a dyn PostSource,
	host: Option<&'a dyn HostPage>,
	request: Option<&'a dyn RequestContext>,
	extensions: Option<&'a BlockExtensions>,

	blog_posts: OnceCell<PostCollection>,
	paginated_list: OnceCell<Option<PaginatedView>>,
	widget_area: OnceCell<Option<WidgetArea>>,
	cache_key: OnceCell<String>,
}

impl<'a> BlockResolver<'a> {
	/// Create a resolver with no host page, request or observers
	pub fn new(
		block: &'a BlogBlock,
		settings: &'a ElementalBlogSettings,
		source: &'a dyn PostSource,
	) -> Self {
		Self {
			block,
			settings: settings.block(block.variant()),
			source,
			host: None,
			request: None,
			extensions: None,
			blog_posts: OnceCell::new(),
			paginated_list: OnceCell::new(),
			widget_area: OnceCell::new(),
			cache_key: OnceCell::new(),
		}
	}

	/// Set the page the block is placed on
	pub fn with_host(mut self, host: &'a dyn HostPage) -> Self {
		self.host = Some(host);
		self
	}

	/// Set the handler of the current request
	pub fn with_request(mut self, request: &'a dyn RequestContext) -> Self {
		self.request = Some(request);
		self
	}

	/// Set the extension observers
	pub fn with_extensions(mut self, extensions: &'a BlockExtensions) -> Self {
		self.extensions = Some(extensions);
		self
	}

	/// The block being resolved
	pub fn block(&self) -> &BlogBlock {
		self.block
	}

	/// Settings of the block's variant
	pub fn settings(&self) -> &BlockSettings {
		self.settings
	}

	/// Posts the block displays.
	///
	/// Uses the host page's own listing when it has one and every post
	/// otherwise. The latter is a deliberate fallback for blocks placed outside
	/// a blog, not an error.
	pub fn posts(&self) -> &PostCollection {
		self.blog_posts.get_or_init(|| {
			let mut posts = match self.host.and_then(|page| page.as_blog_listing()) {
				Some(listing) => {
					tracing::debug!(block_id = self.block.id(), "using host page blog posts");
					listing.blog_posts()
				}
				None => {
					tracing::debug!(block_id = self.block.id(), "falling back to all blog posts");
					self.source.all_posts()
				}
			};

			if let Some(extensions) = self.extensions {
				extensions.update_blog_posts.invoke(&mut posts);
			}
			posts
		})
	}

	/// Paginated view of the block's posts.
	///
	/// In order of preference: the blog controller's own list, a list supplied
	/// by the controller's custom accessor (used verbatim, even when absent), or
	/// a new view over [`posts`](Self::posts).
	pub fn paginated_list(&self) -> Option<&PaginatedView> {
		self.paginated_list
			.get_or_init(|| {
				let mut list = self.resolve_paginated_list();
				if let Some(extensions) = self.extensions {
					extensions.update_paginated_list.invoke(&mut list);
				}
				list
			})
			.as_ref()
	}

	fn resolve_paginated_list(&self) -> Option<PaginatedView> {
		if let Some(request) = self.request {
			if let Some(controller) = request.as_blog_controller() {
				tracing::debug!(block_id = self.block.id(), "using blog controller paginated list");
				return Some(controller.paginated_list());
			}
			if let Some(provider) = request.as_paginated_list_provider() {
				tracing::debug!(block_id = self.block.id(), "using custom paginated list accessor");
				return provider.blog_post_paginated_list();
			}
		}

		tracing::debug!(block_id = self.block.id(), "paginating block posts");
		Some(PaginatedView::new(self.posts().clone()).with_page_length(self.settings.page_length))
	}

	/// Sidebar widget area.
	///
	/// Fails only when the host page's own sidebar accessor returns something
	/// other than a [`WidgetArea`]. That is a misconfigured collaborator and the
	/// error is not cached, so every call reports it. A parent page that has no
	/// sidebar to share resolves to `None`.
	pub fn widget_area(&self) -> ElementalResult<Option<&WidgetArea>> {
		self.widget_area
			.get_or_try_init(|| -> ElementalResult<Option<WidgetArea>> {
				let area = self.resolve_widget_area()?;
				Ok(area.map(|mut area| {
					if let Some(extensions) = self.extensions {
						extensions.update_widget_area.invoke(&mut area);
					}
					area
				}))
			})
			.map(Option::as_ref)
	}

	/// Alias of [`widget_area`](Self::widget_area) used by templates
	pub fn side_bar_view(&self) -> ElementalResult<Option<&WidgetArea>> {
		self.widget_area()
	}

	fn resolve_widget_area(&self) -> ElementalResult<Option<WidgetArea>> {
		let block_id = self.block.id();
		let Some(page) = self.host else {
			tracing::debug!(block_id, "no host page, no sidebar");
			return Ok(None);
		};

		let Some(widget_page) = page.as_widget_page() else {
			// Last chance: a page without widgets may still provide a sidebar itself
			return match page.as_sidebar_provider() {
				Some(provider) => {
					tracing::debug!(block_id, page_id = page.id(), "using custom sidebar accessor");
					expect_widget_area(provider.side_bar_view(), SIDEBAR_ACCESSOR).map(Some)
				}
				None => {
					tracing::debug!(block_id, page_id = page.id(), "host page has no widgets");
					Ok(None)
				}
			};
		};

		if widget_page.inherits_sidebar() {
			let parent_provider = page.parent().and_then(|parent| {
				parent
					.as_sidebar_provider()
					.map(|provider| (parent.id(), provider))
			});
			if let Some((parent_id, provider)) = parent_provider {
				tracing::debug!(block_id, parent_id, "using inherited parent sidebar");
				return Ok(inherited_widget_area(provider.side_bar_view(), parent_id));
			}
		}

		let own = widget_page.side_bar();
		if own.exists() {
			tracing::debug!(block_id, page_id = page.id(), "using host page sidebar");
			return Ok(Some(own));
		}

		tracing::debug!(block_id, page_id = page.id(), "host page sidebar is empty");
		Ok(None)
	}

	/// Fingerprint for partial caching.
	///
	/// Joins the block type, id and modification time with the post count and
	/// the newest post modification time, so it changes whenever a post is
	/// added, removed or edited, or the block itself is edited.
	pub fn cache_key(&self) -> &str {
		self.cache_key.get_or_init(|| {
			let posts = self.posts();
			let mut key = [
				self.block.block_type().to_string(),
				self.block.id().to_string(),
				self.block.last_edited().to_string(),
				posts.len().to_string(),
				posts
					.max_last_edited()
					.map(ToString::to_string)
					.unwrap_or_default(),
			]
			.join(CACHE_KEY_SEPARATOR);

			if let Some(extensions) = self.extensions {
				extensions.update_cache_key.invoke(&mut key);
			}
			key
		})
	}

	/// Everything a template needs to render the block.
	///
	/// Pagination and widgets are only resolved when the block shows them.
	pub fn template_context(&self) -> ElementalResult<BlockTemplateContext> {
		let pagination = if self.block.show_pagination() {
			self.paginated_list()
		} else {
			None
		};
		let sidebar = if self.block.show_widgets() {
			self.widget_area()?.cloned()
		} else {
			None
		};
		let posts = match pagination {
			Some(list) => list.items().to_vec(),
			None => self.posts().as_slice().to_vec(),
		};

		Ok(BlockTemplateContext {
			block_type: self.block.block_type().to_string(),
			title: self.block.title().to_string(),
			show_pagination: self.block.show_pagination(),
			show_widgets: self.block.show_widgets(),
			cache_key: self.cache_key().to_string(),
			posts,
			pagination: pagination.map(PaginatedView::summary),
			sidebar,
		})
	}
}

impl fmt::Debug for BlockResolver<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BlockResolver")
			.field("block", &self.block)
			.field("has_host", &self.host.is_some())
			.field("has_request", &self.request.is_some())
			.field("blog_posts", &self.blog_posts.get())
			.field("paginated_list", &self.paginated_list.get())
			.field("widget_area", &self.widget_area.get())
			.field("cache_key", &self.cache_key.get())
			.finish()
	}
}

fn expect_widget_area(value: Box<dyn Any>, accessor: &str) -> ElementalResult<WidgetArea> {
	value.downcast::<WidgetArea>().map(|area| *area).map_err(|_| {
		tracing::warn!("{} returned a value that is not a WidgetArea", accessor);
		ElementalError::ContractViolation {
			accessor: accessor.to_string(),
			expected: "WidgetArea",
		}
	})
}

/// Accepts a parent's sidebar given either as a [`WidgetArea`] or as an
/// `Option<WidgetArea>`. Anything else means the parent has nothing to share.
fn inherited_widget_area(value: Box<dyn Any>, parent_id: u64) -> Option<WidgetArea> {
	let value = match value.downcast::<WidgetArea>() {
		Ok(area) => return Some(*area),
		Err(value) => value,
	};
	match value.downcast::<Option<WidgetArea>>() {
		Ok(area) => *area,
		Err(_) => {
			tracing::debug!(parent_id, "parent sidebar accessor returned no widget area");
			None
		}
	}
}
