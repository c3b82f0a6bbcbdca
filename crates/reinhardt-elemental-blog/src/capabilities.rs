//! Collaborator capabilities
//!
//! Host pages and request handlers are provided by the surrounding blog
//! framework. Each optional feature is a separate trait; a collaborator opts in
//! by returning itself from the matching `as_*` accessor, and resolution only
//! ever asks whether a capability is present.

use crate::pagination::PaginatedView;
use crate::posts::PostCollection;
use crate::widgets::WidgetArea;
use std::any::Any;

/// The page a block is placed on.
pub trait HostPage {
	/// Get the page ID
	fn id(&self) -> u64;

	/// The parent page, if any
	fn parent(&self) -> Option<&dyn HostPage> {
		None
	}

	/// Blog listing capability
	fn as_blog_listing(&self) -> Option<&dyn BlogPostListing> {
		None
	}

	/// Widget sidebar capability
	fn as_widget_page(&self) -> Option<&dyn WidgetPage> {
		None
	}

	/// Custom sidebar accessor capability
	fn as_sidebar_provider(&self) -> Option<&dyn SidebarProvider> {
		None
	}
}

/// A page that lists its own blog posts.
pub trait BlogPostListing {
	/// Posts published under this page, already filtered and sorted by the page
	fn blog_posts(&self) -> PostCollection;
}

/// A page carrying the widget extension.
pub trait WidgetPage {
	/// Whether the page shows its parent's sidebar instead of its own
	fn inherits_sidebar(&self) -> bool;

	/// The page's own widget area
	fn side_bar(&self) -> WidgetArea;
}

/// A page exposing a sidebar through an untyped accessor.
///
/// The value must be a [`WidgetArea`]; anything else is a contract violation
/// reported by the resolver.
pub trait SidebarProvider {
	/// Produce the sidebar
	fn side_bar_view(&self) -> Box<dyn Any>;
}

/// The handler serving the current request.
pub trait RequestContext {
	/// Native blog controller capability
	fn as_blog_controller(&self) -> Option<&dyn BlogController> {
		None
	}

	/// Custom paginated list accessor capability
	fn as_paginated_list_provider(&self) -> Option<&dyn PaginatedListProvider> {
		None
	}
}

/// The blog's own controller, which paginates according to the request.
pub trait BlogController {
	/// The controller's paginated post listing
	fn paginated_list(&self) -> PaginatedView;
}

/// A non-blog controller that supplies a paginated list for embedded blocks.
pub trait PaginatedListProvider {
	/// The paginated list, used verbatim
	fn blog_post_paginated_list(&self) -> Option<PaginatedView>;
}

/// Source of every blog post, used when the host page cannot list its own.
pub trait PostSource {
	/// All posts
	fn all_posts(&self) -> PostCollection;
}

impl PostSource for PostCollection {
	fn all_posts(&self) -> PostCollection {
		self.clone()
	}
}
