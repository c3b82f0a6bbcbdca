//! # Reinhardt Elemental Blog
//!
//! Blog content blocks for page builders: drop an overview, a pagination bar,
//! or a widget sidebar onto any page and let the block work out where its
//! posts and widgets come from.
//!
//! ## Features
//!
//! - **Block Variants**: Overview, Pagination and Widgets blocks sharing one
//!   implementation, differing only in their settings
//! - **Fallback Resolution**: posts, paginated lists and sidebars degrade
//!   gracefully when the block is rendered away from a blog page
//! - **Extension Points**: ordered observers may rewrite every resolved value
//! - **Partial Caching**: a cache key that changes whenever the rendered output can
//!
//! ## Architecture
//!
//! ```text
//! reinhardt-elemental-blog
//! ├── block        - Content block entity and variants
//! ├── capabilities - Optional host page / request capabilities
//! ├── context      - Serializable template context
//! ├── extensions   - Observer hooks for resolved values
//! ├── pagination   - Paginated view over blog posts
//! ├── posts        - Blog posts and collections
//! ├── resolver     - Memoized resolution and cache keys
//! ├── settings     - Per-variant configuration
//! └── widgets      - Widgets and widget areas
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reinhardt_elemental_blog::prelude::*;
//!
//! let settings = ElementalBlogSettings::default();
//! let block = BlogBlock::new(5, BlockVariant::Overview, &settings);
//!
//! let resolver = BlockResolver::new(&block, &settings, &all_posts)
//!     .with_host(&blog_page)
//!     .with_request(&controller);
//!
//! let key = resolver.cache_key();
//! let sidebar = resolver.side_bar_view()?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod block;
pub mod capabilities;
pub mod context;
pub mod error;
pub mod extensions;
pub mod pagination;
pub mod posts;
pub mod resolver;
pub mod settings;
pub mod widgets;

// Prelude for convenient imports
pub mod prelude {
	//! Convenient re-exports of commonly used items

	// Blocks
	pub use crate::block::{BlockVariant, BlogBlock, EditableField};

	// Collaborators
	pub use crate::capabilities::{
		BlogController, BlogPostListing, HostPage, PaginatedListProvider, PostSource,
		RequestContext, SidebarProvider, WidgetPage,
	};

	// Resolution
	pub use crate::context::BlockTemplateContext;
	pub use crate::extensions::{BlockExtensions, ExtensionPoint};
	pub use crate::resolver::BlockResolver;

	// Data
	pub use crate::pagination::{PaginatedView, PaginationSummary};
	pub use crate::posts::{BlogPost, PostCollection, Timestamp};
	pub use crate::widgets::{Widget, WidgetArea};

	// Settings & errors
	pub use crate::error::{ElementalError, ElementalResult};
	pub use crate::settings::{BlockSettings, ElementalBlogSettings};
}
