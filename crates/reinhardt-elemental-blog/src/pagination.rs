//! Paginated view over blog posts
//!
//! A window of a [`PostCollection`] addressed by a zero-based start offset and a
//! page length, the way the blog controller paginates its listing.

use crate::posts::{BlogPost, PostCollection};
use serde::{Deserialize, Serialize};

/// Page length used when none is configured
pub const DEFAULT_PAGE_LENGTH: usize = 10;

/// Windowed presentation of a post collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedView {
	posts: PostCollection,
	page_length: usize,
	page_start: usize,
}

/// Pagination state exposed to templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSummary {
	/// Current page number (1-indexed)
	pub current_page: usize,
	/// Total number of pages
	pub total_pages: usize,
	/// Total number of posts across all pages
	pub total_items: usize,
	/// Posts per page, 0 when unlimited
	pub page_length: usize,
	/// Start offset of the next page
	pub next_start: Option<usize>,
	/// Start offset of the previous page
	pub previous_start: Option<usize>,
}

impl PaginatedView {
	/// Wrap a collection, starting at the first page
	pub fn new(posts: PostCollection) -> Self {
		Self {
			posts,
			page_length: DEFAULT_PAGE_LENGTH,
			page_start: 0,
		}
	}

	/// Set the page length; 0 disables the limit
	pub fn with_page_length(mut self, page_length: usize) -> Self {
		self.page_length = page_length;
		self
	}

	/// Set the zero-based offset of the first post on the current page
	pub fn with_page_start(mut self, page_start: usize) -> Self {
		self.page_start = page_start;
		self
	}

	/// Replace the page length in place
	pub fn set_page_length(&mut self, page_length: usize) {
		self.page_length = page_length;
	}

	/// Replace the start offset in place
	pub fn set_page_start(&mut self, page_start: usize) {
		self.page_start = page_start;
	}

	/// The full, unwindowed collection
	pub fn posts(&self) -> &PostCollection {
		&self.posts
	}

	/// Posts per page, 0 when unlimited
	pub fn page_length(&self) -> usize {
		self.page_length
	}

	/// Zero-based offset of the current page
	pub fn page_start(&self) -> usize {
		self.page_start
	}

	/// Posts on the current page
	pub fn items(&self) -> &[BlogPost] {
		if self.page_length == 0 {
			return self.posts.as_slice();
		}
		self.posts.slice(self.page_start, self.page_length)
	}

	/// Number of posts across all pages
	pub fn total_items(&self) -> usize {
		self.posts.len()
	}

	/// Number of pages; an empty collection has none
	pub fn total_pages(&self) -> usize {
		if self.page_length == 0 {
			return 1;
		}
		self.total_items().div_ceil(self.page_length)
	}

	/// Current page number (1-indexed)
	pub fn current_page(&self) -> usize {
		if self.page_length == 0 {
			return 1;
		}
		(self.page_start / self.page_length).saturating_add(1)
	}

	/// Returns true if there is a next page
	pub fn has_next(&self) -> bool {
		self.current_page() < self.total_pages()
	}

	/// Returns true if there is a previous page
	pub fn has_previous(&self) -> bool {
		self.current_page() > 1
	}

	/// Returns true if there is more than one page
	pub fn has_other_pages(&self) -> bool {
		self.total_pages() > 1
	}

	/// Start offset of the next page, if any
	pub fn next_start(&self) -> Option<usize> {
		self.has_next()
			.then(|| self.page_start.saturating_add(self.page_length))
	}

	/// Start offset of the previous page, if any
	pub fn previous_start(&self) -> Option<usize> {
		self.has_previous()
			.then(|| self.page_start.saturating_sub(self.page_length))
	}

	/// Snapshot of the pagination state
	pub fn summary(&self) -> PaginationSummary {
		PaginationSummary {
			current_page: self.current_page(),
			total_pages: self.total_pages(),
			total_items: self.total_items(),
			page_length: self.page_length,
			next_start: self.next_start(),
			previous_start: self.previous_start(),
		}
	}
}
