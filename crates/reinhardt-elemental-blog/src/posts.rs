//! Blog posts and post collections
//!
//! Posts are already loaded by the blog module; this module only models the
//! fields blocks need for rendering and cache fingerprints.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Database-style timestamp as stored by the blog module.
///
/// Values are kept in their textual form so cache keys reproduce exactly what
/// was stored. Ordering is chronological for anything [`to_datetime`] can
/// parse, including unpadded dates such as `2024-1-9`. Unparseable values sort
/// before all parseable ones and by text among themselves.
///
/// [`to_datetime`]: Timestamp::to_datetime
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
	/// Layout used for date-time values.
	pub const DATETIME_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

	/// Layout used for date-only values.
	pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

	/// Wrap an already formatted timestamp.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Current UTC time.
	pub fn now() -> Self {
		Self::from(Utc::now().naive_utc())
	}

	/// Get the textual value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Parse into a date-time, accepting date-only values as midnight.
	pub fn to_datetime(&self) -> Option<NaiveDateTime> {
		NaiveDateTime::parse_from_str(&self.0, Self::DATETIME_FORMAT)
			.ok()
			.or_else(|| {
				NaiveDate::parse_from_str(&self.0, Self::DATE_FORMAT)
					.ok()
					.and_then(|date| date.and_hms_opt(0, 0, 0))
			})
	}
}

impl Ord for Timestamp {
	fn cmp(&self, other: &Self) -> Ordering {
		// Text breaks ties so that equal orderings imply equal values
		(self.to_datetime(), self.as_str()).cmp(&(other.to_datetime(), other.as_str()))
	}
}

impl PartialOrd for Timestamp {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl fmt::Display for Timestamp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Timestamp {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<NaiveDateTime> for Timestamp {
	fn from(value: NaiveDateTime) -> Self {
		Self(value.format(Self::DATETIME_FORMAT).to_string())
	}
}

impl From<NaiveDate> for Timestamp {
	fn from(value: NaiveDate) -> Self {
		Self(value.format(Self::DATE_FORMAT).to_string())
	}
}

/// A single blog post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
	/// Post ID
	pub id: u64,

	/// Post title
	pub title: String,

	/// Last modification time
	pub last_edited: Timestamp,

	/// Publication time, unset for drafts
	#[serde(default)]
	pub publish_date: Option<Timestamp>,
}

impl BlogPost {
	/// Create a new, unpublished post
	pub fn new(id: u64, title: impl Into<String>, last_edited: impl Into<Timestamp>) -> Self {
		Self {
			id,
			title: title.into(),
			last_edited: last_edited.into(),
			publish_date: None,
		}
	}

	/// Set the publication time
	pub fn with_publish_date(mut self, publish_date: impl Into<Timestamp>) -> Self {
		self.publish_date = Some(publish_date.into());
		self
	}

	/// Whether the post has been published
	pub fn is_published(&self) -> bool {
		self.publish_date.is_some()
	}
}

/// Ordered sequence of blog posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostCollection {
	posts: Vec<BlogPost>,
}

impl PostCollection {
	/// Create an empty collection
	pub fn new() -> Self {
		Self { posts: Vec::new() }
	}

	/// Append a post
	pub fn push(&mut self, post: BlogPost) -> &mut Self {
		self.posts.push(post);
		self
	}

	/// Number of posts
	pub fn len(&self) -> usize {
		self.posts.len()
	}

	/// Whether the collection has no posts
	pub fn is_empty(&self) -> bool {
		self.posts.is_empty()
	}

	/// All posts in order
	pub fn as_slice(&self) -> &[BlogPost] {
		&self.posts
	}

	/// Iterate over posts in order
	pub fn iter(&self) -> std::slice::Iter<'_, BlogPost> {
		self.posts.iter()
	}

	/// Most recent `last_edited` across all posts, `None` when empty.
	///
	/// Compared chronologically, see [`Timestamp`] ordering.
	pub fn max_last_edited(&self) -> Option<&Timestamp> {
		self.posts.iter().map(|post| &post.last_edited).max()
	}

	/// Keep only posts matching the predicate
	pub fn filter<P>(mut self, predicate: P) -> Self
	where
		P: FnMut(&BlogPost) -> bool,
	{
		self.posts.retain(predicate);
		self
	}

	/// Stable sort by the given comparator
	pub fn sort_by<C>(mut self, compare: C) -> Self
	where
		C: FnMut(&BlogPost, &BlogPost) -> Ordering,
	{
		self.posts.sort_by(compare);
		self
	}

	/// Newest publication first, drafts last (the blog's default listing order)
	pub fn sort_by_publish_date_desc(self) -> Self {
		self.sort_by(|a, b| b.publish_date.cmp(&a.publish_date))
	}

	/// Keep at most `limit` posts
	pub fn limit(mut self, limit: usize) -> Self {
		self.posts.truncate(limit);
		self
	}

	/// Window of posts starting at `offset`, clamped to the collection bounds
	pub fn slice(&self, offset: usize, length: usize) -> &[BlogPost] {
		let start = offset.min(self.posts.len());
		let end = start.saturating_add(length).min(self.posts.len());
		&self.posts[start..end]
	}
}

impl From<Vec<BlogPost>> for PostCollection {
	fn from(posts: Vec<BlogPost>) -> Self {
		Self { posts }
	}
}

impl FromIterator<BlogPost> for PostCollection {
	fn from_iter<I: IntoIterator<Item = BlogPost>>(iter: I) -> Self {
		Self {
			posts: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for PostCollection {
	type Item = BlogPost;
	type IntoIter = std::vec::IntoIter<BlogPost>;

	fn into_iter(self) -> Self::IntoIter {
		self.posts.into_iter()
	}
}

impl<'a> IntoIterator for &'a PostCollection {
	type Item = &'a BlogPost;
	type IntoIter = std::slice::Iter<'a, BlogPost>;

	fn into_iter(self) -> Self::IntoIter {
		self.posts.iter()
	}
}
