//! Pagination — page requests, sort specs, and the listing response envelope.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::board::Board;
use crate::error::ValidationError;

/// Pagination parameters for a listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page number.
    pub number: u32,
    /// Number of items per page.
    pub size: u32,
    /// Requested ordering; insertion order (`idx` ascending) when absent.
    pub sort: Option<Sort>,
}

impl PageRequest {
    /// Re-encode this request as the query string of a self link.
    ///
    /// The link reproduces the effective pagination parameters, so fetching
    /// it returns the same page again.
    #[must_use]
    pub fn self_href(&self, base_path: &str) -> String {
        let mut href = format!("{base_path}?page={}&size={}", self.number, self.size);
        if let Some(sort) = &self.sort {
            href.push_str("&sort=");
            href.push_str(&sort.to_string());
        }
        href
    }
}

/// A field to order a listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Idx,
    Title,
    Author,
    CreatedDate,
}

impl SortField {
    /// Wire name of the field, as it appears in the `sort` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idx => "idx",
            Self::Title => "title",
            Self::Author => "author",
            Self::CreatedDate => "createdDate",
        }
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idx" => Ok(Self::Idx),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "createdDate" => Ok(Self::CreatedDate),
            other => Err(ValidationError::InvalidSort(other.to_string())),
        }
    }
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Wire name of the direction.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A parsed sort spec: a whitelisted field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field.as_str(), self.direction.as_str())
    }
}

impl FromStr for Sort {
    type Err = ValidationError;

    /// Parse the `field` or `field,asc|desc` syntax of the `sort` parameter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            None => (s.parse()?, SortDirection::default()),
            Some((field, "asc")) => (field.parse()?, SortDirection::Ascending),
            Some((field, "desc")) => (field.parse()?, SortDirection::Descending),
            Some(_) => return Err(ValidationError::InvalidSort(s.to_string())),
        };
        Ok(Self { field, direction })
    }
}

/// One page of a listing plus pagination metadata and a self link.
///
/// Response-only; constructed fresh per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PageEnvelope {
    pub content: Vec<Board>,
    pub page: PageMetadata,
    #[serde(rename = "_links")]
    pub links: PageLinks,
}

impl PageEnvelope {
    /// Assemble an envelope for the given page of `content`.
    ///
    /// `total_elements` is the store-wide record count, not the page length.
    #[must_use]
    pub fn new(
        content: Vec<Board>,
        request: &PageRequest,
        total_elements: u64,
        base_path: &str,
    ) -> Self {
        Self {
            content,
            page: PageMetadata {
                size: request.size,
                number: request.number,
                total_elements,
            },
            links: PageLinks {
                this: Link {
                    href: request.self_href(base_path),
                },
            },
        }
    }
}

/// Pagination metadata for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    pub size: u32,
    pub number: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
}

/// Navigational links attached to an envelope.
#[derive(Debug, Clone, Serialize)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub this: Link,
}

/// A single hypermedia link.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub href: String,
}
