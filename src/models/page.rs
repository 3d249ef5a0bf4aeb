//! Pagination types shared by the list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;

/// One page of a backend listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub content: Vec<T>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of items across all pages.
    pub total_elements: u64,
    /// Zero-based index of this page.
    pub current_page: u32,
    /// Requested page size.
    pub size: u32,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
}

/// Paging parameters for list endpoints (zero-based page index).
#[derive(Debug, Clone, Serialize)]
pub struct PageParams {
    /// Zero-based page index.
    pub page: u32,
    /// Page size.
    pub size: u32,
}

impl PageParams {
    /// Parameters for a specific page with the default size.
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wire_format() {
        let json = r#"{
            "content": [1, 2, 3],
            "totalPages": 4,
            "totalElements": 31,
            "currentPage": 0,
            "size": 10,
            "first": true,
            "last": false
        }"#;

        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_elements, 31);
        assert!(page.first);
        assert!(!page.last);
    }

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page, 0);
        assert_eq!(params.size, DEFAULT_PAGE_SIZE);

        let params = PageParams::page(3);
        assert_eq!(params.page, 3);
        assert_eq!(params.size, DEFAULT_PAGE_SIZE);
    }
}
