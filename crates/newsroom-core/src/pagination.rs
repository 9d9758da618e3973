//! Slicing, sorting and link generation for list endpoints.
//!
//! Every resource is paged the same way: the whole list is sorted on the
//! resource's [`SortKey`] first, then the requested page is cut out of it.

use newsroom_shared::dto::{
    AuthorResponse, CommentResponse, NewsResponse, PageQuery, SortOrder, TagResponse,
};
use newsroom_shared::{PageLinks, PageMetadata, PagedResponse};
use thiserror::Error;

/// The single field a resource is sorted on.
pub trait SortKey {
    fn sort_key(&self) -> &str;
}

impl SortKey for NewsResponse {
    fn sort_key(&self) -> &str {
        &self.title
    }
}

impl SortKey for AuthorResponse {
    fn sort_key(&self) -> &str {
        &self.name
    }
}

impl SortKey for CommentResponse {
    fn sort_key(&self) -> &str {
        &self.content
    }
}

impl SortKey for TagResponse {
    fn sort_key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Page {page} with limit {limit} is out of range for {total} items")]
    OutOfRange { page: i64, limit: i64, total: usize },
}

/// Cut one page out of `items`.
///
/// When any of `page`, `limit` or `sort` is missing the whole list is
/// returned as a single page without links. `path` is the resource path the
/// next/previous links point at.
pub fn paginate<T: SortKey>(
    mut items: Vec<T>,
    query: &PageQuery,
    path: &str,
) -> Result<PagedResponse<T>, PaginationError> {
    let total = items.len();

    let (Some(page), Some(limit), Some(sort)) = (query.page, query.limit, query.sort) else {
        return Ok(PagedResponse {
            content: items,
            page: PageMetadata {
                size: total as u64,
                number: 1,
                total_elements: total as u64,
                total_pages: 1,
            },
            links: PageLinks::default(),
        });
    };

    let out_of_range = || PaginationError::OutOfRange { page, limit, total };

    if page < 1 || limit < 1 {
        return Err(out_of_range());
    }

    let start = (page - 1)
        .checked_mul(limit)
        .and_then(|start| usize::try_from(start).ok())
        .filter(|start| *start <= total)
        .ok_or_else(out_of_range)?;
    let page_size = usize::try_from(limit).unwrap_or(usize::MAX);
    let end = start.saturating_add(page_size).min(total);

    sort_by_key(&mut items, sort);

    let content: Vec<T> = items.into_iter().skip(start).take(end - start).collect();

    let links = PageLinks {
        next: (end < total).then(|| page_link(path, page + 1, limit, sort)),
        previous: (start > 0).then(|| page_link(path, page - 1, limit, sort)),
    };

    Ok(PagedResponse {
        content,
        page: PageMetadata {
            size: limit as u64,
            number: page as u64,
            total_elements: total as u64,
            total_pages: (total as u64).div_ceil(limit as u64),
        },
        links,
    })
}

/// Stable lexicographic sort; descending is the exact reverse of ascending.
pub fn sort_by_key<T: SortKey>(items: &mut [T], order: SortOrder) {
    items.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    if order == SortOrder::Desc {
        items.reverse();
    }
}

fn page_link(path: &str, page: i64, limit: i64, sort: SortOrder) -> String {
    format!("{path}?page={page}&limit={limit}&sort={}", sort.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str);

    impl SortKey for Item {
        fn sort_key(&self) -> &str {
            self.0
        }
    }

    fn items() -> Vec<Item> {
        ["delta", "alpha", "echo", "charlie", "bravo"]
            .into_iter()
            .map(Item)
            .collect()
    }

    fn query(page: i64, limit: i64, sort: SortOrder) -> PageQuery {
        PageQuery {
            page: Some(page),
            limit: Some(limit),
            sort: Some(sort),
        }
    }

    #[test]
    fn test_missing_parameters_return_everything() {
        let partial = PageQuery {
            page: Some(2),
            limit: None,
            sort: Some(SortOrder::Asc),
        };
        let page = paginate(items(), &partial, "/news").unwrap();

        assert_eq!(page.content, items());
        assert_eq!(page.page.total_elements, 5);
        assert_eq!(page.page.total_pages, 1);
        assert_eq!(page.links, PageLinks::default());
    }

    #[test]
    fn test_middle_page_sorts_before_slicing() {
        let page = paginate(items(), &query(2, 2, SortOrder::Asc), "/news").unwrap();

        assert_eq!(page.content, vec![Item("charlie"), Item("delta")]);
        assert_eq!(page.links.next.as_deref(), Some("/news?page=3&limit=2&sort=asc"));
        assert_eq!(
            page.links.previous.as_deref(),
            Some("/news?page=1&limit=2&sort=asc")
        );
        assert_eq!(page.page.number, 2);
        assert_eq!(page.page.size, 2);
        assert_eq!(page.page.total_pages, 3);
    }

    #[test]
    fn test_first_and_last_page_links() {
        let first = paginate(items(), &query(1, 2, SortOrder::Desc), "/tag").unwrap();
        assert_eq!(first.content, vec![Item("echo"), Item("delta")]);
        assert!(first.links.previous.is_none());
        assert_eq!(first.links.next.as_deref(), Some("/tag?page=2&limit=2&sort=desc"));

        let last = paginate(items(), &query(3, 2, SortOrder::Desc), "/tag").unwrap();
        assert_eq!(last.content, vec![Item("alpha")]);
        assert!(last.links.next.is_none());
        assert!(last.links.previous.is_some());
    }

    #[test]
    fn test_page_never_exceeds_limit() {
        for limit in 1..=6 {
            for page in 1..=3 {
                if let Ok(result) = paginate(items(), &query(page, limit, SortOrder::Asc), "/x") {
                    assert!(result.content.len() <= limit as usize);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_pages_are_rejected() {
        for (page, limit) in [(0, 2), (-1, 2), (1, 0), (4, 2), (i64::MAX, i64::MAX)] {
            let err = paginate(items(), &query(page, limit, SortOrder::Asc), "/news").unwrap_err();
            assert_eq!(
                err,
                PaginationError::OutOfRange {
                    page,
                    limit,
                    total: 5
                }
            );
        }
    }

    #[test]
    fn test_descending_is_exact_reverse_of_ascending() {
        let mut asc = items();
        let mut desc = items();
        sort_by_key(&mut asc, SortOrder::Asc);
        sort_by_key(&mut desc, SortOrder::Desc);

        assert!(asc.windows(2).all(|w| w[0].0 <= w[1].0));
        desc.reverse();
        assert_eq!(asc, desc);
    }
}
