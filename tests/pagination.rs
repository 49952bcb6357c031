use proptest::prelude::*;
use quill::pagination::{window, Link, Page, Paginator};
use quill::ErrorKind;

#[test]
fn window_documented_cases() {
    assert_eq!(window(5, 20, 5).unwrap().to_vec(), [3, 4, 5, 6, 7]);
    assert_eq!(window(19, 20, 5).unwrap().to_vec(), [15, 16, 17, 18, 19]);
    assert!(window(1, 2, 5).unwrap().is_empty());
}

#[test]
fn window_zero_page_show() {
    let err = window(3, 10, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn window_page_past_end() {
    let err = window(u64::MAX, 10, 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(window(u64::MAX, u64::MAX, u64::MAX - 1).is_ok());
}

#[test]
fn page_from_inconsistent_response() {
    let page: Page = serde_json::from_str(
        r#"{"page_index": 0, "page_count": 3, "page_show": 1, "has_pre": true}"#,
    )
    .unwrap();
    assert_eq!(page.prev(), None);
    let links = page.links().unwrap();
    assert_eq!(links.first(), Some(&Link::Prev { page: None }));
}

#[test]
fn page_links_with_gaps() {
    let links = Paginator::default().page(200, 10).links().unwrap();
    assert_eq!(
        links,
        [
            Link::Prev { page: Some(9) },
            Link::Page { page: 1, current: false },
            Link::Gap,
            Link::Page { page: 10, current: true },
            Link::Gap,
            Link::Page { page: 20, current: false },
            Link::Next { page: Some(11) },
        ]
    );
}

#[test]
fn page_from_api_response() {
    let page: Page = serde_json::from_value(serde_json::json!({
        "item_count": 95,
        "page_index": 3,
        "page_size": 10,
        "page_count": 10,
        "page_show": 3,
        "offset": 20,
        "limit": 10,
        "has_next": true,
        "has_pre": true
    }))
    .unwrap();
    assert_eq!(page.window().unwrap().to_vec(), [2, 3, 4]);
    assert_eq!(page.prev(), Some(2));
    assert_eq!(page.next(), Some(4));
}

proptest! {
    #[test]
    fn window_invariants(
        page_count in 0u64..500,
        page_show in 1u64..30,
        page_index in 1u64..600,
    ) {
        let page_index = page_index.min(page_count.max(1));
        let w = window(page_index, page_count, page_show).unwrap();
        let pages = w.to_vec();

        prop_assert!(pages.len() as u64 <= page_show);
        prop_assert_eq!(pages.len() as u64, page_show.min(page_count.saturating_sub(2)));
        prop_assert!(pages.windows(2).all(|p| p[1] == p[0] + 1));
        prop_assert!(pages.iter().all(|&p| p >= 2 && p < page_count));
        if page_index > 1 && page_index < page_count {
            prop_assert!(pages.contains(&page_index));
        }
        prop_assert_eq!(w.has_leading_gap(), pages.first().map_or(false, |&p| p > 2));
        prop_assert_eq!(
            w.has_trailing_gap(),
            pages.last().map_or(false, |&p| p + 1 < page_count)
        );
    }

    #[test]
    fn window_any_input(
        page_index in any::<u64>(),
        page_count in any::<u64>(),
        page_show in any::<u64>(),
    ) {
        match window(page_index, page_count, page_show) {
            Ok(w) => {
                prop_assert!(page_show >= 1);
                prop_assert!(page_count == 0 || page_index <= page_count);
                let pages = w.pages();
                prop_assert!(pages.start >= 2);
                prop_assert!(pages.end <= page_count.max(2));
                prop_assert!(pages.end - pages.start <= page_show);
                prop_assert_eq!(
                    pages.end - pages.start,
                    page_show.min(page_count.saturating_sub(2))
                );
                if page_index > 1 && page_index < page_count {
                    prop_assert!(pages.contains(&page_index));
                }
            }
            Err(err) => {
                prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
                prop_assert!(page_show == 0 || (page_count > 0 && page_index > page_count));
            }
        }
    }

    #[test]
    fn window_near_u64_max(
        back in 0u64..1_000,
        page_show in 1u64..1_000,
        offset in 0u64..1_000,
    ) {
        let page_count = u64::MAX - offset;
        let page_index = page_count - back;
        let w = window(page_index, page_count, page_show).unwrap();
        prop_assert_eq!(w.len() as u64, page_show);
        prop_assert!(w.last().map_or(false, |last| last < page_count));
    }

    #[test]
    fn page_links_any_descriptor(
        page_index in any::<u64>(),
        page_count in 0u64..1_000,
        page_show in 1u64..20,
        has_next in any::<bool>(),
        has_pre in any::<bool>(),
    ) {
        let page: Page = serde_json::from_value(serde_json::json!({
            "page_index": page_index,
            "page_count": page_count,
            "page_show": page_show,
            "has_next": has_next,
            "has_pre": has_pre,
        }))
        .unwrap();

        if let Some(prev) = page.prev() {
            prop_assert!(prev >= 1 && prev <= page_count);
        }
        if let Some(next) = page.next() {
            prop_assert!(next >= 1 && next <= page_count);
        }
        match page.links() {
            Ok(links) => {
                let prev_first = matches!(links.first(), Some(Link::Prev { .. }));
                let next_last = matches!(links.last(), Some(Link::Next { .. }));
                prop_assert!(prev_first, "previous page link comes first");
                prop_assert!(next_last, "next page link comes last");
            }
            Err(err) => {
                prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
                prop_assert!(page_count > 0 && page_index > page_count);
            }
        }
    }

    #[test]
    fn page_invariants(
        item_count in 0u64..10_000,
        page_size in 1u64..50,
        page_index in 0u64..300,
    ) {
        let paginator = Paginator::builder().page_size(page_size).build().unwrap();
        let page = paginator.page(item_count, page_index);

        prop_assert!(page.page_count * page_size >= item_count);
        prop_assert!(page.page_index >= 1);
        prop_assert!(page.offset + page.limit <= page.page_count * page_size);
        prop_assert_eq!(page.has_pre, page.page_index > 1);
        prop_assert_eq!(page.has_next, page.page_index < page.page_count);
    }

    #[test]
    fn links_mark_one_current_page(
        item_count in 1u64..2_000,
        page_index in 1u64..200,
        page_show in 3u64..12,
    ) {
        let paginator = Paginator::builder().page_show(page_show).build().unwrap();
        let page = paginator.page(item_count, page_index);
        let links = page.links().unwrap();

        let current: Vec<_> = links
            .iter()
            .filter_map(|link| match link {
                Link::Page { page, current: true } => Some(*page),
                _ => None,
            })
            .collect();
        prop_assert_eq!(current, vec![page.page_index]);
        let prev_first = matches!(links.first(), Some(Link::Prev { .. }));
        let next_last = matches!(links.last(), Some(Link::Next { .. }));
        prop_assert!(prev_first, "previous page link comes first");
        prop_assert!(next_last, "next page link comes last");

        let numbers: Vec<_> = links
            .iter()
            .filter_map(|link| match link {
                Link::Page { page, .. } => Some(*page),
                _ => None,
            })
            .collect();
        prop_assert!(numbers.windows(2).all(|p| p[0] < p[1]));
    }
}
