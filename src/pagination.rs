use serde::{Serialize, Serializer};

/// Rows shown on a single list page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
/// Page selector buttons shown before ellipses kick in.
pub const DEFAULT_MAX_PAGE_BUTTONS: usize = 5;

/// Entry of the compact page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageLabel {
    Page(usize),
    /// Gap between page 1 and the middle window.
    EllipsisStart,
    /// Gap between the middle window and the last page.
    EllipsisEnd,
}

impl PageLabel {
    /// Stable rendering key, unique within one label sequence.
    pub fn key(&self) -> String {
        match self {
            PageLabel::Page(page) => format!("page-{page}"),
            PageLabel::EllipsisStart => "ellipsis-start".to_string(),
            PageLabel::EllipsisEnd => "ellipsis-end".to_string(),
        }
    }

    /// Page number to jump to, `None` for an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageLabel::Page(page) => Some(*page),
            _ => None,
        }
    }
}

impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLabel::Page(page) => serializer.serialize_u64(*page as u64),
            PageLabel::EllipsisStart => serializer.serialize_str("ellipsis-start"),
            PageLabel::EllipsisEnd => serializer.serialize_str("ellipsis-end"),
        }
    }
}

/// Number of pages needed for `total_items`; zero when there is nothing to show.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1))
}

/// Returns the slice of `items` that belongs to `current_page` (1-based).
///
/// Pages past the end yield an empty slice; page `0` is treated as page `1`.
pub fn paginate<T>(items: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    let items_per_page = items_per_page.max(1);
    let start = (current_page.max(1) - 1).saturating_mul(items_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}

/// Builds the page selector for `current_page` out of `total_pages`.
///
/// Page 1 and the last page are always present; the window around the
/// current page is widened near either edge so the selector keeps a stable
/// width of `max_buttons` numbered entries.
pub fn build_page_labels(
    current_page: usize,
    total_pages: usize,
    max_buttons: usize,
) -> Vec<PageLabel> {
    if total_pages <= max_buttons {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let mut pages = vec![PageLabel::Page(1)];

    let mut start_page = current_page.saturating_sub(1).max(2);
    let mut end_page = (total_pages - 1).min(current_page + 1);

    if current_page <= 3 {
        end_page = max_buttons.saturating_sub(1).min(total_pages - 1);
    }

    if current_page >= total_pages.saturating_sub(2) {
        start_page = (total_pages + 2 - max_buttons).max(2);
    }

    if start_page > 2 {
        pages.push(PageLabel::EllipsisStart);
    }
    pages.extend((start_page..=end_page).map(PageLabel::Page));

    if end_page < total_pages - 1 {
        pages.push(PageLabel::EllipsisEnd);
    }

    if total_pages > 1 {
        pages.push(PageLabel::Page(total_pages));
    }

    pages
}

/// One page of items together with the selector state needed to render it.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageLabel>,
    pub page: usize,
    /// Page count as displayed, never less than one.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T: Clone> Paginated<T> {
    /// Cuts page `current_page` out of `items`.
    pub fn from_slice(
        items: &[T],
        current_page: usize,
        items_per_page: usize,
        max_buttons: usize,
    ) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };
        let total = total_pages(items.len(), items_per_page);
        let display_total = total.max(1);

        Self {
            items: paginate(items, current_page, items_per_page).to_vec(),
            pages: build_page_labels(current_page, display_total, max_buttons),
            page: current_page,
            total_pages: display_total,
            total_items: items.len(),
            has_previous: current_page > 1,
            has_next: total > 0 && current_page < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageLabel::{EllipsisEnd, EllipsisStart, Page};
    use super::*;

    fn pages(numbers: &[usize]) -> Vec<PageLabel> {
        numbers.iter().copied().map(Page).collect()
    }

    #[test]
    fn few_pages_are_listed_without_ellipsis() {
        assert_eq!(build_page_labels(1, 5, 5), pages(&[1, 2, 3, 4, 5]));
        assert_eq!(build_page_labels(3, 5, 5), pages(&[1, 2, 3, 4, 5]));
        assert_eq!(build_page_labels(1, 1, 5), pages(&[1]));
        assert_eq!(build_page_labels(1, 0, 5), Vec::<PageLabel>::new());
    }

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            build_page_labels(1, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), EllipsisEnd, Page(10)]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            build_page_labels(10, 10, 5),
            vec![Page(1), EllipsisStart, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn middle_page_of_ten() {
        assert_eq!(
            build_page_labels(5, 10, 5),
            vec![
                Page(1),
                EllipsisStart,
                Page(4),
                Page(5),
                Page(6),
                EllipsisEnd,
                Page(10)
            ]
        );
    }

    #[test]
    fn window_edges_of_ten() {
        assert_eq!(
            build_page_labels(3, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), EllipsisEnd, Page(10)]
        );
        assert_eq!(
            build_page_labels(4, 10, 5),
            vec![
                Page(1),
                EllipsisStart,
                Page(3),
                Page(4),
                Page(5),
                EllipsisEnd,
                Page(10)
            ]
        );
        assert_eq!(
            build_page_labels(8, 10, 5),
            vec![Page(1), EllipsisStart, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn six_pages_switch_between_edges() {
        assert_eq!(
            build_page_labels(3, 6, 5),
            vec![Page(1), Page(2), Page(3), Page(4), EllipsisEnd, Page(6)]
        );
        assert_eq!(
            build_page_labels(4, 6, 5),
            vec![Page(1), EllipsisStart, Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn labels_always_bracket_first_and_last_page() {
        for total in 1..=25 {
            for current in 1..=total {
                let labels = build_page_labels(current, total, 5);
                assert_eq!(labels.first(), Some(&Page(1)));
                assert_eq!(labels.last(), Some(&Page(total)));
                let keys: std::collections::HashSet<_> =
                    labels.iter().map(PageLabel::key).collect();
                assert_eq!(keys.len(), labels.len(), "duplicate key for {current}/{total}");
            }
        }
    }

    #[test]
    fn paginate_clips_and_tolerates_out_of_range() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &items[20..23]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert_eq!(paginate(&items, 0, 10), &items[0..10]);
        assert!(paginate::<usize>(&[], 1, 10).is_empty());
    }

    #[test]
    fn pages_partition_items() {
        let items: Vec<usize> = (0..47).collect();
        let total = total_pages(items.len(), 10);
        assert_eq!(total, 5);
        let rebuilt: Vec<usize> = (1..=total)
            .flat_map(|page| paginate(&items, page, 10).to_vec())
            .collect();
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn empty_collection_displays_single_page() {
        let page = Paginated::<usize>::from_slice(&[], 1, 10, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
        assert_eq!(page.pages, vec![Page(1)]);
        assert!(!page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn only_numbered_labels_carry_a_page() {
        let numbered: Vec<usize> = build_page_labels(5, 10, 5)
            .iter()
            .filter_map(PageLabel::page)
            .collect();
        assert_eq!(numbered, vec![1, 4, 5, 6, 10]);
        assert_eq!(EllipsisStart.page(), None);
    }

    #[test]
    fn labels_serialize_like_selector_values() {
        let json = serde_json::to_string(&build_page_labels(5, 10, 5)).unwrap();
        assert_eq!(json, r#"[1,"ellipsis-start",4,5,6,"ellipsis-end",10]"#);
    }
}
