/// Entry of a page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

pub const MAX_PAGE_BUTTONS: usize = 7;

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Pages are 1-based; out-of-range values clamp into `1..=total_pages`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(total, page_size))
}

pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, items.len(), page_size);
    let start = (page - 1) * page_size;
    items
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect()
}

/// 1-based inclusive bounds of the rows shown, `(0, 0)` when empty.
pub fn visible_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    let page = clamp_page(page, total, page_size);
    let start = (page - 1) * page_size;
    (start + 1, (start + page_size).min(total))
}

pub fn range_label(page: usize, page_size: usize, total: usize) -> String {
    let (from, to) = visible_range(page, page_size, total);
    format!("Mostrando {from}–{to} de {total} registros")
}

/// First and last page always shown; neighbours of `current` shown; gaps collapse to an ellipsis.
pub fn page_items(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).map(PageItem::Page).collect();
    }
    let current = current.clamp(1, total_pages);
    let left_gap = current > 4;
    let right_gap = current + 3 < total_pages;
    let start = if left_gap { current - 1 } else { 1 };
    let end = if right_gap { current + 1 } else { total_pages };

    let mut items = vec![PageItem::Page(1)];
    if left_gap {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start.max(2)..=end.min(total_pages - 1)).map(PageItem::Page));
    if right_gap {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn short_strips_list_every_page() {
        assert_eq!(page_items(1, 1), vec![Page(1)]);
        assert_eq!(page_items(3, 7).len(), 7);
    }

    #[test]
    fn long_strips_collapse_with_ellipsis() {
        assert_eq!(
            page_items(1, 20),
            vec![Page(1), Page(2), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_items(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_items(20, 20),
            vec![Page(1), Ellipsis, Page(19), Page(20)]
        );
        assert!(page_items(10, 20).len() <= MAX_PAGE_BUTTONS);
    }

    #[test]
    fn slicing_and_labels() {
        let rows: Vec<u32> = (1..=23).collect();
        assert_eq!(total_pages(rows.len(), 10), 3);
        assert_eq!(page_slice(&rows, 3, 10), vec![21, 22, 23]);
        assert_eq!(page_slice(&rows, 9, 10), vec![21, 22, 23]);
        assert_eq!(range_label(2, 10, 23), "Mostrando 11–20 de 23 registros");
        assert_eq!(range_label(1, 10, 0), "Mostrando 0–0 de 0 registros");
        assert_eq!(total_pages(0, 10), 1);
    }
}
