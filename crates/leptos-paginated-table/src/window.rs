//! Page Window
//!
//! Computes which page links the pagination bar shows.

/// Middle pages shown next to the first page when the window is truncated
const MAX_VISIBLE: u32 = 4;

/// One entry of the pagination bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageLabel {
    Page(u32),
    Ellipsis,
}

/// Build the page labels for `current_page` out of `total_pages`.
///
/// Short collections list every page; longer ones always keep the first and
/// last page and collapse the rest around the current page.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageLabel> {
    if total_pages <= MAX_VISIBLE + 2 {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let mut labels = vec![PageLabel::Page(1)];

    if current_page <= 3 {
        labels.extend((2..=MAX_VISIBLE).map(PageLabel::Page));
        labels.push(PageLabel::Ellipsis);
        labels.push(PageLabel::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        labels.push(PageLabel::Ellipsis);
        labels.extend((total_pages - MAX_VISIBLE + 1..=total_pages).map(PageLabel::Page));
    } else {
        labels.push(PageLabel::Ellipsis);
        labels.extend((current_page - 1..=current_page + 1).map(PageLabel::Page));
        labels.push(PageLabel::Ellipsis);
        labels.push(PageLabel::Page(total_pages));
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLabel::{Ellipsis, Page};

    #[test]
    fn short_collections_list_every_page() {
        for total in 0..=6 {
            for current in 1..=total.max(1) {
                let window = page_window(current, total);
                let expected: Vec<_> = (1..=total).map(Page).collect();
                assert_eq!(window, expected, "current={current} total={total}");
            }
        }
    }

    #[test]
    fn near_start() {
        let expected = vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];
        assert_eq!(page_window(1, 10), expected);
        assert_eq!(page_window(3, 10), expected);
    }

    #[test]
    fn near_end() {
        let expected = vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)];
        assert_eq!(page_window(10, 10), expected);
        assert_eq!(page_window(8, 10), expected);
    }

    #[test]
    fn middle() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn seven_pages_boundary() {
        assert_eq!(
            page_window(4, 7),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(7)]
        );
        assert_eq!(
            page_window(5, 7),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7)]
        );
    }
}
