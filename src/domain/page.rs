use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Pagination metadata, derived from (element count, page, page size) only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PageDescriptor {
    pub number_of_elements: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub number_of_pages: usize,
    pub current_page: usize,
    pub first_element: usize,
    pub last_element: usize,
}

impl PageDescriptor {
    /// An empty collection has zero pages (`ceil(0 / size)`), not one empty
    /// page, and yields `first_element = 1, last_element = 0`. The table shows
    /// its placeholder instead of a page count in that case.
    pub fn compute(element_count: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            number_of_elements: element_count,
            has_next_page: element_count > (page + 1) * page_size,
            has_previous_page: page > 0,
            number_of_pages: element_count.div_ceil(page_size),
            current_page: page,
            first_element: page * page_size + 1,
            last_element: ((page + 1) * page_size).min(element_count),
        }
    }

    pub fn last_page_index(element_count: usize, page_size: usize) -> usize {
        element_count.div_ceil(page_size.max(1)).saturating_sub(1)
    }

    pub fn clamp_page(element_count: usize, page: usize, page_size: usize) -> usize {
        page.min(Self::last_page_index(element_count, page_size))
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_elements == 0
    }

    /// "Showing 1 - 20 of 45 bookmarks", or None for an empty collection.
    pub fn range_text(&self, noun: &str) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!(
            "Showing {} - {} of {} {}",
            self.first_element, self.last_element, self.number_of_elements, noun
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod compute {
        use super::*;

        #[test]
        fn empty_collection_has_empty_range() {
            let page = PageDescriptor::compute(0, 0, 20);

            assert_eq!(page.number_of_pages, 0);
            assert_eq!(page.current_page, 0);
            assert_eq!(page.first_element, 1);
            assert_eq!(page.last_element, 0);
            assert!(!page.has_next_page);
            assert!(!page.has_previous_page);
        }

        #[test]
        fn single_element_is_one_page() {
            let page = PageDescriptor::compute(1, 0, 20);

            assert_eq!(
                page,
                PageDescriptor {
                    number_of_elements: 1,
                    has_next_page: false,
                    has_previous_page: false,
                    number_of_pages: 1,
                    current_page: 0,
                    first_element: 1,
                    last_element: 1,
                }
            );
        }

        #[test]
        fn middle_page_has_both_neighbours() {
            let page = PageDescriptor::compute(45, 1, 20);

            assert_eq!(page.number_of_pages, 3);
            assert_eq!(page.first_element, 21);
            assert_eq!(page.last_element, 40);
            assert!(page.has_next_page);
            assert!(page.has_previous_page);
        }

        #[test]
        fn last_partial_page_ends_at_count() {
            let page = PageDescriptor::compute(45, 2, 20);

            assert_eq!(page.first_element, 41);
            assert_eq!(page.last_element, 45);
            assert!(!page.has_next_page);
        }

        #[test]
        fn exact_multiple_has_no_next_page() {
            let page = PageDescriptor::compute(40, 1, 20);

            assert_eq!(page.number_of_pages, 2);
            assert!(!page.has_next_page);
        }

        #[test]
        fn range_is_well_formed_for_every_valid_page() {
            for page_size in [1, 3, 20] {
                for n in 0..=70 {
                    let last = PageDescriptor::last_page_index(n, page_size);
                    for page in 0..=last {
                        let d = PageDescriptor::compute(n, page, page_size);
                        assert!(d.first_element <= d.last_element + 1, "n={n} page={page}");
                        assert!(d.last_element <= n, "n={n} page={page}");
                        assert_eq!(d.number_of_pages, n.div_ceil(page_size));
                    }
                }
            }
        }
    }

    mod clamp_page {
        use super::*;

        #[rstest]
        #[case(0, 5, 0)] // empty collection
        #[case(20, 1, 0)] // page vanished after delete
        #[case(21, 1, 1)] // still valid
        #[case(45, 9, 2)] // far past the end
        fn clamps_to_last_valid_index(
            #[case] count: usize,
            #[case] page: usize,
            #[case] expected: usize,
        ) {
            assert_eq!(PageDescriptor::clamp_page(count, page, 20), expected);
        }
    }

    mod range_text {
        use super::*;

        #[test]
        fn formats_visible_range() {
            let page = PageDescriptor::compute(45, 1, 20);
            insta::assert_snapshot!(page.range_text("bookmarks").unwrap(), @"Showing 21 - 40 of 45 bookmarks");
        }

        #[test]
        fn none_when_empty() {
            assert!(PageDescriptor::compute(0, 0, 20).range_text("bookmarks").is_none());
        }
    }
}
