//! Search and pagination for the plant table.
//!
//! Everything here is a pure function of `(records, ViewState)`. The table
//! component re-derives its page on every render instead of caching it.

use crate::shared::types::PlantRecord;

pub const PAGE_SIZE: usize = 6;

/// Records whose name contains `term`, compared case-insensitively.
/// Order is preserved; an empty term keeps every record.
pub fn filter<'a>(records: &'a [PlantRecord], term: &str) -> Vec<&'a PlantRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Clamped page number, 1-based.
    pub page: usize,
    pub page_count: usize,
    pub total_count: usize,
    pub range_start: usize,
    pub range_end: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Number of pages for `total_count` items. Never below 1, so an empty
/// result still reads "1 / 1".
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_count.div_ceil(page_size).max(1)
}

/// Slice out one page. Out-of-range pages saturate to the nearest valid one.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let page_count = page_count(total_count, page_size);
    let page = page.clamp(1, page_count);

    let start = ((page - 1) * page_size).min(total_count);
    let end = (page * page_size).min(total_count);

    let (range_start, range_end) = if total_count == 0 {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Page {
        items: items[start..end].to_vec(),
        page,
        page_count,
        total_count,
        range_start,
        range_end,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
        }
    }
}

impl ViewState {
    /// A new search always starts again from the first page.
    pub fn on_search_change(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            current_page: 1,
        }
    }

    pub fn on_page_change(self, delta: isize, page_count: usize) -> Self {
        let last = page_count.max(1) as isize;
        let next = (self.current_page as isize)
            .saturating_add(delta)
            .clamp(1, last);
        Self {
            current_page: next as usize,
            ..self
        }
    }
}

/// The visible page for `state`: filter, then paginate.
pub fn derive<'a>(
    records: &'a [PlantRecord],
    state: &ViewState,
    page_size: usize,
) -> Page<&'a PlantRecord> {
    let filtered = filter(records, &state.search_term);
    paginate(&filtered, state.current_page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::plants::power_plants;

    fn ids(items: &[&PlantRecord]) -> Vec<u32> {
        items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_term_is_identity() {
        let plants = power_plants();
        let filtered = filter(&plants, "");
        assert_eq!(filtered.len(), plants.len());
        assert!(filtered.iter().zip(plants.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn filter_keeps_order_and_partitions_by_name() {
        let plants = power_plants();
        for term in ["풍력", "제주", "발전소", "서귀포", "없는이름", "Solar"] {
            let filtered = filter(&plants, term);
            let kept = ids(&filtered);
            let mut sorted = kept.clone();
            sorted.sort();
            assert_eq!(kept, sorted, "order for {term:?}");
            for p in &plants {
                let matches = p.name.to_lowercase().contains(&term.to_lowercase());
                assert_eq!(kept.contains(&p.id), matches, "{} vs {term:?}", p.name);
            }
        }
    }

    #[test]
    fn filter_ignores_case() {
        let mut plants = power_plants();
        plants[0].name = "Hallim SOLAR Park".into();
        assert_eq!(ids(&filter(&plants, "solar")), vec![1]);
        assert_eq!(ids(&filter(&plants, "sOlAr")), vec![1]);
    }

    #[test]
    fn page_count_has_floor_of_one() {
        assert_eq!(page_count(0, 6), 1);
        assert_eq!(page_count(1, 6), 1);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(12, 6), 2);
        assert_eq!(page_count(13, 6), 3);
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn page_lengths_fill_all_but_last() {
        for total in 0..20usize {
            let items: Vec<usize> = (0..total).collect();
            let count = page_count(total, 4);
            for page in 1..=count {
                let p = paginate(&items, page, 4);
                if page < count {
                    assert_eq!(p.items.len(), 4);
                } else {
                    assert_eq!(p.items.len(), total - (count - 1) * 4);
                }
            }
        }
    }

    #[test]
    fn out_of_range_pages_saturate() {
        let items: Vec<u8> = (0..10).collect();
        let low = paginate(&items, 0, 6);
        assert_eq!(low.page, 1);
        assert_eq!(low.items, items[0..6].to_vec());
        let high = paginate(&items, 99, 6);
        assert_eq!(high.page, 2);
        assert_eq!(high.items, items[6..10].to_vec());
    }

    #[test]
    fn full_list_splits_into_two_pages() {
        let plants = power_plants();
        let first = derive(&plants, &ViewState::default(), PAGE_SIZE);
        assert_eq!(ids(&first.items), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!((first.range_start, first.range_end), (1, 6));
        assert_eq!(first.page_count, 2);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let state = ViewState::default().on_page_change(1, first.page_count);
        let second = derive(&plants, &state, PAGE_SIZE);
        assert_eq!(ids(&second.items), vec![7, 8, 9, 10]);
        assert_eq!((second.range_start, second.range_end), (7, 10));
        assert!(second.has_prev());
        assert!(!second.has_next());
    }

    #[test]
    fn solar_search_fits_on_one_page() {
        let plants = power_plants();
        let state = ViewState::default().on_search_change("태양광");
        let page = derive(&plants, &state, PAGE_SIZE);
        assert_eq!(ids(&page.items), vec![1, 4, 9]);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.range_start, 1);
        assert_eq!(page.range_end, 3);
        assert!(!page.has_next());
    }

    #[test]
    fn no_match_renders_empty_first_page() {
        let plants = power_plants();
        let filtered = filter(&plants, "원자력");
        let page = paginate(&filtered, 1, PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.page_count, 1);
        assert_eq!((page.range_start, page.range_end), (0, 0));
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn search_change_resets_page() {
        let state = ViewState {
            search_term: "풍력".into(),
            current_page: 2,
        };
        let next = state.on_search_change("화력");
        assert_eq!(next.search_term, "화력");
        assert_eq!(next.current_page, 1);

        let cleared = next.on_page_change(1, 3).on_search_change("");
        assert_eq!(cleared.current_page, 1);
    }

    #[test]
    fn page_change_stays_within_bounds() {
        let mut state = ViewState::default();
        for _ in 0..5 {
            state = state.on_page_change(-1, 2);
            assert_eq!(state.current_page, 1);
        }
        for _ in 0..5 {
            state = state.on_page_change(1, 2);
            assert!((1..=2).contains(&state.current_page));
        }
        assert_eq!(state.current_page, 2);
        state = state.on_page_change(-1, 2);
        assert_eq!(state.current_page, 1);

        // an empty result set still has one page
        assert_eq!(state.on_page_change(1, 0).current_page, 1);
    }

    #[test]
    fn page_change_keeps_search_term() {
        let state = ViewState::default()
            .on_search_change("발전소")
            .on_page_change(1, 2);
        assert_eq!(state.search_term, "발전소");
        assert_eq!(state.current_page, 2);
    }
}
