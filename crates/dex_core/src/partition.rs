use crate::SummaryRecord;

/// Splits `records` at `ceil(len / 2)`; the first half takes the extra element.
pub fn partition<T>(records: &[T]) -> (&[T], &[T]) {
    let half = records.len().div_ceil(2);
    records.split_at(half)
}

/// Case-insensitive substring match; an empty term matches everything.
pub fn matches_search(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Indices into the working set shown on each of the two tabs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabView {
    pub first: Vec<usize>,
    pub second: Vec<usize>,
}

impl TabView {
    /// Filters `records` by `term` and partitions the surviving indices.
    pub fn build(records: &[SummaryRecord], term: &str) -> Self {
        let candidates: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches_search(&record.name, term))
            .map(|(index, _)| index)
            .collect();
        let (first, second) = partition(&candidates);
        Self {
            first: first.to_vec(),
            second: second.to_vec(),
        }
    }

    pub fn tab(&self, index: usize) -> &[usize] {
        match index {
            0 => &self.first,
            1 => &self.second,
            _ => &[],
        }
    }
}

/// How the active tab follows a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectRule {
    /// Switch to the other tab whenever it has matches, even if the active
    /// tab still has some.
    #[default]
    Eager,
    /// Switch only when the active tab is empty and the other one is not.
    WhenEmpty,
}

/// Decides which tab is active after a search repartitioned the views.
pub fn redirect_tab(active: usize, view: &TabView, rule: RedirectRule) -> usize {
    let first_has = !view.first.is_empty();
    let second_has = !view.second.is_empty();
    match rule {
        RedirectRule::Eager => {
            if active == 0 && second_has {
                1
            } else if active == 1 && first_has {
                0
            } else {
                active
            }
        }
        RedirectRule::WhenEmpty => {
            if active == 0 && !first_has && second_has {
                1
            } else if active == 1 && !second_has && first_has {
                0
            } else {
                active
            }
        }
    }
}
