use std::collections::BTreeSet;

use crate::input::SelectableInput;

/// Distinct values among the checked inputs at one submission attempt.
///
/// Recomputed for every attempt; nothing is cached between attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    values: BTreeSet<String>,
}

impl SelectionSnapshot {
    /// Unchecked inputs are skipped; repeated values count once.
    pub fn capture<'a, I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = &'a SelectableInput>,
    {
        let values = inputs
            .into_iter()
            .filter(|input| input.checked)
            .map(|input| input.value.clone())
            .collect();
        SelectionSnapshot { values }
    }

    pub fn distinct_count(&self) -> usize {
        self.values.len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Values in sorted order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_count_once() {
        let inputs = vec![
            SelectableInput::new("A", true).with_name("card0"),
            SelectableInput::new("A", true).with_name("card1"),
        ];
        let snapshot = SelectionSnapshot::capture(&inputs);
        assert_eq!(snapshot.distinct_count(), 1);
        assert!(snapshot.contains("A"));
    }

    #[test]
    fn unchecked_inputs_are_ignored() {
        let inputs = vec![
            SelectableInput::new("A", false),
            SelectableInput::new("B", true),
            SelectableInput::new("C", false),
        ];
        let snapshot = SelectionSnapshot::capture(&inputs);
        assert_eq!(snapshot.values().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn empty_selection() {
        let snapshot = SelectionSnapshot::capture(&Vec::<SelectableInput>::new());
        assert_eq!(snapshot.distinct_count(), 0);
    }
}
