//! Ordered grouping of dated records.

use crate::key::GroupKeyResolver;
use crate::model::Dated;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Records grouped under display labels.
///
/// Groups keep the order in which their label was first seen, and records
/// keep their input order inside a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RevisionGroups<T> {
    groups: IndexMap<String, Vec<T>>,
}

impl<T> Default for RevisionGroups<T> {
    fn default() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }
}

impl<T> RevisionGroups<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `records` with an arbitrary key function, in one pass.
    pub fn build<I, F>(records: I, mut key_of: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> String,
    {
        let mut table = Self::new();
        for record in records {
            let key = key_of(&record);
            table.push(key, record);
        }
        table
    }

    /// Append a record to the group for `key`, creating it at the end.
    pub fn push(&mut self, key: String, record: T) {
        self.groups.entry(key).or_default().push(record);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl<T: Dated> RevisionGroups<T> {
    /// Group records by their localized relative-date label.
    pub fn by_relative_date<I>(
        records: I,
        resolver: &GroupKeyResolver<'_>,
        now: DateTime<Utc>,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::build(records, |r| resolver.key_for(r.created_at(), now))
    }
}

impl<T> IntoIterator for RevisionGroups<T> {
    type Item = (String, Vec<T>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Revision;
    use crate::relative_date::RelativeDatePolicy;
    use pia_common_core::{PiaId, RevisionId};
    use pia_common_i18n::{CatalogTranslator, Locale};
    use pia_test_utils::{days_before, fixed_now, utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn revision(id: u64, created_at: DateTime<Utc>) -> Revision {
        Revision::new(RevisionId::new(id), PiaId::new(1), created_at)
    }

    fn group(revisions: Vec<Revision>, locale: Locale) -> RevisionGroups<Revision> {
        let policy = RelativeDatePolicy::default();
        let translator = CatalogTranslator::with_defaults(locale);
        let resolver = GroupKeyResolver::new(&policy, &translator);
        RevisionGroups::by_relative_date(revisions, &resolver, fixed_now())
    }

    fn ids(records: &[Revision]) -> Vec<u64> {
        records.iter().map(|r| r.id.get()).collect()
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let table = group(vec![], Locale::En);
        assert!(table.is_empty());
        assert_eq!(table.record_count(), 0);
    }

    #[test]
    fn test_single_revision_now() {
        let table = group(vec![revision(1, fixed_now())], Locale::En);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Today"]);
        assert_eq!(ids(table.get("Today").unwrap()), vec![1]);
    }

    #[test]
    fn test_first_seen_order_and_stable_members() {
        let now = fixed_now();
        let table = group(
            vec![
                revision(1, utc(2024, 1, 10, 9, 0)),
                revision(2, now),
                revision(3, utc(2024, 1, 2, 9, 0)),
                revision(4, days_before(now, 2)),
                revision(5, now),
            ],
            Locale::En,
        );

        assert_eq!(
            table.keys().collect::<Vec<_>>(),
            vec!["January 2024", "Today", "2 days ago"]
        );
        assert_eq!(ids(table.get("January 2024").unwrap()), vec![1, 3]);
        assert_eq!(ids(table.get("Today").unwrap()), vec![2, 5]);
    }

    #[test]
    fn test_locale_changes_keys_not_membership() {
        let now = fixed_now();
        let revisions = vec![revision(1, now), revision(2, days_before(now, 3))];

        let en = group(revisions.clone(), Locale::En);
        let fr = group(revisions, Locale::Fr);

        assert_eq!(fr.keys().collect::<Vec<_>>(), vec!["Aujourd'hui", "Il y a 3 jours"]);
        let en_members: Vec<_> = en.iter().map(|(_, r)| ids(r)).collect();
        let fr_members: Vec<_> = fr.iter().map(|(_, r)| ids(r)).collect();
        assert_eq!(en_members, fr_members);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let table = RevisionGroups::build(vec![3, 1, 2], |n| format!("k{}", n % 2));
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"k1":[3,1],"k0":[2]}"#);
    }

    proptest! {
        #[test]
        fn test_every_record_in_exactly_one_group(
            ages in prop::collection::vec(0i64..(400 * 24), 0..60)
        ) {
            let now = fixed_now();
            let revisions: Vec<_> = ages
                .iter()
                .enumerate()
                .map(|(i, hours)| revision(i as u64, now - chrono::Duration::hours(*hours)))
                .collect();

            let table = group(revisions.clone(), Locale::En);
            prop_assert_eq!(table.record_count(), revisions.len());

            let mut seen: Vec<u64> = table.iter().flat_map(|(_, r)| ids(r)).collect();
            seen.sort_unstable();
            let expected: Vec<u64> = (0..revisions.len() as u64).collect();
            prop_assert_eq!(seen, expected);

            // keys in first-seen order
            let policy = RelativeDatePolicy::default();
            let translator = CatalogTranslator::with_defaults(Locale::En);
            let resolver = GroupKeyResolver::new(&policy, &translator);
            let mut first_seen: Vec<String> = Vec::new();
            for r in &revisions {
                let k = resolver.key_for(r.created_at, now);
                if !first_seen.contains(&k) {
                    first_seen.push(k);
                }
            }
            prop_assert_eq!(table.keys().map(str::to_string).collect::<Vec<_>>(), first_seen);
        }
    }
}
