/// Assignment Board: Pool Filter
///
/// Pure, read-only. Never recorded in history.

use crate::domain::Person;

/// Keep persons whose name, role title or any skill contains `query`,
/// case-insensitively. Order is preserved; an empty query keeps all.
pub fn filter_persons<'a, I>(persons: I, query: &str) -> Vec<&'a Person>
where
    I: IntoIterator<Item = &'a Person>,
{
    let needle = query.to_lowercase();
    persons
        .into_iter()
        .filter(|p| matches_query(p, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query(person: &Person, needle: &str) -> bool {
    person.name.to_lowercase().contains(needle)
        || person.role_title.to_lowercase().contains(needle)
        || person
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Source;
    use crate::state::{create_initial_snapshot, default_seed};
    use crate::transitions::apply_move;

    fn ids(persons: &[&Person]) -> Vec<String> {
        persons.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_matches_name_title_and_skill() {
        let snap = create_initial_snapshot(&default_seed()).unwrap();
        let pool = snap.pool();
        assert_eq!(ids(&filter_persons(pool.iter().copied(), "jane")), vec!["2"]);
        assert_eq!(ids(&filter_persons(pool.iter().copied(), "DEVELOPER")), vec!["1", "4"]);
        assert_eq!(ids(&filter_persons(pool.iter().copied(), "jest")), vec!["3"]);
        assert_eq!(ids(&filter_persons(pool.iter().copied(), "ui/ux")), vec!["2"]);
    }

    #[test]
    fn test_empty_query_keeps_order() {
        let snap = create_initial_snapshot(&default_seed()).unwrap();
        let all = filter_persons(snap.pool(), "");
        assert_eq!(ids(&all), vec!["1", "2", "3", "4"]);
        assert!(filter_persons(snap.pool(), "cobol").is_empty());
    }

    #[test]
    fn test_only_pool_members_are_candidates() {
        let s0 = create_initial_snapshot(&default_seed()).unwrap();
        let (s1, _) = apply_move(&s0, "1", "p1", &Source::Pool).unwrap();
        assert!(filter_persons(s1.pool(), "doe").is_empty());
        // "john" still hits Mike Johnson by substring
        assert_eq!(ids(&filter_persons(s1.pool(), "john")), vec!["3"]);
    }
}
