use rand::seq::IndexedRandom;

/// Pick one name uniformly at random, optionally narrowed to names that
/// contain `filter` as a case-sensitive substring.
///
/// Returns `None` when nothing matches so the caller decides how an empty
/// candidate set surfaces, instead of indexing into an empty list.
pub fn pick<'a>(names: &'a [String], filter: Option<&str>) -> Option<&'a str> {
    let candidates: Vec<&String> = match filter {
        Some(filter) => names.iter().filter(|name| name.contains(filter)).collect(),
        None => names.iter().collect(),
    };

    candidates
        .choose(&mut rand::rng())
        .map(|name| name.as_str())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::pick;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(pick(&[], None), None);
    }

    #[test]
    fn test_no_matches() {
        let stories = names(&["story_a.txt", "story_b.txt"]);

        assert_eq!(pick(&stories, Some("zzz")), None);
    }

    #[test]
    fn test_singleton_is_deterministic() {
        let stories = names(&["story_abc.txt"]);

        for _ in 0..20 {
            assert_eq!(pick(&stories, None), Some("story_abc.txt"));
        }
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let stories = names(&["story_abc.txt"]);

        assert_eq!(pick(&stories, Some("ABC")), None);
        assert_eq!(pick(&stories, Some("abc")), Some("story_abc.txt"));
    }

    #[test]
    fn test_filter_narrows_candidates() {
        let stories = names(&["story_cat.txt", "story_dog.txt", "story_catalog.txt"]);

        for _ in 0..50 {
            let picked = pick(&stories, Some("cat")).unwrap();
            assert!(picked.contains("cat"));
        }
    }

    #[test]
    fn test_every_candidate_reachable() {
        let stories = names(&["a", "b", "c"]);
        let seen: HashSet<&str> = (0..200).filter_map(|_| pick(&stories, None)).collect();

        assert_eq!(seen.len(), 3);
    }
}
