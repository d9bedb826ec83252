use rank_table::{Merge, RankTable};

#[derive(Debug, Clone, PartialEq)]
struct Tag {
    name: String,
    aliases: Vec<String>,
}

impl Tag {
    fn new(name: &str) -> Self {
        Tag {
            name: name.to_string(),
            aliases: vec![],
        }
    }

    fn with_alias(name: &str, alias: &str) -> Self {
        Tag {
            name: name.to_string(),
            aliases: vec![alias.to_string()],
        }
    }
}

impl Merge for Tag {
    fn merge(&mut self, other: Self) {
        for alias in other.aliases {
            if !self.aliases.contains(&alias) {
                self.aliases.push(alias);
            }
        }
    }
}

#[test]
fn test_counts_and_canonical_instance() {
    let mut table = RankTable::new();
    table.add("a", Tag::new("a"));
    table.add("a", Tag::new("a"));
    table.add("b", Tag::new("b"));

    assert_eq!(table.len(), 2);
    assert_eq!(table.count_of("a"), Some(2));
    assert_eq!(table.count_of("b"), Some(1));
    assert_eq!(table.count_of("c"), None);
}

#[test]
fn test_get_does_not_register() {
    let mut table = RankTable::new();
    table.add("a", Tag::new("a"));

    let fallback = Tag::new("b");
    assert_eq!(table.get_or("b", &fallback), &fallback);
    assert_eq!(table.get("b"), None);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get_or("a", &fallback).name, "a");
}

#[test]
fn test_merge_on_duplicate_registration() {
    let mut table = RankTable::new();
    table.add("a", Tag::with_alias("a", "first"));
    table.add("a", Tag::with_alias("a", "second"));
    table.add("a", Tag::with_alias("a", "first"));

    let tag = table.get("a").unwrap();
    assert_eq!(tag.aliases, vec!["first".to_string(), "second".to_string()]);
    assert_eq!(table.count_of("a"), Some(3));
}

#[test]
fn test_ids_ordered_by_descending_count() {
    let mut table = RankTable::new();
    for _ in 0..2 {
        table.add("middling", Tag::new("middling"));
    }
    for _ in 0..5 {
        table.add("common", Tag::new("common"));
    }
    table.add("rare", Tag::new("rare"));
    table.finalize_ids();

    assert_eq!(table.id_of("common"), Some(0));
    assert_eq!(table.id_of("middling"), Some(1));
    assert_eq!(table.id_of("rare"), Some(2));
}

#[test]
fn test_ids_are_dense_permutation() {
    let mut table = RankTable::new();
    for i in 0..50 {
        let key = format!("key_{i}");
        for _ in 0..(i % 7 + 1) {
            table.add(key.clone(), Tag::new(&key));
        }
    }
    table.finalize_ids();

    let mut ids: Vec<u32> = (0..50)
        .map(|i| table.id_of(&format!("key_{i}")).unwrap())
        .collect();
    ids.sort_unstable();
    let expected: Vec<u32> = (0..50).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_ties_keep_first_seen_order() {
    let mut table = RankTable::new();
    table.add("first", Tag::new("first"));
    table.add("second", Tag::new("second"));
    table.add("third", Tag::new("third"));
    table.finalize_ids();

    assert_eq!(table.id_of("first"), Some(0));
    assert_eq!(table.id_of("second"), Some(1));
    assert_eq!(table.id_of("third"), Some(2));
}

#[test]
fn test_iter_ranked_matches_id_order() {
    let mut table = RankTable::new();
    table.add("x", Tag::new("x"));
    for _ in 0..3 {
        table.add("y", Tag::new("y"));
    }
    table.add("z", Tag::new("z"));
    table.finalize_ids();

    let names: Vec<&str> = table.iter_ranked().map(|tag| tag.name.as_str()).collect();
    assert_eq!(names, vec!["y", "x", "z"]);
}

#[test]
fn test_no_ids_before_finalize() {
    let mut table = RankTable::new();
    table.add("a", Tag::new("a"));
    assert_eq!(table.id_of("a"), None);
}

#[test]
#[should_panic(expected = "finalize_ids")]
fn test_add_after_finalize_panics() {
    let mut table = RankTable::new();
    table.add("a", Tag::new("a"));
    table.finalize_ids();
    table.add("b", Tag::new("b"));
}
