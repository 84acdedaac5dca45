use coryn::{
    classify, normalize_stat, prepare, search, Item, QueryMode, Score, SearchEngine,
    SearchOptions,
};

fn collection() -> Vec<Item> {
    vec![
        Item::new("1", "Dragon Bow", "Bow").with_stats("ATK: 120; ASPD: 300"),
        Item::new("2", "Ruby Katana", "Katana").with_stats("ATK: 150; Critical Rate: 12"),
        Item::new("3", "Hunter Bowgun", "Bowgun").with_stats("ATK: 90; ASPD: 300"),
        Item::new("4", "Dragon Armor", "Armor").with_stats("DEF: 80; ASPD: -100"),
        Item::new("5", "Sage Staff", "Staff").with_stats("MATK: 140; CSPD: 450"),
        Item::new("6", "Wind Knuckles", "Knuckles").with_stats("ATK: 70; ASPD: 800"),
        Item::new("7", "Feather Hat", "Additional"),
        Item::new("8", "Dragon Slayer", "1 Handed Sword").with_stats("ATK: 150"),
    ]
}

fn ids<'a>(results: &[coryn::MatchResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.item.id.0.as_str()).collect()
}

#[test]
fn every_query_selects_exactly_one_mode() {
    let cases = [
        ("", QueryMode::Empty),
        ("stat:aspd", QueryMode::Stat("aspd".into())),
        ("Stat: dtfire", QueryMode::Stat("% stronger against fire".into())),
        ("all", QueryMode::Category(None)),
        ("ALL md", QueryMode::Category(Some("magic device".into()))),
        ("stat", QueryMode::Name("stat".into())),
        ("allure", QueryMode::Name("allure".into())),
    ];
    for (query, expected) in cases {
        assert_eq!(classify(query), expected, "query: {query:?}");
    }
}

#[test]
fn all_ignores_limit() {
    let items = collection();
    let results = search("all", &items, 5, false).unwrap();
    assert_eq!(results.len(), items.len());
    assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[test]
fn category_alias_lists_matching_type() {
    let items = collection();
    assert_eq!(ids(&search("all 1h", &items, 1, false).unwrap()), vec!["8"]);
    assert_eq!(ids(&search("all knuck", &items, 1, false).unwrap()), vec!["6"]);
    assert_eq!(ids(&search("all bg", &items, 1, false).unwrap()), vec!["3"]);
}

#[test]
fn unknown_category_is_empty_not_error() {
    let items = collection();
    let results = search("all qqqq", &items, 5, false).unwrap();
    assert!(results.is_empty());
}

#[test]
fn stat_ranking_is_stable_for_ties() {
    let items = collection();
    let results = search("stat: atk", &items, 10, false).unwrap();
    // items 2 and 8 tie at 150; 5 reads its MATK entry
    assert_eq!(ids(&results), vec!["2", "8", "5", "1", "3", "6"]);

    let values: Vec<f64> = results.iter().map(|r| r.score.unwrap().value()).collect();
    assert_eq!(values, vec![150.0, 150.0, 140.0, 120.0, 90.0, 70.0]);
}

#[test]
fn stat_ranking_ascending() {
    let items = collection();
    let results = search("stat: attack speed", &items, 2, true).unwrap();
    assert_eq!(ids(&results), vec!["4", "1"]);
    assert_eq!(results[0].score, Some(Score::Stat(-100.0)));
}

#[test]
fn name_search_bounds() {
    let items = collection();
    for k in 1..=4 {
        let results = search("dragon", &items, k, false).unwrap();
        assert!(results.len() <= k);
        for r in &results {
            match r.score {
                Some(Score::Match(s)) => assert!(s >= 50.0),
                other => panic!("unexpected score {other:?}"),
            }
        }
    }
    let results = search("dragon", &items, 10, false).unwrap();
    assert_eq!(ids(&results), vec!["1", "4", "8"]);
}

#[test]
fn name_search_is_case_and_punctuation_insensitive() {
    let items = collection();
    let results = search("RUBY  katana!!", &items, 3, false).unwrap();
    assert_eq!(results[0].item.id.0, "2");
    assert_eq!(results[0].score, Some(Score::Match(100.0)));
}

#[test]
fn stricter_name_cutoff_drops_weak_matches() {
    let items = collection();
    let engine = SearchEngine::new(SearchOptions {
        name_cutoff: 100.0,
        ..SearchOptions::default()
    });
    let results = engine.search("dragon bow", &items, 10, false).unwrap();
    assert_eq!(ids(&results), vec!["1"]);
}

#[test]
fn normalization_examples() {
    assert_eq!(prepare("  ASPD   %  "), "aspd");
    assert_eq!(normalize_stat("dtfire 10"), "% stronger against fire 10");
    let once = normalize_stat("natural mp and ampr");
    assert_eq!(normalize_stat(&once), once);
}

#[test]
fn engine_is_shareable_across_threads() {
    let items = std::sync::Arc::new(collection());
    let engine = std::sync::Arc::new(SearchEngine::default());

    let handles: Vec<_> = ["stat: atk", "all bow", "dragon"]
        .into_iter()
        .map(|query| {
            let items = items.clone();
            let engine = engine.clone();
            std::thread::spawn(move || engine.search(query, &items, 5, false).unwrap().len())
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![5, 1, 3]);
}
