//! Behavioral tests for the browse engine: filtering soundness and
//! completeness, sort orders, and the query-string contract.

use chrono::{TimeZone, Utc};
use nukoken_core::{Criteria, Recipe, SortKey};

fn recipe(id: i32, title: &str, day: u32) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        slug: nukoken_core::slugify(title),
        description: format!("Beschrijving van {}", title),
        image_url: "/placeholder-recipe.jpg".to_string(),
        categories: vec!["Pasta".to_string()],
        prep_time: 10,
        cook_time: 20,
        servings: 4,
        tags: String::new(),
        ingredients: String::new(),
        instructions: "Stap 1".to_string(),
        serving_suggestions: None,
        is_popular: false,
        created_at: Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap(),
    }
}

/// Four recipes in the order the store hands them out (newest first).
fn sample_collection() -> Vec<Recipe> {
    let mut taart = recipe(3, "Appeltaart", 10);
    taart.categories = vec!["Taarten & Cakes".to_string()];
    taart.tags = "zoet, bakken".to_string();
    taart.ingredients = "6 appels\n300 gr bloem\nkaneel".to_string();
    taart.prep_time = 30;
    taart.cook_time = 60;
    taart.servings = 8;

    let mut salade = recipe(4, "Frisse Zomersalade", 7);
    salade.categories = vec!["Salades".to_string()];
    salade.tags = "vegetarisch, snel".to_string();
    salade.ingredients = "komkommer\n1 ui\nfeta".to_string();
    salade.prep_time = 15;
    salade.cook_time = 0;
    salade.servings = 2;

    let mut soep = recipe(2, "Tomatensoep", 5);
    soep.categories = vec!["Soep".to_string(), "Groenten".to_string()];
    soep.tags = "vegetarisch, gezond".to_string();
    soep.ingredients = "1 kg tomaten\n1 ui\nbouillon".to_string();
    soep.prep_time = 5;
    soep.cook_time = 25;

    let mut carbonara = recipe(1, "Romige Pasta Carbonara", 1);
    carbonara.tags = "italiaans, comfort food".to_string();
    carbonara.ingredients = "250 gr spaghetti\n2 eieren\npecorino".to_string();
    carbonara.is_popular = true;

    vec![taart, salade, soep, carbonara]
}

#[test]
fn empty_criteria_returns_collection_unchanged() {
    let recipes = sample_collection();
    let result = Criteria::default().apply(&recipes);
    assert_eq!(result, recipes);
}

#[test]
fn every_result_satisfies_every_active_predicate() {
    let recipes = sample_collection();
    let criteria = Criteria {
        tag: Some("vegetarisch".to_string()),
        max_time: Some("30".to_string()),
        ..Criteria::default()
    };

    let result = criteria.apply(&recipes);
    assert!(!result.is_empty());
    for r in &result {
        assert!(r.tags.to_lowercase().contains("vegetarisch"), "{}", r.title);
        assert!(r.total_time() <= 30, "{}", r.title);
    }

    // Completeness: nothing outside the result set matches everything.
    let result_ids: Vec<i32> = result.iter().map(|r| r.id).collect();
    for r in &recipes {
        if !result_ids.contains(&r.id) {
            assert!(!criteria.matches(r), "{} should have matched", r.title);
        }
    }
}

#[test]
fn search_matches_any_text_field() {
    let recipes = sample_collection();

    let by_title = Criteria {
        search: Some("carbonara".to_string()),
        ..Criteria::default()
    };
    assert_eq!(by_title.apply(&recipes).len(), 1);

    let by_ingredient = Criteria {
        search: Some("SPAGHETTI".to_string()),
        ..Criteria::default()
    };
    assert_eq!(by_ingredient.apply(&recipes)[0].id, 1);

    let by_tag = Criteria {
        search: Some("bakken".to_string()),
        ..Criteria::default()
    };
    assert_eq!(by_tag.apply(&recipes)[0].id, 3);
}

#[test]
fn category_filter_matches_any_membership() {
    let recipes = sample_collection();
    let criteria = Criteria {
        category: Some("groenten".to_string()),
        ..Criteria::default()
    };
    let result = criteria.apply(&recipes);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 2);

    // Exact membership, not substring: "Taarten" alone matches nothing.
    let partial = Criteria {
        category: Some("Taarten".to_string()),
        ..Criteria::default()
    };
    assert!(partial.apply(&recipes).is_empty());
}

#[test]
fn ingredient_filter_is_substring_containment() {
    let recipes = sample_collection();
    let criteria = Criteria {
        ingredient: Some("ui".to_string()),
        ..Criteria::default()
    };
    let ids: Vec<i32> = criteria.apply(&recipes).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 2]);
}

#[test]
fn numeric_bounds_are_inclusive_and_lenient() {
    let recipes = sample_collection();

    let servings = Criteria {
        max_servings: Some("4".to_string()),
        ..Criteria::default()
    };
    let ids: Vec<i32> = servings.apply(&recipes).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 2, 1]);

    let malformed = Criteria {
        max_servings: Some("vier".to_string()),
        max_time: Some("30min".to_string()),
        ..Criteria::default()
    };
    assert_eq!(malformed.apply(&recipes).len(), recipes.len());
}

#[test]
fn sort_orders() {
    let recipes = sample_collection();

    let oldest = Criteria {
        sort: SortKey::Oldest,
        ..Criteria::default()
    };
    let ids: Vec<i32> = oldest.apply(&recipes).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 3]);

    let popular = Criteria {
        sort: SortKey::Popular,
        ..Criteria::default()
    };
    assert_eq!(popular.apply(&recipes)[0].id, 1);

    let quickest = Criteria {
        sort: SortKey::TimeAsc,
        ..Criteria::default()
    };
    let ids: Vec<i32> = quickest.apply(&recipes).iter().map(|r| r.id).collect();
    // Soup and carbonara tie at 30 minutes and keep their input order.
    assert_eq!(ids, vec![4, 2, 1, 3]);

    let most_servings = Criteria {
        sort: SortKey::ServingsDesc,
        ..Criteria::default()
    };
    assert_eq!(most_servings.apply(&recipes)[0].id, 3);
}

#[test]
fn alphabetical_sort_is_case_folded_and_idempotent() {
    let recipes = sample_collection();
    let criteria = Criteria {
        sort: SortKey::Alphabetical,
        ..Criteria::default()
    };

    let once = criteria.apply(&recipes);
    let titles: Vec<&str> = once.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Appeltaart",
            "Frisse Zomersalade",
            "Romige Pasta Carbonara",
            "Tomatensoep",
        ]
    );

    let twice = criteria.apply(&once);
    assert_eq!(twice, once);
}

#[test]
fn query_string_reconstructs_the_view() {
    let criteria = Criteria {
        search: Some("kip".to_string()),
        category: Some("Soep".to_string()),
        max_time: Some("45".to_string()),
        sort: SortKey::TimeDesc,
        ..Criteria::default()
    };

    let query = criteria.to_query_string();
    let reparsed: Criteria = serde_urlencoded::from_str(&query).unwrap();
    assert_eq!(reparsed, criteria);

    let recipes = sample_collection();
    assert_eq!(reparsed.apply(&recipes), criteria.apply(&recipes));
}
