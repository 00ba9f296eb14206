use std::time::Duration;

use woodshop_catalog::{
	Catalog, ManualClock, Product, RefreshPolicy, ScreenController, group_by_title, recompute,
};

fn scenario_catalog() -> Catalog {
	Catalog::new(vec![
		Product::new("1", "Chairs", "chair-1.jpg", 10.0),
		Product::new("2", "Tables", "table-2.jpg", 20.0),
		Product::new("3", "Chairs", "chair-3.jpg", 30.0),
	])
}

#[test]
fn section_titles_are_distinct_in_first_appearance_order() {
	let catalog = Catalog::builtin();
	let titles: Vec<_> = group_by_title(catalog.products())
		.into_iter()
		.map(|section| section.title)
		.collect();

	let mut expected: Vec<String> = Vec::new();
	for product in catalog.products() {
		if !expected.contains(&product.title) {
			expected.push(product.title.clone());
		}
	}
	assert_eq!(titles, expected);
}

#[test]
fn uppercase_query_matches_builtin_dining_table() {
	let sections = recompute("TABLE", &Catalog::builtin());
	assert!(sections.iter().any(|section| section.title == "Dining Table"));
	assert!(sections.iter().any(|section| section.title == "Tables"));
	assert!(sections.iter().all(|section| section.title.to_lowercase().contains("table")));
}

#[test]
fn refresh_ignores_interim_search_text() {
	let clock = ManualClock::new();
	let mut screen =
		ScreenController::with_clock(scenario_catalog(), RefreshPolicy::default(), clock.clone());

	screen.on_refresh();
	assert!(screen.state().refreshing());
	screen.on_search_change("chair");
	screen.on_search_change("chairs x");
	assert!(screen.state().sections().is_empty());

	clock.advance(Duration::from_secs(2));
	assert!(screen.tick());
	assert!(!screen.state().refreshing());
	assert_eq!(
		screen.state().sections(),
		group_by_title(screen.catalog().products()).as_slice()
	);
}

#[test]
fn catalog_file_round_trips_through_the_screen() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("catalog.json");
	std::fs::write(
		&path,
		r#"[
			{"id":"a","title":"Benches","imageUri":"bench.jpg","rate":"$75"},
			{"id":"b","title":"Desks","imageUri":"desk.jpg","rate":310},
			{"id":"c","title":"Benches","imageUri":"bench-2.jpg","rate":99.5}
		]"#,
	)
	.unwrap();

	let catalog = Catalog::load(&path).unwrap();
	let mut screen = ScreenController::new(catalog, RefreshPolicy::default());
	screen.on_search_change("bench");
	let sections = screen.state().sections();
	assert_eq!(sections.len(), 1);
	assert_eq!(sections[0].items[0].rate.to_string(), "$75");
	assert_eq!(sections[0].items[1].rate.to_string(), "99.5");
}
