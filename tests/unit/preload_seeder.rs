use crumbtrail_cli::directive::extract_declaration;
use crumbtrail_cli::host::MemoryPageStore;
use crumbtrail_cli::seeder::PreloadSeeder;

#[test]
fn test_parent_without_directive_gets_no_suggestion() {
    let mut store = MemoryPageStore::new();
    store.insert("Parent_Page", "An ordinary page.").unwrap();

    let seeder = PreloadSeeder::new(&store);
    assert_eq!(seeder.suggest("https://wiki.example.org/Parent_Page", "/"), None);
}

#[test]
fn test_suggestion_points_back_at_parent() {
    let mut store = MemoryPageStore::new();
    store.insert("Parent_Page", "<crumb:trail>Root</crumb:trail>").unwrap();

    let seeder = PreloadSeeder::new(&store);
    let suggestion = seeder.suggest("https://wiki.example.org/Parent_Page", "/").unwrap();

    let declaration = extract_declaration(&suggestion).unwrap();
    assert_eq!(declaration.parent_path, "Parent Page");
    assert_eq!(declaration.display_label, None);
}

#[test]
fn test_suggestion_uses_parent_self_label() {
    let mut store = MemoryPageStore::with_namespaces(["Project"]);
    store
        .insert("Project:Road map", r#"<crumb:trail self="Plans">Project:Home</crumb:trail>"#)
        .unwrap();

    let seeder = PreloadSeeder::new(&store);
    let suggestion = seeder
        .suggest("https://wiki.example.org/index.php?title=Project:Road_map&action=edit&redlink=1", "?title=")
        .unwrap();

    let declaration = extract_declaration(&suggestion).unwrap();
    assert_eq!(declaration.parent_path, "Project:Road map");
    assert_eq!(declaration.display_label.as_deref(), Some("Plans"));
}

#[test]
fn test_percent_encoded_referrer() {
    let mut store = MemoryPageStore::new();
    store.insert("Café menu", "<crumb:trail>Food</crumb:trail>").unwrap();

    let seeder = PreloadSeeder::new(&store);
    assert_eq!(
        seeder.suggest("https://wiki.example.org/Caf%C3%A9_menu", "/").as_deref(),
        Some("<crumb:trail>Café menu</crumb:trail>")
    );
}

#[test]
fn test_unknown_parent_gets_no_suggestion() {
    let store = MemoryPageStore::new();
    let seeder = PreloadSeeder::new(&store);

    assert_eq!(seeder.suggest("https://wiki.example.org/index.php?title=Nobody", "?title="), None);
    assert_eq!(seeder.suggest("not a url at all", "?title="), None);
}
