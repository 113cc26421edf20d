use crumbtrail_cli::core::PageId;
use crumbtrail_cli::directive::extract_declaration;
use crumbtrail_cli::host::{ContentProvider, PageExistence, PageResolver};
use crumbtrail_cli::markup::HtmlLinkRenderer;
use crumbtrail_cli::resolver::{ChainResolver, Dependency, SelfDisplay};
use crumbtrail_cli::seeder::PreloadSeeder;
use crumbtrail_cli::test_utils::{PageTreeFixture, init_test_logging};

#[test]
fn test_pages_are_stored_by_namespace() {
    let fixture = PageTreeFixture::new().unwrap();
    let main = fixture.page("Getting started", "a").unwrap();
    let help = fixture.page("Help:Tom & Jerry", "b").unwrap();

    assert_eq!(main, fixture.root().join("Getting_started.wiki"));
    assert_eq!(help, fixture.root().join("Help").join("Tom_%26_Jerry.wiki"));

    let store = fixture.store();
    let page = store.resolve("help:Tom_&_Jerry").unwrap();
    assert!(store.exists(&page));
    assert_eq!(store.latest_revision(&page).unwrap().text, "b");
}

#[test]
fn test_render_over_directory_store() {
    init_test_logging(None);
    let fixture = PageTreeFixture::new().unwrap();
    fixture.page("Help:Contents", "Start here.").unwrap();
    fixture.page("Help:Editing", "<crumb:trail>Help:Contents|Help</crumb:trail>\nHow to edit.").unwrap();
    fixture
        .page("Help:Tables", r#"<crumb:trail self="Tables">Help:Editing|Editing</crumb:trail>"#)
        .unwrap();

    let settings = fixture.config();
    let store = fixture.store();
    let links = HtmlLinkRenderer::from_config(&settings.links);

    let page = store.resolve("Help:Tables").unwrap();
    let text = store.latest_revision(&page).unwrap().text;
    let declaration = extract_declaration(&text).unwrap();
    let self_display = SelfDisplay::from_attribute(declaration.self_label.as_deref());
    let result =
        ChainResolver::new(&store, &links, &settings.breadcrumb).resolve_chain(&page, &declaration, &self_display);

    assert_eq!(
        result.trail,
        concat!(
            r#"<a href="/wiki/Help:Contents" title="Help:Contents">Help</a> &gt; "#,
            r#"<a href="/wiki/Help:Editing" title="Help:Editing">Editing</a> &gt; "#,
            "Tables"
        )
    );
    assert!(result.markup.starts_with(r#"<div id="crumbtrail" class="noprint">"#));
}

#[test]
fn test_content_revisions_follow_file_changes() {
    let fixture = PageTreeFixture::new().unwrap();
    fixture.page("Root", "first").unwrap();
    let store = fixture.store();
    let settings = fixture.config();
    let links = HtmlLinkRenderer::from_config(&settings.links);
    let page = PageId::new("", "Leaf");

    let revision_of = |dependencies: &[Dependency]| {
        dependencies.iter().find_map(|dependency| match dependency {
            Dependency::Content {
                revision,
                ..
            } => Some(revision.clone()),
            Dependency::Link {
                ..
            } => None,
        })
    };

    let resolver = ChainResolver::new(&store, &links, &settings.breadcrumb);
    let before = revision_of(&resolver.render_directive(&page, "Root", None).dependencies).unwrap();
    fixture.page("Root", "second").unwrap();
    let after = revision_of(&resolver.render_directive(&page, "Root", None).dependencies).unwrap();

    assert_eq!(before.len(), 12);
    assert_ne!(before, after);
}

#[test]
fn test_seeder_over_directory_store() {
    let fixture = PageTreeFixture::new().unwrap();
    fixture.page("Project:Road map", r#"<crumb:trail self="Plans">Project:Home</crumb:trail>"#).unwrap();
    fixture.page("Project:Notes", "no directive").unwrap();

    let store = fixture.store();
    let seeder = PreloadSeeder::new(&store);

    assert_eq!(
        seeder.suggest("https://wiki.example.org/Project:Road_map", "/").as_deref(),
        Some("<crumb:trail>Project:Road map|Plans</crumb:trail>")
    );
    assert_eq!(seeder.suggest("https://wiki.example.org/Project:Notes", "/"), None);
}
