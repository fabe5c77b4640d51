use tunnel_runner::clip::ClipCatalog;
use tunnel_runner::render::ModelHandle;
use tunnel_runner::selector::{AnimationSelector, ClipRole};
use tunnel_runner::{Renderer, StubRenderer};

#[test]
fn fixture_catalog_loads_and_resolves_roles() {
    let catalog = ClipCatalog::from_file("fixtures/clips.json").expect("load catalog fixture");
    assert_eq!(catalog.len(), 5);

    let idle = catalog.get(0).expect("first entry");
    assert_eq!(idle.name.as_ref(), "Idle");
    assert!((idle.duration - 2.0).abs() < f32::EPSILON);
    assert_eq!(idle.keyframe_count, 30);

    let selector = AnimationSelector::new(catalog);
    for role in ClipRole::ALL {
        assert!(selector.role_index(role).is_some(), "{role:?} should resolve against the fixture");
    }
    // "Wave" is a valid catalog entry but carries no gameplay role.
    assert_eq!(selector.clip_count(), 5);
}

#[test]
fn stub_renderer_serves_the_fixture_catalog() {
    let renderer = StubRenderer::from_catalog_file("fixtures/clips.json").expect("renderer");
    let catalog = renderer.clip_catalog(ModelHandle(1));
    assert_eq!(catalog.find("Jump"), Some(3));
}

#[test]
fn missing_catalog_file_is_an_error() {
    assert!(ClipCatalog::from_file("fixtures/no_such_catalog.json").is_err());
}
