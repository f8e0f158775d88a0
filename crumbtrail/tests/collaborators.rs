//! Integration tests for the router and translator seams using mocks.

use crumbtrail::{resolve_breadcrumbs, Error, Result, RouteRecord, Router, Translator};
use mockall::predicate::eq;
use mockall::{mock, Sequence};

mock! {
    pub AppRouter {}

    impl Router for AppRouter {
        fn resolve(&self, path: &str) -> Result<Option<Vec<RouteRecord>>>;
    }
}

mock! {
    pub AppTranslator {}

    impl Translator for AppTranslator {
        fn translate(&self, key: &str, fallback: &str) -> Result<String>;
    }
}

#[test]
fn test_router_called_once_per_prefix_in_order() {
    let mut router = MockAppRouter::new();
    let mut seq = Sequence::new();
    for path in ["/", "/docs", "/docs/guide"] {
        router
            .expect_resolve()
            .with(eq(path))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
    }

    let trail = resolve_breadcrumbs("/docs/guide", &router, None).unwrap();
    assert_eq!(trail.len(), 3);
}

#[test]
fn test_translator_receives_key_and_fallback() {
    let mut router = MockAppRouter::new();
    router.expect_resolve().with(eq("/")).returning(|_| {
        Ok(Some(vec![RouteRecord::named("index", "/").with_title("Home")]))
    });
    router.expect_resolve().with(eq("/about")).returning(|_| {
        Ok(Some(vec![
            RouteRecord::named("index", "/"),
            RouteRecord::named("about___de", "/about"),
        ]))
    });

    let mut translator = MockAppTranslator::new();
    translator
        .expect_translate()
        .with(eq("breadcrumb.items.index.label"), eq("Home"))
        .times(1)
        .returning(|_, fallback| Ok(fallback.to_string()));
    translator
        .expect_translate()
        .with(eq("breadcrumb.items.about.label"), eq("About"))
        .times(1)
        .returning(|_, _| Ok("Über uns".to_string()));

    let trail = resolve_breadcrumbs("/about", &router, Some(&translator)).unwrap();
    assert_eq!(trail[0].label, "Home");
    assert_eq!(trail[1].label, "Über uns");
}

#[test]
fn test_unnamed_record_uses_empty_name_in_key() {
    let mut router = MockAppRouter::new();
    router.expect_resolve().returning(|path| {
        Ok(Some(vec![RouteRecord {
            name: None,
            title: None,
            path: path.to_string(),
        }]))
    });

    let mut translator = MockAppTranslator::new();
    translator
        .expect_translate()
        .withf(|key, _| key == "breadcrumb.items..label")
        .times(2)
        .returning(|_, fallback| Ok(fallback.to_string()));

    let trail = resolve_breadcrumbs("/x", &router, Some(&translator)).unwrap();
    assert_eq!(trail[1].label, "X");
}

#[test]
fn test_router_error_propagates() {
    let mut router = MockAppRouter::new();
    router.expect_resolve().with(eq("/")).returning(|_| Ok(None));
    router.expect_resolve().with(eq("/broken")).returning(|path| {
        Err(Error::Router {
            path: path.to_string(),
            reason: "table unavailable".to_string(),
        })
    });

    let err = resolve_breadcrumbs("/broken/deeper", &router, None).unwrap_err();
    assert!(matches!(err, Error::Router { ref path, .. } if path == "/broken"));
    assert!(err.is_collaborator());
}

#[test]
fn test_translator_error_propagates() {
    let mut router = MockAppRouter::new();
    router.expect_resolve().returning(|_| Ok(None));

    let mut translator = MockAppTranslator::new();
    translator.expect_translate().returning(|key, _| {
        Err(Error::Translator {
            key: key.to_string(),
            reason: "catalog not loaded".to_string(),
        })
    });

    let err = resolve_breadcrumbs("/a", &router, Some(&translator)).unwrap_err();
    assert!(matches!(err, Error::Translator { .. }));
}
