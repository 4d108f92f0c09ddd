//! Integration tests for tally-router
//!
//! Tests are organized by feature area and cover:
//! - Resolving the application routes
//! - Declaration-order precedence
//! - Named route URL generation
//! - Resolve / generate round trips

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use tally_router::*;

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Resolving
// ============================================================================

#[rstest]
#[case("/", Page::SessionCreate, &[])]
#[case("/s/abc123/tok1", Page::Session, &[("id", "abc123"), ("token", "tok1")])]
#[case("/s/abc123/tok1/edit", Page::MemberEdit, &[("id", "abc123"), ("token", "tok1")])]
#[case(
    "/s/abc123/tok1/expense/99/edit",
    Page::ExpenseEdit,
    &[("id", "abc123"), ("token", "tok1"), ("expId", "99")]
)]
fn test_resolve_app_routes(
    #[case] path: &str,
    #[case] page: Page,
    #[case] expected: &[(&str, &str)],
) {
    let router = app_router().unwrap();
    let m = router.resolve(path).unwrap();
    assert_eq!(m.page, page);
    assert_eq!(m.params, params(expected));
}

#[rstest]
#[case("/unknown/path")]
#[case("/s")]
#[case("/s/abc123")]
#[case("/s/abc123/tok1/delete")]
#[case("/s/abc123/tok1/expense/99")]
#[case("/s/abc123/tok1/expense/99/edit/extra")]
fn test_resolve_not_found(#[case] path: &str) {
    let err = app_router().unwrap().resolve(path).unwrap_err();
    assert_eq!(err, RouteError::NotFound { path: path.to_string() });
}

#[rstest]
#[case("", Page::SessionCreate)]
#[case("/s/abc123/tok1/", Page::Session)]
#[case("//s//abc123//tok1//edit", Page::MemberEdit)]
#[case("\\s\\abc123\\tok1", Page::Session)]
#[case("/s/abc123/tok1?tab=expenses#latest", Page::Session)]
#[case("/?ref=home", Page::SessionCreate)]
fn test_resolve_normalizes_input(#[case] path: &str, #[case] page: Page) {
    assert_eq!(app_router().unwrap().resolve(path).unwrap().page, page);
}

#[test]
fn test_resolve_is_case_sensitive_by_default() {
    let router = app_router().unwrap();
    assert!(router.resolve("/S/abc123/tok1").is_err());

    let relaxed = build_app_router(true).unwrap();
    let m = relaxed.resolve("/S/AbC/Tok/EDIT").unwrap();
    assert_eq!(m.page, Page::MemberEdit);
    // Bound values keep their original case
    assert_eq!(m.params["id"], "AbC");
}

#[test]
fn test_resolve_reports_name_and_pattern() {
    let m = app_router()
        .unwrap()
        .resolve("/s/a/b/expense/7/edit")
        .unwrap();
    assert_eq!(m.name.as_deref(), Some("expense-edit"));
    assert_eq!(m.pattern, "/s/:id/:token/expense/:expId/edit");
}

#[test]
fn test_resolve_location_ignores_query() {
    let location = parse_location("/s/a/b?id=other");
    let m = app_router().unwrap().resolve_location(&location).unwrap();
    assert_eq!(m.params["id"], "a");
}

// ============================================================================
// Declaration order
// ============================================================================

#[test]
fn test_first_declared_route_wins() {
    let router = Router::new()
        .with_route(Route::new("/s/:id/:token", Page::Session).unwrap())
        .unwrap()
        .with_route(Route::new("/s/new/:token", Page::SessionCreate).unwrap())
        .unwrap();

    let m = router.resolve("/s/new/tok").unwrap();
    assert_eq!(m.page, Page::Session);
    assert_eq!(m.params["id"], "new");
}

#[test]
fn test_literal_declared_first_wins() {
    let router = Router::new()
        .with_routes([
            Route::new("/s/new/:token", Page::SessionCreate).unwrap(),
            Route::new("/s/:id/:token", Page::Session).unwrap(),
        ])
        .unwrap();

    assert_eq!(router.resolve("/s/new/tok").unwrap().page, Page::SessionCreate);
    assert_eq!(router.resolve("/s/old/tok").unwrap().page, Page::Session);
}

// ============================================================================
// Named routes
// ============================================================================

#[test]
fn test_generate_session() {
    let router = app_router().unwrap();
    let url = router
        .generate("session", &params(&[("id", "abc123"), ("token", "tok1")]))
        .unwrap();
    assert_eq!(url, "/s/abc123/tok1");

    let m = router.resolve(&url).unwrap();
    assert_eq!(m.page, Page::Session);
    assert_eq!(m.params, params(&[("id", "abc123"), ("token", "tok1")]));
}

#[test]
fn test_generate_expense_edit() {
    let url = app_router()
        .unwrap()
        .generate_params(
            "expense-edit",
            &[("id", "abc123"), ("token", "tok1"), ("expId", "99")],
        )
        .unwrap();
    assert_eq!(url, "/s/abc123/tok1/expense/99/edit");
}

#[test]
fn test_generate_ignores_extra_params() {
    let url = app_router()
        .unwrap()
        .generate_params("session", &[("id", "a"), ("token", "b"), ("expId", "9")])
        .unwrap();
    assert_eq!(url, "/s/a/b");
}

#[test]
fn test_generate_unknown_name() {
    let err = app_router()
        .unwrap()
        .generate("settings", &Params::new())
        .unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidRoute(InvalidRoute::UnknownName {
            name: "settings".into()
        })
    );
}

#[test]
fn test_generate_missing_param() {
    let err = app_router()
        .unwrap()
        .generate_params("expense-edit", &[("id", "a"), ("token", "b")])
        .unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidRoute(InvalidRoute::MissingParam {
            name: "expense-edit".into(),
            param: "expId".into()
        })
    );
}

#[test]
fn test_route_by_name() {
    let router = app_router().unwrap();
    assert_eq!(router.route_by_name("member-edit").unwrap().page(), Page::MemberEdit);
    assert!(router.route_by_name("missing").is_none());
}

// ============================================================================
// Properties
// ============================================================================

fn plain_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}"
}

proptest! {
    #[test]
    fn prop_substituted_patterns_resolve(
        id in plain_value(),
        token in plain_value(),
        exp_id in plain_value(),
    ) {
        let router = app_router().unwrap();
        let values = [("id", id.as_str()), ("token", token.as_str()), ("expId", exp_id.as_str())];

        for route in router.routes() {
            let path = route
                .segments()
                .iter()
                .map(|segment| match segment {
                    PatternSegment::Static(text) => format!("/{}", text),
                    PatternSegment::Param(name) => {
                        let value = values.iter().find(|(k, _)| k == name).unwrap().1;
                        format!("/{}", value)
                    }
                })
                .collect::<String>();
            let path = if path.is_empty() { "/".to_string() } else { path };

            let m = router.resolve(&path).unwrap();
            let expected: Params = route
                .param_names()
                .into_iter()
                .map(|name| {
                    let value = values.iter().find(|(k, _)| *k == name).unwrap().1;
                    (name.to_string(), value.to_string())
                })
                .collect();

            prop_assert_eq!(m.page, route.page());
            prop_assert_eq!(m.params, expected);
        }
    }

    #[test]
    fn prop_generate_round_trips(
        id in "\\PC{1,12}",
        token in "\\PC{1,12}",
        exp_id in "\\PC{1,12}",
    ) {
        let router = app_router().unwrap();
        let given = params(&[("id", id.as_str()), ("token", token.as_str()), ("expId", exp_id.as_str())]);

        for name in ["session", "member-edit", "expense-edit"] {
            let url = router.generate(name, &given).unwrap();
            let m = router.resolve(&url).unwrap();

            prop_assert_eq!(m.name.as_deref(), Some(name));
            for (key, value) in &m.params {
                prop_assert_eq!(value, &given[key]);
            }
        }
    }
}
