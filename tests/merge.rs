use segtrie::{InsertError, Router};

#[test]
fn merge_ok() {
    let mut root = Router::new();
    assert!(root.get("/foo", "foo").is_ok());
    assert!(root.get("/bar/:id", "bar").is_ok());

    let mut child = Router::new();
    assert!(child.get("/", "index").is_ok());
    assert!(child.get("/baz", "baz").is_ok());
    assert!(child.get("/xyz/:id", "xyz").is_ok());
    assert!(child.get("/files/*", "files").is_ok());
    assert!(child.post("/foo", "post foo").is_ok());

    assert!(root.merge(child).is_ok());

    assert_eq!(root.at("GET", "/").map(|m| m.value().copied()), Ok(Some("index")));
    assert_eq!(root.at("GET", "/foo").map(|m| m.value().copied()), Ok(Some("foo")));
    assert_eq!(root.at("GET", "/bar/1").map(|m| m.value().copied()), Ok(Some("bar")));
    assert_eq!(root.at("GET", "/baz").map(|m| m.value().copied()), Ok(Some("baz")));
    assert_eq!(root.at("GET", "/xyz/2").map(|m| m.value().copied()), Ok(Some("xyz")));
    assert_eq!(root.at("GET", "/files/a").map(|m| m.value().copied()), Ok(Some("files")));
    assert_eq!(root.at("POST", "/foo").map(|m| m.value().copied()), Ok(Some("post foo")));
    assert_eq!(root.at("GET", "/xyz/2").unwrap().params.get("id"), Some("2"));
}

#[test]
fn merge_conflict() {
    let mut root = Router::new();
    assert!(root.get("/foo", "foo").is_ok());

    let mut child = Router::new();
    assert!(child.get("/foo", "foo").is_ok());

    assert_eq!(
        root.merge(child),
        Err(InsertError::RouteConflict {
            route: "/foo".into()
        })
    );
}

#[test]
fn merge_ambiguous() {
    let mut root = Router::new();
    assert!(root.get("/user/:id", "user").is_ok());

    let mut child = Router::new();
    assert!(child.get("/user/*", "any").is_ok());

    assert_eq!(
        root.merge(child),
        Err(InsertError::AmbiguousWildcardParam {
            route: "/user/*".into(),
            existing: ":id".into(),
        })
    );
    assert_eq!(root.at("GET", "/user/1").unwrap().value(), Some(&"user"));
}
