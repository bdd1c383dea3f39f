use std::sync::{Arc, Mutex};

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::ALLOW;
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tower::service_fn;
use tower::util::BoxCloneService;
use tower::Service as _;

type Body = Full<Bytes>;

// The parameters captured by the router, attached to the request so
// handlers can read them.
#[derive(Clone, Debug, Default)]
struct PathParams(Vec<(String, String)>);

impl PathParams {
    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

// GET /
async fn index(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::new(Body::from("Hello, world!")))
}

// GET /users/:id
async fn user(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let id = req
        .extensions()
        .get::<PathParams>()
        .and_then(|params| params.get("id"))
        .unwrap_or_default();

    Ok(Response::new(Body::from(format!("Hello, user {}!", id))))
}

// POST /users/:id
async fn update_user(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::new(Body::from("updated")))
}

// GET /static/*
async fn asset(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::new(Body::from("...")))
}

fn empty(status: StatusCode) -> Response<Body> {
    let mut res = Response::new(Body::default());
    *res.status_mut() = status;
    res
}

// We can use `BoxCloneService` to erase the type of each handler service.
//
// We still need a `Mutex` around each service because `BoxCloneService` doesn't
// require the service to implement `Sync`.
type Service = Mutex<BoxCloneService<Request<Incoming>, Response<Body>, hyper::Error>>;

type Router = segtrie::Router<Service>;

async fn route(router: Arc<Router>, mut req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let path = req.uri().path().to_owned();

    // a path can lead to a node that carries no service, which is treated
    // the same as no match at all
    let found = match router.at(req.method().as_str(), &path) {
        Ok(matched) => matched.value().map(|service| {
            let params = matched
                .params
                .iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect();

            // lock the service for a very short time, just to clone the service
            (service.lock().unwrap().clone(), PathParams(params))
        }),
        Err(_) => None,
    };

    match found {
        Some((mut service, params)) => {
            req.extensions_mut().insert(params);
            service.call(req).await
        }
        None => {
            let allowed = router.allowed(&path);

            // if the path is routable under other methods, respond with 405 Method Not Allowed
            if allowed.is_empty() {
                Ok(empty(StatusCode::NOT_FOUND))
            } else {
                let mut res = empty(StatusCode::METHOD_NOT_ALLOWED);
                if let Ok(allow) = allowed.join(", ").parse() {
                    res.headers_mut().insert(ALLOW, allow);
                }
                Ok(res)
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Create a router and register our routes. A malformed or conflicting
    // route stops the server before it starts listening.
    let mut router = Router::new();

    router.get("/", BoxCloneService::new(service_fn(index)).into())?;
    router.get("/users/:id", BoxCloneService::new(service_fn(user)).into())?;
    router.post("/users/:id", BoxCloneService::new(service_fn(update_user)).into())?;
    router.get("/static/*", BoxCloneService::new(service_fn(asset)).into())?;

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await?;

    // boilerplate for the hyper service
    let router = Arc::new(router);

    loop {
        let router = router.clone();
        let (tcp, _) = listener.accept().await?;
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request| async {
                        route(router.clone(), request).await
                    }),
                )
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}
