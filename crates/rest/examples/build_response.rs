use http::{StatusCode, Uri};
use restling::header::{CacheControl, EntityTag, NewCookie};
use restling::{RequestContext, ResponseBuilder};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let context = RequestContext::new(Uri::from_static("https://api.example.com/v1/"));
    let cache = CacheControl { max_age: Some(3600), ..CacheControl::default() };

    let mut builder = ResponseBuilder::for_request(context);
    let response = builder
        .status(StatusCode::CREATED)
        .location(Uri::from_static("/widgets/42"))
        .tag(EntityTag::new("widget-42-v1"))
        .cache_control(cache)
        .cookie(NewCookie::new("session", "d1ffba").path("/").http_only())
        .json(serde_json::json!({ "id": 42 }))
        .build();

    info!(status = ?response.status(), "built response");
    for (name, value) in response.headers() {
        info!("{name}: {value:?}");
    }
}
