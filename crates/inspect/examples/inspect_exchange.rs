use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Response, StatusCode};
use micro_inspect::{InspectError, MessageInspector, TabbedPanel};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), InspectError> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut inspector: MessageInspector = MessageInspector::create_request(
        "POST",
        "https://api.example.com/v1/orders?notify=true",
        [(CONTENT_TYPE.as_str(), "application/json"), (AUTHORIZATION.as_str(), "Bearer not-for-your-eyes")],
        Bytes::from_static(br#"{"customer":{"id":7,"tier":"gold"},"lines":[{"sku":"A-1","qty":2},{"sku":"B-9","qty":1}]}"#),
        None,
    )?;

    // the exchange itself happens elsewhere, this stands in for its outcome
    let response = Response::builder()
        .status(StatusCode::UNPROCESSABLE_ENTITY)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .header("set-cookie", "session=abc")
        .header("set-cookie", "theme=dark")
        .body(Bytes::from_static(b"<h1>Rejected</h1><p>SKU B-9 is out of stock &amp; backordered until 2025%2D01</p>"))
        .expect("static response is valid");
    inspector.attach_response(response);

    let mut panel = TabbedPanel::new();
    inspector.create_debug_widget(&mut panel);

    for tab in panel.tabs() {
        info!(caption = tab.caption(), width = tab.width(), "rendered tab");
    }
    println!("{}", panel.to_html());
    Ok(())
}
