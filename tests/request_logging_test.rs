//! Request logging under the default `info` filter

use std::io;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use millennium::api::{create_router, AppState};
use tower::ServiceExt; // for oneshot
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn requests_are_logged_at_info() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new("info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        );
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = create_router(AppState::in_memory());
    for (uri, expected) in [
        ("/customers", StatusCode::OK),
        ("/customers/1", StatusCode::NOT_FOUND),
        ("/customers/abc", StatusCode::BAD_REQUEST),
    ] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), expected, "uri {uri}");
    }

    let output = logs.contents();
    let finished: Vec<_> = output
        .lines()
        .filter(|line| line.contains("finished processing request"))
        .collect();
    assert_eq!(finished.len(), 3, "captured logs:\n{output}");
    assert!(finished[0].contains("status=200"), "captured logs:\n{output}");
    assert!(finished[1].contains("status=404"), "captured logs:\n{output}");
    assert!(finished[2].contains("status=400"), "captured logs:\n{output}");
    assert!(output.contains("started processing request"));
    assert!(output.contains("uri=/customers/abc"));
}
