use actix_web::{App, HttpServer, web};

/// Starts an HTTP server on an ephemeral port with the given routes and
/// returns its base URL. The server runs for the rest of the test process.
pub async fn serve(configure: fn(&mut web::ServiceConfig)) -> String {
    let http_server = HttpServer::new(move || App::new().configure(configure))
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}
