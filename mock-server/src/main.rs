use tokio::net::TcpListener;

/// Standalone test server for poking at the client by hand:
/// `PORT=8000 cargo run -p mock-server`, then
/// `httpclient http://127.0.0.1:8000/hello`.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("mock server listening on http://{addr}");
    mock_server::run(listener).await
}
