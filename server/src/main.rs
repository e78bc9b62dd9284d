#[tokio::main]
async fn main() {
    storyfun::start_server().await;
}
