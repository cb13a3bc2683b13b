#[tokio::main]
async fn main() {
    certificate_backend::run().await;
}
