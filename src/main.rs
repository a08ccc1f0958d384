#[tokio::main]
async fn main() {
    salon_booking_backend::run().await;
}
