// GET /products
use lambda_runtime::Error;
use product_api::app::runtime::serve;
use product_api::{Operation, Route};

#[tokio::main]
async fn main() -> Result<(), Error> {
    serve(Route::Fixed(Operation::GetProducts)).await
}
