// Single function behind every /products route; picks the operation from
// the HTTP method and the presence of the {id} path parameter.
use lambda_runtime::Error;
use product_api::app::runtime::serve;
use product_api::Route;

#[tokio::main]
async fn main() -> Result<(), Error> {
    serve(Route::Dispatch).await
}
