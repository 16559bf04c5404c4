use inquiry_service::services::ClassificationFlow;
use inquiry_service::startup::run_function;
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    run_function(ClassificationFlow).await
}
