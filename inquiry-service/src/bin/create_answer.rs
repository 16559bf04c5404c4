use inquiry_service::services::AnswerFlow;
use inquiry_service::startup::run_function;
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    run_function(AnswerFlow).await
}
