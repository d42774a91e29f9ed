use phonebook::cli::run_app;
use phonebook::errors::AppError;

fn main() -> Result<(), AppError> {
    run_app()
}
