#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = groundplan::run_from_env() {
        eprintln!("groundplan: {error}");
        std::process::exit(error.exit_code());
    }
}
