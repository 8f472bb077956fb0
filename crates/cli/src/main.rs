//! Multimodal eval CLI entry point.

fn main() {
    if let Err(e) = multimodal_eval_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
