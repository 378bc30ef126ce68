fn main() {
    review_cli::app::cli::run();
}
