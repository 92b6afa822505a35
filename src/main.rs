fn main() {
    equity_cli::cli::run();
}
