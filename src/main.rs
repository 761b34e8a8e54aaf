fn main() {
    flowctl::app::cli::run();
}
