fn main() {
    knights_tour::cli::run_loop();
}
