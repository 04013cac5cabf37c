fn main() {
    usecase_gen::app::cli::run();
}
