fn main() {
    imgbatch::app::cli::run();
}
