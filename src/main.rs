fn main() {
    qa_dashboard::start();
}
