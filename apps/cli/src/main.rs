fn main() -> anyhow::Result<()> {
    review_scheduler::run()
}
