fn main() -> anyhow::Result<()> {
    timeline_export::cli::run()
}
