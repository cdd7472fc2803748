use anyhow::Result;

fn main() -> Result<()> {
    kindle_notes::cli::run()
}
