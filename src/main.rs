use anyhow::Context;

fn main() -> anyhow::Result<()> {
    centrix::run().context("centrix exited with an error")
}
