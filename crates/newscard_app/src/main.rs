mod app;
mod logging;
mod tracker;

fn main() -> anyhow::Result<()> {
    app::run()
}
