mod config;
mod error;
mod library;
mod manifest;
mod render;
mod runtime;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
