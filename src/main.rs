use figurine::{AppConfig, FigureApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    FigureApp::new(AppConfig::default()).run()
}
