use confidant::ChatConfig;

fn main() {
    let config = ChatConfig::load();
    confidant::logging::init(config.log_level);
    tracing::info!(endpoint = %config.endpoint, "starting chat widget");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(confidant::ui::App);
}
