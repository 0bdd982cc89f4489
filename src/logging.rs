use tracing::Level;

/// Install the global subscriber at `level`.
///
/// Safe to call more than once; later calls keep the first subscriber.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// The browser build logs to the devtools console through the Dioxus logger.
#[cfg(all(target_arch = "wasm32", feature = "dioxus"))]
pub fn init(level: Level) {
    if dioxus::logger::init(level).is_err() {
        tracing::debug!("dioxus logger already installed");
    }
}

#[cfg(all(target_arch = "wasm32", not(feature = "dioxus")))]
pub fn init(_level: Level) {}
