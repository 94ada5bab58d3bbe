//! Logger initialization for browser and native builds

/// Install the global logger.
///
/// On wasm32 this routes `log` records to the browser console and installs
/// the panic hook; natively it uses `env_logger` (filter via `RUST_LOG`,
/// defaulting to `info`, or `debug` when `verbose`). Calling it twice is
/// harmless.
#[cfg(target_arch = "wasm32")]
pub fn init(verbose: bool) {
    console_error_panic_hook::set_once();
    let level = if verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(level);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(level);
    // Only fails if a logger is already installed
    let _ = env_logger::Builder::from_env(env).try_init();
}
