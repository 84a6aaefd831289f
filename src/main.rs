use window_translator::logging;

fn main() -> anyhow::Result<()> {
    run()
}

#[cfg(target_os = "windows")]
fn run() -> anyhow::Result<()> {
    use std::path::PathBuf;
    use std::thread;
    use std::time::Duration;

    use window_translator::clipboard::SystemClipboard;
    use window_translator::filter::WindowFilter;
    use window_translator::handlers_builtin::default_registry;
    use window_translator::hotkey;
    use window_translator::pipeline::{PipelineOptions, TranslationPipeline};
    use window_translator::settings::{Settings, DEFAULT_PATH};
    use window_translator::strategy::Timings;
    use window_translator::translate;
    use window_translator::win32::Win32Windowing;

    let Some(settings) = Settings::load_or_create(DEFAULT_PATH)? else {
        eprintln!("created configuration template at {DEFAULT_PATH}; review it and start again");
        return Ok(());
    };
    logging::init(settings.debug_logging, settings.log_file.clone().map(PathBuf::from));

    let translator = translate::client_from_settings(&settings)?;
    let clipboard = SystemClipboard::new()?;
    let options = PipelineOptions {
        source_lang: settings.source_lang.clone(),
        target_lang: settings.target_lang.clone(),
        skip_ascii_source: settings.skip_ascii_source,
        cooldown: settings.cooldown(),
        timings: Timings::default(),
    };
    let mut pipeline = TranslationPipeline::new(
        Box::new(Win32Windowing),
        Box::new(clipboard),
        translator,
        default_registry(),
        WindowFilter::default(),
        options,
    );

    let (translate_trigger, quit_trigger) =
        hotkey::start_listener(settings.translate_hotkey(), settings.quit_hotkey());
    tracing::info!(
        hotkey = settings.hotkey.as_deref().unwrap_or("Shift+F11"),
        "listening for the translate hotkey"
    );

    loop {
        if quit_trigger.take() {
            tracing::info!("quit hotkey pressed; exiting");
            return Ok(());
        }
        if translate_trigger.take() {
            pipeline.run();
        }
        thread::sleep(Duration::from_millis(50));
    }
}

#[cfg(not(target_os = "windows"))]
fn run() -> anyhow::Result<()> {
    logging::init(false, None);
    anyhow::bail!("in-place window translation is only supported on Windows")
}
