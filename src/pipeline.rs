//! The translate-and-replace pipeline.
//!
//! A single trigger runs a linear state machine with early-exit guards and no
//! retries. Translation latency is network-bound and unbounded, so every step
//! after the network call re-checks window liveness and focus; writing the
//! translation into the wrong window is the failure mode this design defends
//! against.

use std::time::{Duration, Instant};

use crate::clipboard::ClipboardAccess;
use crate::debounce::DebounceGate;
use crate::filter::WindowFilter;
use crate::handler::HandlerRegistry;
use crate::strategy::Timings;
use crate::translate::{TranslationClient, TranslationRequest};
use crate::windowing::WindowingSystem;

/// Why a run stopped before replacing any text. Every variant is a local,
/// silent abort: the run logs one line and returns to idle, leaving the
/// window untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AbortReason {
    #[error("trigger arrived inside the cooldown window")]
    Debounced,
    #[error("no valid focused window")]
    WindowInvalidated,
    #[error("focused window is not eligible for translation")]
    WindowIneligible,
    #[error("no text captured from the window")]
    CaptureEmpty,
    #[error("captured text is plain ASCII; translation skipped")]
    AsciiSource,
    #[error("translation failed")]
    TranslationFailed,
    #[error("translation is identical to the source text")]
    NoOpTranslation,
    #[error("foreground window changed during translation")]
    FocusChanged,
    #[error("could not write the translated text back")]
    InjectionFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Replaced,
    Aborted(AbortReason),
}

pub struct PipelineOptions {
    pub source_lang: String,
    pub target_lang: String,
    /// Treat all-ASCII captures as already translated and skip the
    /// round-trip.
    pub skip_ascii_source: bool,
    pub cooldown: Duration,
    pub timings: Timings,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            source_lang: "auto".into(),
            target_lang: "en".into(),
            skip_ascii_source: true,
            cooldown: Duration::from_secs(1),
            timings: Timings::default(),
        }
    }
}

pub struct TranslationPipeline {
    windowing: Box<dyn WindowingSystem>,
    clipboard: Box<dyn ClipboardAccess>,
    translator: Box<dyn TranslationClient>,
    registry: HandlerRegistry,
    filter: WindowFilter,
    gate: DebounceGate,
    options: PipelineOptions,
}

impl TranslationPipeline {
    pub fn new(
        windowing: Box<dyn WindowingSystem>,
        clipboard: Box<dyn ClipboardAccess>,
        translator: Box<dyn TranslationClient>,
        registry: HandlerRegistry,
        filter: WindowFilter,
        options: PipelineOptions,
    ) -> Self {
        let gate = DebounceGate::new(options.cooldown);
        Self {
            windowing,
            clipboard,
            translator,
            registry,
            filter,
            gate,
            options,
        }
    }

    /// One trigger, one attempt.
    pub fn run(&mut self) -> RunOutcome {
        match self.execute() {
            Ok(()) => RunOutcome::Replaced,
            Err(reason) => {
                tracing::debug!("pipeline aborted: {reason}");
                RunOutcome::Aborted(reason)
            }
        }
    }

    fn execute(&mut self) -> Result<(), AbortReason> {
        if !self.gate.should_proceed(Instant::now()) {
            return Err(AbortReason::Debounced);
        }

        let ws = self.windowing.as_ref();
        let window = ws.focused_window().ok_or(AbortReason::WindowInvalidated)?;
        let descriptor = ws.descriptor(window).ok_or(AbortReason::WindowInvalidated)?;
        if !self.filter.is_eligible(&descriptor) {
            return Err(AbortReason::WindowIneligible);
        }

        let handler = self.registry.select(&descriptor.class_name);
        tracing::debug!(
            class = %descriptor.class_name,
            handler = handler.name,
            "capturing window text"
        );
        let source = handler
            .capture_text(ws, self.clipboard.as_mut(), window, &self.options.timings)
            .map_err(|e| {
                tracing::debug!("capture failed: {e}");
                AbortReason::CaptureEmpty
            })?
            .ok_or(AbortReason::CaptureEmpty)?;
        let source_trimmed = source.trim();
        if source_trimmed.is_empty() {
            return Err(AbortReason::CaptureEmpty);
        }

        if self.options.skip_ascii_source && source_trimmed.chars().all(|c| (c as u32) < 128) {
            return Err(AbortReason::AsciiSource);
        }

        let request = TranslationRequest {
            text: source.clone(),
            source_lang: self.options.source_lang.clone(),
            target_lang: self.options.target_lang.clone(),
        };
        let translated = self.translator.translate(&request).map_err(|e| {
            tracing::warn!("translation failed: {e}");
            AbortReason::TranslationFailed
        })?;
        if translated.trim().is_empty() {
            return Err(AbortReason::TranslationFailed);
        }
        if translated.trim() == source_trimmed {
            return Err(AbortReason::NoOpTranslation);
        }

        // The user may have switched context while the request was in
        // flight.
        if !ws.is_window(window) {
            return Err(AbortReason::WindowInvalidated);
        }
        if ws.focused_window() != Some(window) {
            return Err(AbortReason::FocusChanged);
        }

        let injected = handler
            .inject_text(
                ws,
                self.clipboard.as_mut(),
                window,
                &translated,
                &self.options.timings,
            )
            .map_err(|e| {
                tracing::debug!("injection failed: {e}");
                AbortReason::InjectionFailed
            })?;
        if !injected {
            return Err(AbortReason::InjectionFailed);
        }

        tracing::info!(
            handler = handler.name,
            chars = translated.chars().count(),
            "replaced window text with translation"
        );
        Ok(())
    }
}
