// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between demo blocks and toasts.
//!
//! The `App` struct wires together the domains (demo catalog, localization,
//! notifications) and translates block events into side effects like
//! clipboard writes. The toast registry lives here and is handed to blocks
//! by `&mut` during their update.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Catalog, SkippedDemo};
use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::demo_preview::{self, Demo, DemoPreviewBlock, Layout, UpdateContext};
use crate::ui::notifications::ToastRegistry;
use crate::ui::state::DismissDelay;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Resolved once at startup; `System` is detected then.
    theme: Theme,
    blocks: Vec<DemoPreviewBlock>,
    /// Copy notifications raised by any block.
    toasts: ToastRegistry,
    /// Time of the last processed message; the view renders animations at it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("blocks", &self.blocks.len())
            .field("toasts", &self.toasts.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and demos, then schedules the deferred mount.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog = Catalog::load(flags.demo_dir.as_deref().map(Path::new));
        let skipped = catalog.skipped().to_vec();
        let mut app = Self::from_parts(i18n, &config, catalog.into_demos(), flags.layout);

        if let Some(key) = config_warning {
            let text = app.i18n.tr(&key);
            app.toasts.open(Some(text), app.now);
        }
        app.report_skipped(&skipped);

        (app, Task::done(Message::Mounted))
    }

    /// Builds the application from already loaded parts.
    ///
    /// `layout` overrides the configured layout when set.
    #[must_use]
    pub fn from_parts(
        i18n: I18n,
        config: &Config,
        demos: Vec<Demo>,
        layout: Option<Layout>,
    ) -> Self {
        let layout = layout.or(config.preview.layout).unwrap_or_default();
        let start_folded = config
            .preview
            .start_folded
            .unwrap_or(config::DEFAULT_START_FOLDED);
        let dismiss_delay = DismissDelay::new(
            config
                .toast
                .dismiss_after_ms
                .unwrap_or(config::DEFAULT_TOAST_DISMISS_MS),
        );

        let toasts =
            ToastRegistry::new(i18n.tr("toast-copy-success")).with_dismiss_delay(dismiss_delay);
        let blocks = demos
            .into_iter()
            .map(|demo| DemoPreviewBlock::new(demo, layout, start_folded))
            .collect();

        tracing::debug!(%layout, start_folded, dismiss_ms = dismiss_delay.millis(), "app ready");

        Self {
            i18n,
            theme: config.general.theme_mode.to_iced_theme(),
            blocks,
            toasts,
            now: Instant::now(),
        }
    }

    /// Opens one toast per demo file that failed to load.
    pub fn report_skipped(&mut self, skipped: &[SkippedDemo]) {
        for demo in skipped {
            let reason = self.i18n.tr(demo.error.i18n_key());
            let text = self.i18n.tr_with_args(
                "notification-demo-skipped",
                &[("name", demo.name.as_str()), ("reason", reason.as_str())],
            );
            self.toasts.open(Some(text), self.now);
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_animating(self.now))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(at) => *at,
            _ => Instant::now(),
        };
        self.update_at(message, now)
    }

    /// Processes a message as if it arrived at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        self.now = now;
        match message {
            Message::Mounted => {
                for block in &mut self.blocks {
                    block.mount(now);
                }
                Task::none()
            }
            Message::Demo(index, message) => {
                let Some(block) = self.blocks.get_mut(index) else {
                    tracing::warn!(index, "message for unknown demo block");
                    return Task::none();
                };
                let event = block.update(
                    message,
                    UpdateContext {
                        toasts: &mut self.toasts,
                        now,
                    },
                );
                match event {
                    demo_preview::Event::None => Task::none(),
                    // Write failures are not reported; the toast is already open.
                    demo_preview::Event::CopyToClipboard(text) => iced::clipboard::write(text),
                }
            }
            Message::Tick(_) => {
                self.toasts.tick(now);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            blocks: &self.blocks,
            toasts: &self.toasts,
            now: self.now,
            dark_theme: matches!(self.theme, Theme::Dark),
        })
    }

    /// Whether frame ticks are needed at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.toasts.has_pending_work() || self.blocks.iter().any(|block| block.is_animating(now))
    }

    #[must_use]
    pub fn blocks(&self) -> &[DemoPreviewBlock] {
        &self.blocks
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastRegistry {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app(layout: Option<Layout>) -> App {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let demos = vec![
            Demo::plain("button-basic", "<template>a</template>"),
            Demo::plain("button-round", "<template>b</template>"),
        ];
        App::from_parts(i18n, &Config::default(), demos, layout)
    }

    #[test]
    fn layout_override_beats_config() {
        let app = app(Some(Layout::Header));
        assert!(app.blocks().iter().all(|b| b.layout() == Layout::Header));
    }

    #[test]
    fn mounted_message_mounts_every_block() {
        let now = Instant::now();
        let mut app = app(None);
        let _ = app.update_at(Message::Mounted, now);
        assert!(app.blocks().iter().all(DemoPreviewBlock::is_mounted));
    }

    #[test]
    fn copy_opens_toast_with_localized_default() {
        let now = Instant::now();
        let mut app = app(None);
        let _ = app.update_at(Message::Demo(1, demo_preview::Message::Copy), now);

        let toast = app.toasts().active().next().expect("one toast");
        assert_eq!(toast.content(), "Copied!");
        assert!(app.is_animating(now));
    }

    #[test]
    fn skipped_demos_are_reported_as_toasts() {
        let mut app = app(None);
        let skipped = [SkippedDemo {
            name: "broken".to_string(),
            error: crate::error::DecodeError::InvalidUtf8.into(),
        }];
        app.report_skipped(&skipped);

        let toast = app.toasts().active().next().expect("one toast");
        assert_eq!(
            toast.content(),
            "Skipped demo broken: The demo source is not valid UTF-8."
        );
    }

    #[test]
    fn unknown_block_index_is_ignored() {
        let mut app = app(None);
        let _ = app.update_at(
            Message::Demo(99, demo_preview::Message::Copy),
            Instant::now(),
        );
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn ticks_retire_toasts_and_stop_animation() {
        let start = Instant::now();
        let mut app = app(None);
        let _ = app.update_at(Message::Mounted, start);
        let _ = app.update_at(Message::Demo(0, demo_preview::Message::Copy), start);

        let hide_at = start + Duration::from_millis(config::DEFAULT_TOAST_DISMISS_MS);
        let _ = app.update_at(Message::Tick(hide_at), hide_at);
        let done = hide_at + Duration::from_millis(config::TOAST_EXIT_MS);
        let _ = app.update_at(Message::Tick(done), done);

        assert!(app.toasts().is_empty());
        assert!(!app.is_animating(done));
    }
}
