// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the counter, the photo
//! wall, and the lightbox.
//!
//! The `App` struct wires together the domains (elapsed counter, gallery,
//! localization) and translates messages into side effects like tile loads.
//! Policy decisions (which components are enabled, window sizing, warning
//! notifications) stay close to the main update loop so user-facing behavior
//! is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::elapsed::{self, Breakdown};
use crate::gallery::{catalog, Gallery};
use crate::i18n::I18n;
use crate::media;
use crate::ui::lightbox;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use chrono::Local;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state bridging UI components, localization, and
/// configuration.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    /// Configured anchor instant; `None` disables the counter.
    anchor: Option<chrono::NaiveDateTime>,
    /// Latest computed breakdown, redrawn by the tick.
    breakdown: Breakdown,
    /// Shuffled photo wall; `None` when no pictures directory is configured.
    gallery: Option<Gallery>,
    lightbox: lightbox::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("counter_enabled", &self.anchor.is_some())
            .field("gallery_len", &self.gallery.as_ref().map(Gallery::len))
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::default(),
            anchor: None,
            breakdown: Breakdown::default(),
            gallery: None,
            lightbox: lightbox::State::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings
#[must_use]
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
    // while only consuming flags once (iced requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
    /// Initializes application state and kicks off the asynchronous tile
    /// loads for the configured catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode.unwrap_or_default();

        if let Some(key) = config_warning {
            app.notifications.push(notifications::Notification::warning(key));
        }

        // Counter: enabled only by a well-formed anchor. A malformed value
        // disables it with a warning instead of showing nonsense.
        app.anchor = match config.anchor_date.as_deref() {
            Some(raw) => match elapsed::parse_anchor(raw) {
                Some(anchor) => Some(anchor),
                None => {
                    app.notifications.push(notifications::Notification::warning(
                        "notification-anchor-invalid",
                    ));
                    None
                }
            },
            None => None,
        };
        if let Some(anchor) = app.anchor {
            // First paint must not show a blank second.
            app.breakdown = Breakdown::between(anchor, Local::now().naive_local());
        }

        // Gallery: the CLI path wins over the configured one.
        let pictures_dir = flags
            .pictures_dir
            .map(PathBuf::from)
            .or(config.pictures_dir);

        let task = match pictures_dir {
            Some(directory) => {
                let sources = catalog::scan_catalog(&directory).unwrap_or_default();
                if sources.is_empty() {
                    app.notifications.push(notifications::Notification::warning(
                        "notification-empty-catalog",
                    ));
                }
                let gallery = Gallery::new(sources);
                let task = spawn_tile_loads(&gallery);
                app.gallery = Some(gallery);
                task
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(
            self.anchor.is_some(),
            self.notifications.has_notifications(),
        );
        let event_sub = subscription::create_event_subscription(self.lightbox.is_open());

        Subscription::batch([tick_sub, event_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Grid(grid_message) => {
                update::handle_grid_message(&mut self.lightbox, self.gallery.as_ref(), grid_message);
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(
                    &mut self.lightbox,
                    self.gallery.as_ref(),
                    lightbox_message,
                );
            }
            Message::TileLoaded { index, result } => {
                update::handle_tile_loaded(self.gallery.as_mut(), index, result);
            }
            Message::Tick(_instant) => {
                update::handle_tick(
                    self.anchor,
                    &mut self.breakdown,
                    &mut self.notifications,
                    Local::now().naive_local(),
                );
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            breakdown: self.anchor.is_some().then_some(&self.breakdown),
            gallery: self.gallery.as_ref(),
            lightbox: &self.lightbox,
            notifications: &self.notifications,
        })
    }
}

/// One load task per tile, batched; each completion carries its display
/// index so late arrivals land on the right tile.
fn spawn_tile_loads(gallery: &Gallery) -> Task<Message> {
    let tasks: Vec<Task<Message>> = gallery
        .tiles()
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            let path = tile.source().to_path_buf();
            Task::perform(async move { media::load_image(&path) }, move |result| {
                Message::TileLoaded { index, result }
            })
        })
        .collect();
    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::TileResolution;
    use crate::ui::grid;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn write_config(config_root: &Path, contents: &str) {
        let dir = config_root.join("Keepsake");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("settings.toml"), contents).expect("write settings");
    }

    fn gallery_of(len: usize) -> Gallery {
        let sources = (0..len).map(|i| PathBuf::from(format!("{i}.jpg"))).collect();
        Gallery::with_order(sources)
    }

    #[test]
    fn new_starts_with_both_components_disabled() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(app.anchor.is_none());
            assert!(app.gallery.is_none());
            assert!(!app.lightbox.is_open());
        });
    }

    #[test]
    fn new_enables_counter_for_valid_anchor() {
        with_temp_config_dir(|config_root| {
            write_config(config_root, "anchor_date = \"2023-12-10T00:00:00\"");

            let (app, _task) = App::new(Flags::default());

            assert!(app.anchor.is_some());
            // Immediate first computation: the anchor is in the past, so the
            // breakdown is already non-zero before the first tick.
            assert!(app.breakdown.total_seconds() > 0);
        });
    }

    #[test]
    fn new_disables_counter_and_warns_for_malformed_anchor() {
        with_temp_config_dir(|config_root| {
            write_config(config_root, "anchor_date = \"not-a-date\"");

            let (app, _task) = App::new(Flags::default());

            assert!(app.anchor.is_none());
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn new_warns_for_unreadable_config() {
        with_temp_config_dir(|config_root| {
            write_config(config_root, "not = valid = toml");

            let (app, _task) = App::new(Flags::default());

            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn new_scans_pictures_dir_from_flags() {
        with_temp_config_dir(|_| {
            let pictures = tempdir().expect("failed to create temp dir");
            fs::write(pictures.path().join("a.jpg"), b"fake").expect("write");
            fs::write(pictures.path().join("b.png"), b"fake").expect("write");

            let (app, _task) = App::new(Flags {
                lang: None,
                pictures_dir: Some(pictures.path().to_string_lossy().into_owned()),
            });

            let gallery = app.gallery.as_ref().expect("gallery should be enabled");
            assert_eq!(gallery.len(), 2);
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn new_warns_for_empty_pictures_dir() {
        with_temp_config_dir(|_| {
            let pictures = tempdir().expect("failed to create temp dir");

            let (app, _task) = App::new(Flags {
                lang: None,
                pictures_dir: Some(pictures.path().to_string_lossy().into_owned()),
            });

            let gallery = app.gallery.as_ref().expect("gallery should be enabled");
            assert!(gallery.is_empty());
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn tile_activation_opens_lightbox_at_clicked_index() {
        let mut app = App {
            gallery: Some(gallery_of(3)),
            ..App::default()
        };

        let _ = app.update(Message::Grid(grid::Message::TileActivated(1)));

        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.cursor_index(), Some(1));
    }

    #[test]
    fn lightbox_navigation_wraps_through_app_update() {
        let mut app = App {
            gallery: Some(gallery_of(3)),
            ..App::default()
        };
        let _ = app.update(Message::Grid(grid::Message::TileActivated(1)));

        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        assert_eq!(app.lightbox.cursor_index(), Some(2));

        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        assert_eq!(app.lightbox.cursor_index(), Some(0));
    }

    #[test]
    fn close_message_closes_the_lightbox() {
        let mut app = App {
            gallery: Some(gallery_of(3)),
            ..App::default()
        };
        let _ = app.update(Message::Grid(grid::Message::TileActivated(0)));

        let _ = app.update(Message::Lightbox(lightbox::Message::Close));

        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn failed_tile_load_shows_the_same_fallback_in_grid_and_lightbox() {
        let mut app = App {
            gallery: Some(gallery_of(3)),
            ..App::default()
        };

        let _ = app.update(Message::TileLoaded {
            index: 2,
            result: Err(Error::Image("truncated".into())),
        });
        let _ = app.update(Message::Grid(grid::Message::TileActivated(2)));

        let gallery = app.gallery.as_ref().expect("gallery");
        assert_eq!(gallery.tiles()[2].resolution(), TileResolution::Fallback);
        // The lightbox reads the same resolved image the grid shows.
        let cursor = app.lightbox.cursor_index().expect("open at 2");
        assert_eq!(cursor, 2);
        assert!(gallery.resolved_image(cursor).is_some());
    }

    #[test]
    fn tick_advances_the_counter() {
        let anchor: chrono::NaiveDateTime = "2023-12-10T00:00:00".parse().expect("valid");
        let mut app = App {
            anchor: Some(anchor),
            ..App::default()
        };
        assert_eq!(app.breakdown, Breakdown::default());

        let _ = app.update(Message::Tick(std::time::Instant::now()));

        assert!(app.breakdown.total_seconds() > 0);
    }

    #[test]
    fn language_flag_selects_locale() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                lang: Some("th".to_string()),
                pictures_dir: None,
            });
            assert_eq!(app.i18n.current_locale().to_string(), "th");
        });
    }
}
