// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages, the
//! authentication state and the toast overlay.
//!
//! The `App` struct owns the mounted [`NotificationProvider`] for the whole
//! run, so every page reports outcomes through the same service. Store
//! changes reach the overlay through a [`ToastLayer`] subscribed to that
//! service; the layer is advanced after every message so entering and
//! leaving toasts animate from the frame subscription.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::auth::{ApiClient, Auth};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{NewToast, NotificationProvider, ToastLayer, TransitionTimings};
use crate::ui::{dashboard, forgot_password, sign_in, sign_up};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    auth: Auth,
    api: ApiClient,
    sign_in: sign_in::State,
    sign_up: sign_up::State,
    forgot_password: forgot_password::State,
    dashboard: dashboard::State,
    /// Declared before `notifications` so it unsubscribes first on drop.
    toasts: ToastLayer,
    notifications: NotificationProvider,
    /// Time of the last processed message; the overlay renders at this instant.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.auth.is_signed_in())
            .field("toasts", &self.notifications.service().messages().len())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
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

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            log::warn!("application booted more than once, using default flags");
            Flags::default()
        });
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
    /// Loads configuration, restores the session and mounts the notification
    /// provider. Load problems are reported as toasts once the UI is up.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (auth, session_warning) = Auth::restore(None);
        let api = ApiClient::new(&config.api);

        let mut app = Self::with_parts(i18n, config, auth, api);
        for key in [config_warning, session_warning].into_iter().flatten() {
            let title = app.i18n.tr(&key);
            app.notifications.service().add(NewToast::info(title));
        }
        app.toasts.advance(Instant::now());

        (app, Task::none())
    }

    /// Assembles the application from already-loaded parts.
    pub fn with_parts(i18n: I18n, config: Config, auth: Auth, api: ApiClient) -> Self {
        let notifications = NotificationProvider::mount(&config.notifications);
        let toasts = ToastLayer::attach(
            notifications.service(),
            TransitionTimings::from(&config.notifications),
        );
        let screen = Screen::resolve(Screen::SignIn, auth.is_signed_in());
        log::info!("starting on {screen:?}");

        Self {
            i18n,
            config,
            screen,
            auth,
            api,
            sign_in: sign_in::State::default(),
            sign_up: sign_up::State::default(),
            forgot_password: forgot_password::State::default(),
            dashboard: dashboard::State::default(),
            toasts,
            notifications,
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationProvider {
        &self.notifications
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastLayer {
        &self.toasts
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.service().pending_timers());
        let frame_sub = subscription::create_frame_subscription(self.toasts.is_animating());

        Subscription::batch([tick_sub, frame_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(at) | Message::Frame(at) => *at,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            auth: &mut self.auth,
            api: &self.api,
            sign_in: &mut self.sign_in,
            sign_up: &mut self.sign_up,
            forgot_password: &mut self.forgot_password,
            dashboard: &mut self.dashboard,
        };
        let task = update::update(&mut ctx, message, now);

        self.now = now;
        self.toasts.advance(now);
        task
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            auth: &self.auth,
            sign_in: &self.sign_in,
            sign_up: &self.sign_up,
            forgot_password: &self.forgot_password,
            dashboard: &self.dashboard,
            toasts: &self.toasts,
            now: self.now,
        })
    }
}
