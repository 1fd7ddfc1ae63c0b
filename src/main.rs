//! Rosterdeck - a small themed user roster manager
//! Built with iced: one list view with add/edit/delete over mock data

mod app;
mod features;
mod i18n;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(960.0, 640.0))
        .antialiasing(true)
        .run()
}
