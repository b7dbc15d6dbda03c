// SPDX-License-Identifier: MPL-2.0
//! Dashboard shown to a signed-in user.
//!
//! Greets the user, shows the selected schedule day and lets the user page
//! through working days. Weekends are skipped since the barbershop is closed.

use crate::auth::User;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::form;
use crate::ui::styles;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    today: NaiveDate,
    selected: NaiveDate,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PreviousDay,
    NextDay,
    SignOut,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    SignOut,
}

impl State {
    /// Starts on `today`, or on the next working day when today is a weekend.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let selected = if is_weekend(today) {
            next_working_day(today)
        } else {
            today
        };
        Self { today, selected }
    }

    #[must_use]
    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    #[must_use]
    pub fn is_today(&self) -> bool {
        self.selected == self.today
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PreviousDay => {
                self.selected = previous_working_day(self.selected);
                Event::None
            }
            Message::NextDay => {
                self.selected = next_working_day(self.selected);
                Event::None
            }
            Message::SignOut => Event::SignOut,
        }
    }

    pub fn view<'a>(&'a self, user: &User, i18n: &I18n) -> Element<'a, Message> {
        let header = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                Text::new(i18n.tr("app-title"))
                    .size(typography::TITLE_MD)
                    .color(palette::PRIMARY_500),
            )
            .push(
                Container::new(
                    Text::new(i18n.tr_with_args("dashboard-greeting", &[("name", user.name.as_str())]))
                        .size(typography::BODY_LG),
                )
                .width(Length::Fill),
            )
            .push(form::link(i18n.tr("dashboard-sign-out"), Message::SignOut));

        let mut day_info = Row::new().spacing(spacing::XS);
        if self.is_today() {
            day_info = day_info.push(
                Text::new(i18n.tr("dashboard-today"))
                    .size(typography::BODY)
                    .color(palette::PRIMARY_500),
            );
        }
        day_info = day_info
            .push(Text::new(format_date(self.selected, i18n)).size(typography::BODY))
            .push(Text::new(i18n.tr(weekday_key(self.selected.weekday()))).size(typography::BODY));

        let navigation = Row::new()
            .spacing(spacing::XS)
            .push(
                button(Text::new(i18n.tr("dashboard-previous-day")).size(typography::BODY_SM))
                    .on_press(Message::PreviousDay)
                    .style(styles::button::link),
            )
            .push(
                button(Text::new(i18n.tr("dashboard-next-day")).size(typography::BODY_SM))
                    .on_press(Message::NextDay)
                    .style(styles::button::link),
            );

        let schedule = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("dashboard-schedule-title")).size(typography::TITLE_LG))
            .push(day_info)
            .push(navigation)
            .push(period(i18n.tr("dashboard-morning"), i18n))
            .push(period(i18n.tr("dashboard-afternoon"), i18n));

        let content = Column::new()
            .spacing(spacing::XL)
            .padding(spacing::LG)
            .push(header)
            .push(schedule);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Left)
            .into()
    }
}

fn period<'a>(title: String, i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr("dashboard-no-appointments"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        )
        .into()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the first weekday strictly after `date`.
#[must_use]
pub fn next_working_day(date: NaiveDate) -> NaiveDate {
    let mut day = date;
    loop {
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => return date,
        }
        if !is_weekend(day) {
            return day;
        }
    }
}

/// Returns the last weekday strictly before `date`.
#[must_use]
pub fn previous_working_day(date: NaiveDate) -> NaiveDate {
    let mut day = date;
    loop {
        match day.checked_sub_days(Days::new(1)) {
            Some(previous) => day = previous,
            None => return date,
        }
        if !is_weekend(day) {
            return day;
        }
    }
}

fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "weekday-mon",
        Weekday::Tue => "weekday-tue",
        Weekday::Wed => "weekday-wed",
        Weekday::Thu => "weekday-thu",
        Weekday::Fri => "weekday-fri",
        Weekday::Sat => "weekday-sat",
        Weekday::Sun => "weekday-sun",
    }
}

/// Localized "month day" label.
fn format_date(date: NaiveDate, i18n: &I18n) -> String {
    let month = i18n.tr(&format!("month-{}", date.month()));
    let day = date.day().to_string();
    i18n.tr_with_args("dashboard-date", &[("month", month.as_str()), ("day", day.as_str())])
}
