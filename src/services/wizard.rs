//! wizard.rs
//!
//! Трёхшаговый мастер бронирования: выбор билетов → сводка → финальная
//! проверка. Здесь только чистая логика — переходы между шагами,
//! валидация формы и расчёт суммы; состояние конкретной сессии хранит
//! Redis (см. `cache::wizard`).
//!
//! Переходы вперёд намеренно не валидируются: все проверки происходят
//! один раз, при отправке с последнего шага. Так вёл себя исходный
//! продукт, и это поведение сохранено.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::models::ticket::TicketSelection;

/// Часовые сеансы посещения, единственные допустимые значения времени.
pub const AVAILABLE_TIMES: [&str; 8] = [
    "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM", "5:00 PM",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Tickets,
    Review,
    FinalReview,
}

impl WizardStep {
    fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Tickets => Some(WizardStep::Review),
            WizardStep::Review => Some(WizardStep::FinalReview),
            WizardStep::FinalReview => None,
        }
    }

    fn back(self) -> Option<WizardStep> {
        match self {
            WizardStep::Tickets => None,
            WizardStep::Review => Some(WizardStep::Tickets),
            WizardStep::FinalReview => Some(WizardStep::Review),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("You are already at the last step")]
    AtLastStep,
    #[error("You are already at the first step")]
    AtFirstStep,
    #[error("The booking can only be submitted from the final review step")]
    NotAtFinalReview,
}

/// Ошибки валидации по полям формы, в порядке полей.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error("Booking form validation failed")]
    Validation(FieldErrors),
}

/// Данные формы бронирования. Всё опционально до отправки.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingForm {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub tickets: TicketSelection,
}

/// Частичное обновление формы: присутствующие поля перезаписывают
/// текущее значение, отсутствующие не трогаются.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormPatch {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub tickets: Option<TicketSelection>,
}

impl BookingForm {
    pub fn total_amount(&self) -> i64 {
        self.tickets.total_amount()
    }

    /// Полная проверка формы. `today` передаётся снаружи, чтобы правило
    /// "не раньше текущей даты" было детерминированным в тестах.
    pub fn validate(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        match self.date {
            None => {
                errors.insert("date", "Please select a date");
            }
            Some(date) if date < today => {
                errors.insert("date", "Please select a date that is not in the past");
            }
            Some(_) => {}
        }

        match self.time.as_deref() {
            None | Some("") => {
                errors.insert("time", "Please select a time");
            }
            Some(time) if !AVAILABLE_TIMES.contains(&time) => {
                errors.insert("time", "Please select one of the available time slots");
            }
            Some(_) => {}
        }

        if self.tickets.total_tickets() == 0 {
            errors.insert("tickets", "Please select at least one ticket");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Проверенные данные бронирования, готовые к записи в базу.
#[derive(Debug, Clone)]
pub struct ValidatedBooking {
    pub event_date: NaiveDate,
    pub event_time: String,
    pub tickets: TicketSelection,
    pub total_amount: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingWizard {
    pub step: WizardStep,
    pub form: BookingForm,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Шаг вперёд. Без валидации — см. заголовок модуля.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.step = self.step.next().ok_or(WizardError::AtLastStep)?;
        Ok(self.step)
    }

    /// Шаг назад, запрещён только с первого шага.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        self.step = self.step.back().ok_or(WizardError::AtFirstStep)?;
        Ok(self.step)
    }

    pub fn apply(&mut self, patch: FormPatch) {
        if let Some(date) = patch.date {
            self.form.date = Some(date);
        }
        if let Some(time) = patch.time {
            self.form.time = Some(time);
        }
        if let Some(tickets) = patch.tickets {
            self.form.tickets = tickets;
        }
    }

    /// Отправка бронирования: только с последнего шага и только после
    /// успешной валидации всей формы.
    pub fn submit(&self, today: NaiveDate) -> Result<ValidatedBooking, SubmitError> {
        if self.step != WizardStep::FinalReview {
            return Err(WizardError::NotAtFinalReview.into());
        }
        self.form.validate(today).map_err(SubmitError::Validation)?;

        // validate() гарантирует наличие даты и времени
        let event_date = self.form.date.ok_or(WizardError::NotAtFinalReview)?;
        let event_time = self.form.time.clone().ok_or(WizardError::NotAtFinalReview)?;

        Ok(ValidatedBooking {
            event_date,
            event_time,
            tickets: self.form.tickets,
            total_amount: self.form.total_amount(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ticket::TicketSelection;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn filled_form() -> BookingForm {
        BookingForm {
            date: Some(today()),
            time: Some("2:00 PM".to_string()),
            tickets: TicketSelection {
                adult: 2,
                student: 1,
                ..TicketSelection::default()
            },
        }
    }

    fn wizard_at_final_review(form: BookingForm) -> BookingWizard {
        BookingWizard {
            step: WizardStep::FinalReview,
            form,
        }
    }

    #[test]
    fn walks_forward_through_all_three_steps() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.step, WizardStep::Tickets);
        assert_eq!(wizard.advance(), Ok(WizardStep::Review));
        assert_eq!(wizard.advance(), Ok(WizardStep::FinalReview));
        assert_eq!(wizard.advance(), Err(WizardError::AtLastStep));
    }

    #[test]
    fn back_is_blocked_only_on_the_first_step() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.back(), Ok(WizardStep::Review));
        assert_eq!(wizard.back(), Ok(WizardStep::Tickets));
    }

    #[test]
    fn forward_transitions_skip_validation() {
        // Пустая форма, но до последнего шага дойти можно
        let mut wizard = BookingWizard::new();
        assert!(wizard.advance().is_ok());
        assert!(wizard.advance().is_ok());
        assert_eq!(wizard.step, WizardStep::FinalReview);
    }

    #[test]
    fn submit_is_rejected_before_final_review() {
        let mut wizard = BookingWizard::new();
        wizard.apply(FormPatch {
            date: Some(today()),
            time: Some("2:00 PM".to_string()),
            tickets: Some(TicketSelection {
                adult: 1,
                ..TicketSelection::default()
            }),
        });
        assert!(matches!(
            wizard.submit(today()),
            Err(SubmitError::Wizard(WizardError::NotAtFinalReview))
        ));
    }

    #[test]
    fn empty_selection_asks_for_at_least_one_ticket() {
        let wizard = wizard_at_final_review(BookingForm {
            tickets: TicketSelection::default(),
            ..filled_form()
        });
        let Err(SubmitError::Validation(errors)) = wizard.submit(today()) else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.get("tickets"), Some(&"Please select at least one ticket"));
    }

    #[test]
    fn past_date_is_rejected_but_today_is_accepted() {
        let yesterday = today().pred_opt().unwrap();

        let wizard = wizard_at_final_review(BookingForm {
            date: Some(yesterday),
            ..filled_form()
        });
        let Err(SubmitError::Validation(errors)) = wizard.submit(today()) else {
            panic!("expected validation failure");
        };
        assert!(errors.contains_key("date"));

        let wizard = wizard_at_final_review(filled_form());
        assert!(wizard.submit(today()).is_ok());
    }

    #[test]
    fn missing_fields_report_per_field_errors() {
        let wizard = wizard_at_final_review(BookingForm::default());
        let Err(SubmitError::Validation(errors)) = wizard.submit(today()) else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.get("date"), Some(&"Please select a date"));
        assert_eq!(errors.get("time"), Some(&"Please select a time"));
        assert_eq!(errors.get("tickets"), Some(&"Please select at least one ticket"));
    }

    #[test]
    fn unknown_time_slot_is_rejected() {
        let wizard = wizard_at_final_review(BookingForm {
            time: Some("9:00 AM".to_string()),
            ..filled_form()
        });
        let Err(SubmitError::Validation(errors)) = wizard.submit(today()) else {
            panic!("expected validation failure");
        };
        assert!(errors.contains_key("time"));
    }

    #[test]
    fn successful_submit_carries_the_derived_total() {
        let wizard = wizard_at_final_review(filled_form());
        let booking = wizard.submit(today()).unwrap();
        assert_eq!(booking.event_date, today());
        assert_eq!(booking.event_time, "2:00 PM");
        // 2 взрослых + 1 студент
        assert_eq!(booking.total_amount, 5000);
    }

    proptest! {
        #[test]
        fn zero_ticket_sum_never_submits(
            slot in 0usize..AVAILABLE_TIMES.len(),
            offset in 0i64..365,
        ) {
            let form = BookingForm {
                date: today().checked_add_signed(chrono::Duration::days(offset)),
                time: Some(AVAILABLE_TIMES[slot].to_string()),
                tickets: TicketSelection::default(),
            };
            let wizard = wizard_at_final_review(form);
            prop_assert!(matches!(
                wizard.submit(today()),
                Err(SubmitError::Validation(ref errors)) if errors.contains_key("tickets")
            ));
        }

        #[test]
        fn any_positive_selection_submits_with_exact_total(
            adult in 0u32..100,
            senior in 0u32..100,
            student in 0u32..100,
            child in 0u32..100,
        ) {
            prop_assume!(adult + senior + student + child > 0);
            let form = BookingForm {
                tickets: TicketSelection { adult, senior, student, child },
                ..filled_form()
            };
            let wizard = wizard_at_final_review(form);
            let booking = wizard.submit(today()).unwrap();
            let expected = i64::from(adult) * 2000
                + i64::from(senior) * 1400
                + i64::from(student) * 1000;
            prop_assert_eq!(booking.total_amount, expected);
        }
    }
}
