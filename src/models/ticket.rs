use serde::{Deserialize, Serialize};

// Категории билетов музея
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Adult,
    Senior,
    Student,
    Child,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 4] = [
        TicketCategory::Adult,
        TicketCategory::Senior,
        TicketCategory::Student,
        TicketCategory::Child,
    ];

    // Цена билета в рупиях. Детский билет бесплатный.
    pub const fn price(self) -> i64 {
        match self {
            TicketCategory::Adult => 2000,
            TicketCategory::Senior => 1400,
            TicketCategory::Student => 1000,
            TicketCategory::Child => 0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketCategory::Adult => "adult",
            TicketCategory::Senior => "senior",
            TicketCategory::Student => "student",
            TicketCategory::Child => "child",
        }
    }
}

/// Количество билетов по категориям, выбранное в форме бронирования.
/// Живёт только в состоянии мастера и в платёжной эстафете.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSelection {
    pub adult: u32,
    pub senior: u32,
    pub student: u32,
    pub child: u32,
}

impl TicketSelection {
    pub fn count(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Senior => self.senior,
            TicketCategory::Student => self.student,
            TicketCategory::Child => self.child,
        }
    }

    pub fn total_tickets(&self) -> u32 {
        self.adult + self.senior + self.student + self.child
    }

    // Сумма к оплате: Σ(количество × цена). Child с нулевой ценой в сумму
    // ничего не добавляет, пересчитывается при каждом обращении.
    pub fn total_amount(&self) -> i64 {
        TicketCategory::ALL
            .iter()
            .map(|&category| i64::from(self.count(category)) * category.price())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn price_table_matches_box_office() {
        assert_eq!(TicketCategory::Adult.price(), 2000);
        assert_eq!(TicketCategory::Senior.price(), 1400);
        assert_eq!(TicketCategory::Student.price(), 1000);
        assert_eq!(TicketCategory::Child.price(), 0);
    }

    #[test]
    fn two_adults_one_student_cost_exactly_5000() {
        let selection = TicketSelection {
            adult: 2,
            student: 1,
            ..TicketSelection::default()
        };
        assert_eq!(selection.total_amount(), 5000);
    }

    #[test]
    fn children_never_contribute_to_total() {
        let selection = TicketSelection {
            child: 7,
            ..TicketSelection::default()
        };
        assert_eq!(selection.total_amount(), 0);
        assert_eq!(selection.total_tickets(), 7);
    }

    #[test]
    fn empty_selection_is_zero() {
        let selection = TicketSelection::default();
        assert_eq!(selection.total_tickets(), 0);
        assert_eq!(selection.total_amount(), 0);
    }

    proptest! {
        #[test]
        fn total_is_the_paid_category_sum(
            adult in 0u32..500,
            senior in 0u32..500,
            student in 0u32..500,
            child in 0u32..500,
        ) {
            let selection = TicketSelection { adult, senior, student, child };
            let expected = i64::from(adult) * 2000
                + i64::from(senior) * 1400
                + i64::from(student) * 1000;
            prop_assert_eq!(selection.total_amount(), expected);
        }
    }
}
