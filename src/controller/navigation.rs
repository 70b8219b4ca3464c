use super::CalendarController;
use crate::models::ui::MonthCursor;
use crate::utils::date::DateProvider;

impl<D: DateProvider> CalendarController<D> {
    pub fn previous_month(&mut self) {
        self.cursor = self.cursor.previous();
    }

    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    /// Jump to the month containing today and select today.
    pub fn go_to_today(&mut self) {
        let today = self.dates.today();
        self.cursor = MonthCursor::containing(today);
        self.selected_date = today;
    }

    pub fn show_month(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::CalendarController;
    use crate::models::ui::MonthCursor;
    use crate::utils::date::MockDateProvider;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_and_previous_cross_year() {
        let mut dates = MockDateProvider::new();
        dates.expect_today().return_const(ymd(2024, 12, 31));
        let mut controller = CalendarController::new(dates);

        controller.next_month();
        assert_eq!(controller.cursor(), MonthCursor::new(2025, 1).unwrap());

        controller.previous_month();
        controller.previous_month();
        assert_eq!(controller.cursor(), MonthCursor::new(2024, 11).unwrap());
    }

    #[test]
    fn test_navigation_keeps_selection() {
        let mut dates = MockDateProvider::new();
        dates.expect_today().return_const(ymd(2024, 3, 10));
        let mut controller = CalendarController::new(dates);

        controller.next_month();
        assert_eq!(controller.selected_date(), ymd(2024, 3, 10));
    }

    #[test]
    fn test_go_to_today_resets_cursor_and_selection() {
        let mut dates = MockDateProvider::new();
        dates.expect_today().return_const(ymd(2024, 3, 10));
        let mut controller = CalendarController::new(dates);

        controller.show_month(MonthCursor::new(1999, 7).unwrap());
        controller.select_date(ymd(1999, 7, 4));
        controller.go_to_today();

        assert_eq!(controller.cursor(), MonthCursor::new(2024, 3).unwrap());
        assert_eq!(controller.selected_date(), ymd(2024, 3, 10));
    }
}
