//! Narrative element types and calendar availability.

/// A month/day range, evaluated year-independently.
///
/// A window whose start month equals its end month is a same-month range.
/// Otherwise it spans from the start day in the start month to the end day
/// in the end month. Windows never wrap across a year boundary.
///
/// # Examples
///
/// ```
/// use alibi_core::DateWindow;
///
/// // Easter window: March 15 through April 30
/// let window = DateWindow::new(3, 15, 4, 30);
/// assert!(window.contains(3, 20));
/// assert!(window.contains(4, 1));
/// assert!(!window.contains(3, 1));
/// assert!(!window.contains(5, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    /// First month of the window (1 = January)
    pub start_month: u32,
    /// First active day within the start month
    pub start_day: u32,
    /// Last month of the window
    pub end_month: u32,
    /// Last active day within the end month
    pub end_day: u32,
}

impl DateWindow {
    /// Create a new window. Months are 1-12, days 1-31.
    pub const fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            start_month,
            start_day,
            end_month,
            end_day,
        }
    }

    /// Whether the given month/day falls inside this window.
    ///
    /// The caller supplies "now" explicitly; this function never reads the
    /// system clock.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        if self.start_month == self.end_month {
            month == self.start_month && day >= self.start_day && day <= self.end_day
        } else {
            (month == self.start_month && day >= self.start_day)
                || (month == self.end_month && day <= self.end_day)
                || (month > self.start_month && month < self.end_month)
        }
    }
}

/// When a narrative element may be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    /// Available on every calendar day
    Always,
    /// Available only inside the given month/day window
    Window(DateWindow),
}

impl Availability {
    /// Whether the element is active on the given month/day.
    pub fn is_active(&self, month: u32, day: u32) -> bool {
        match self {
            Availability::Always => true,
            Availability::Window(window) => window.contains(month, day),
        }
    }
}

/// An optional thematic ingredient the generator weaves into the comedic
/// excuse (e.g. "a suspicious-looking duck").
///
/// Elements are static catalog data, so all fields borrow from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NarrativeElement {
    /// Stable identifier used in request payloads
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// How to describe this element inside the prompt
    pub prompt_fragment: &'static str,
    /// When the element may be requested
    pub availability: Availability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_month_window_checks_day_bounds() {
        let window = DateWindow::new(10, 1, 10, 31);
        assert!(window.contains(10, 1));
        assert!(window.contains(10, 31));
        assert!(!window.contains(9, 30));
        assert!(!window.contains(11, 1));
    }

    #[test]
    fn cross_month_window_spans_months() {
        let window = DateWindow::new(3, 15, 4, 30);
        assert!(window.contains(3, 15));
        assert!(window.contains(3, 31));
        assert!(window.contains(4, 30));
        assert!(!window.contains(3, 14));
        assert!(!window.contains(5, 1));
    }

    #[test]
    fn cross_month_window_includes_interior_months() {
        let window = DateWindow::new(6, 20, 8, 10);
        assert!(window.contains(7, 1));
        assert!(window.contains(7, 31));
        assert!(!window.contains(5, 25));
    }

    #[test]
    fn always_available_ignores_date() {
        assert!(Availability::Always.is_active(1, 1));
        assert!(Availability::Always.is_active(12, 31));
    }

    #[test]
    fn windowed_availability_follows_window() {
        let availability = Availability::Window(DateWindow::new(12, 1, 12, 25));
        assert!(availability.is_active(12, 10));
        assert!(!availability.is_active(12, 26));
        assert!(!availability.is_active(1, 10));
    }
}
